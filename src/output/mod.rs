//!
//! The output record.
//!

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::artifact::CompiledArtifact;
use crate::error::Error;

///
/// The output record.
///
/// The field order fixes the key order of the written JSON document:
/// `contract`, `abi`, `bytecode`.
///
#[derive(Debug, Serialize)]
pub struct OutputRecord {
    /// The contract name: the source file name minus its extension.
    pub contract: String,
    /// The contract ABI, passed through unmodified.
    pub abi: serde_json::Value,
    /// The hex-encoded deployment bytecode.
    pub bytecode: String,
}

impl OutputRecord {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(contract: String, artifact: CompiledArtifact) -> Self {
        Self {
            contract,
            abi: artifact.abi,
            bytecode: artifact.bytecode,
        }
    }

    ///
    /// Writes the record to `path` as pretty-printed JSON, creating missing
    /// parent directories and overwriting any existing file.
    ///
    pub fn write_to_file(&self, path: &Path) -> Result<(), Error> {
        let write_error =
            |error| Error::OutputWriteFailed(path.to_string_lossy().to_string(), error);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(write_error)?;
            }
        }

        let json = serde_json::to_string_pretty(self).map_err(|error| write_error(error.into()))?;
        let mut file = std::fs::File::create(path).map_err(write_error)?;
        file.write_all(json.as_bytes()).map_err(write_error)?;
        file.write_all(b"\n").map_err(write_error)?;

        Ok(())
    }
}
