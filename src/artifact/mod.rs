//!
//! The compiled artifact.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::error::Error;
use crate::request::CompilationRequest;

/// The build output directory `forge` writes artifacts to.
pub const OUTPUT_DIRECTORY: &str = "out";

/// The known bytecode locations inside the artifact JSON, in lookup order.
pub const BYTECODE_LOCATIONS: [&str; 2] = ["/bytecode/object", "/evm/bytecode/object"];

///
/// The compiled artifact.
///
/// Both fields are opaque to this tool: the ABI is passed through as-is, and
/// the bytecode is only required to be a non-empty string.
///
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledArtifact {
    /// The contract ABI.
    pub abi: serde_json::Value,
    /// The hex-encoded deployment bytecode.
    pub bytecode: String,
}

impl CompiledArtifact {
    ///
    /// The artifact path for a compiled contract, per the Foundry convention:
    /// `<root>/out/<contractFileName>/<contractName>.json`.
    ///
    pub fn path(request: &CompilationRequest) -> PathBuf {
        request
            .project_root
            .join(OUTPUT_DIRECTORY)
            .join(request.contract_file_name())
            .join(format!("{}.json", request.contract_name()))
    }

    ///
    /// Reads the artifact emitted for `request` and extracts the ABI and the
    /// bytecode.
    ///
    pub fn try_from_request(request: &CompilationRequest) -> Result<Self, Error> {
        Self::try_from_path(Self::path(request).as_path())
    }

    ///
    /// Reads and parses the artifact file, then extracts the two fields.
    ///
    /// The bytecode is looked up at each known location in order. A location
    /// only counts as a hit if it holds a non-empty string, so an empty or
    /// malformed primary location falls through to the next one. A missing
    /// ABI or bytecode is a hard failure.
    ///
    pub fn try_from_path(path: &Path) -> Result<Self, Error> {
        if !path.is_file() {
            return Err(Error::ArtifactNotFound(path.to_string_lossy().to_string()));
        }
        let text = std::fs::read_to_string(path)?;
        let json: serde_json::Value = serde_json::from_str(text.as_str())?;

        let abi = match json.get("abi") {
            Some(abi) if !abi.is_null() => abi.to_owned(),
            _ => {
                return Err(Error::ArtifactFieldsMissing(
                    path.to_string_lossy().to_string(),
                ))
            }
        };

        let bytecode = BYTECODE_LOCATIONS
            .iter()
            .find_map(|location| {
                json.pointer(location)
                    .and_then(serde_json::Value::as_str)
                    .filter(|bytecode| !bytecode.is_empty())
            })
            .map(str::to_owned)
            .ok_or_else(|| Error::ArtifactFieldsMissing(path.to_string_lossy().to_string()))?;

        Ok(Self { abi, bytecode })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::CompiledArtifact;
    use crate::error::Error;
    use crate::request::CompilationRequest;

    fn write_artifact(directory: &std::path::Path, json: &str) -> PathBuf {
        let path = directory.join("Token.json");
        std::fs::write(&path, json).expect("Always valid");
        path
    }

    #[test]
    fn ok_primary_bytecode_location() {
        let directory = tempfile::tempdir().expect("Always valid");
        let path = write_artifact(
            directory.path(),
            r#"{"abi": [], "bytecode": {"object": "0x6080"}}"#,
        );

        let artifact = CompiledArtifact::try_from_path(path.as_path()).expect("Always valid");

        assert_eq!(artifact.bytecode, "0x6080");
        assert_eq!(artifact.abi, serde_json::json!([]));
    }

    #[test]
    fn ok_fallback_bytecode_location() {
        let directory = tempfile::tempdir().expect("Always valid");
        let path = write_artifact(
            directory.path(),
            r#"{"abi": [], "evm": {"bytecode": {"object": "0x6080"}}}"#,
        );

        let artifact = CompiledArtifact::try_from_path(path.as_path()).expect("Always valid");

        assert_eq!(artifact.bytecode, "0x6080");
    }

    #[test]
    fn ok_primary_location_preferred() {
        let directory = tempfile::tempdir().expect("Always valid");
        let path = write_artifact(
            directory.path(),
            r#"{
                "abi": [],
                "bytecode": {"object": "0x01"},
                "evm": {"bytecode": {"object": "0x02"}}
            }"#,
        );

        let artifact = CompiledArtifact::try_from_path(path.as_path()).expect("Always valid");

        assert_eq!(artifact.bytecode, "0x01");
    }

    #[test]
    fn ok_fallback_when_primary_empty() {
        let directory = tempfile::tempdir().expect("Always valid");
        let path = write_artifact(
            directory.path(),
            r#"{
                "abi": [],
                "bytecode": {"object": ""},
                "evm": {"bytecode": {"object": "0x6080"}}
            }"#,
        );

        let artifact = CompiledArtifact::try_from_path(path.as_path()).expect("Always valid");

        assert_eq!(artifact.bytecode, "0x6080");
    }

    #[test]
    fn ok_fallback_when_primary_not_a_string() {
        let directory = tempfile::tempdir().expect("Always valid");
        let path = write_artifact(
            directory.path(),
            r#"{
                "abi": [],
                "bytecode": {"object": {"unexpected": true}},
                "evm": {"bytecode": {"object": "0x6080"}}
            }"#,
        );

        let artifact = CompiledArtifact::try_from_path(path.as_path()).expect("Always valid");

        assert_eq!(artifact.bytecode, "0x6080");
    }

    #[test]
    fn error_bytecode_missing_everywhere() {
        let directory = tempfile::tempdir().expect("Always valid");
        let path = write_artifact(directory.path(), r#"{"abi": [], "metadata": {}}"#);

        let result = CompiledArtifact::try_from_path(path.as_path());

        assert!(matches!(result, Err(Error::ArtifactFieldsMissing(_))));
    }

    #[test]
    fn error_abi_missing() {
        let directory = tempfile::tempdir().expect("Always valid");
        let path = write_artifact(directory.path(), r#"{"bytecode": {"object": "0x6080"}}"#);

        let result = CompiledArtifact::try_from_path(path.as_path());

        assert!(matches!(result, Err(Error::ArtifactFieldsMissing(_))));
    }

    #[test]
    fn error_empty_bytecode() {
        let directory = tempfile::tempdir().expect("Always valid");
        let path = write_artifact(directory.path(), r#"{"abi": [], "bytecode": {"object": ""}}"#);

        let result = CompiledArtifact::try_from_path(path.as_path());

        assert!(matches!(result, Err(Error::ArtifactFieldsMissing(_))));
    }

    #[test]
    fn error_artifact_not_found() {
        let result = CompiledArtifact::try_from_path(std::path::Path::new(
            "/nonexistent/out/Token.sol/Token.json",
        ));

        assert!(matches!(result, Err(Error::ArtifactNotFound(_))));
    }

    #[test]
    fn ok_artifact_path_convention() {
        let directory = tempfile::tempdir().expect("Always valid");
        std::fs::write(directory.path().join("Token.sol"), "contract Token {}")
            .expect("Always valid");
        let request = CompilationRequest::resolve(
            directory.path().to_str().expect("Always valid"),
            "Token.sol",
        )
        .expect("Always valid");

        let path = CompiledArtifact::path(&request);

        assert!(path.ends_with("out/Token.sol/Token.json"));
    }
}
