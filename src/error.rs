//!
//! The extractor error.
//!

///
/// The extractor error.
///
/// One variant per failure kind. Every variant is fatal except the toolchain
/// identity check, which is reported as a warning at its call site and never
/// reaches this type.
///
#[derive(Debug)]
pub enum Error {
    /// The `forge` executable cannot be found or run.
    ToolchainMissing,
    /// The automated toolchain installation failed.
    ToolchainInstall(String),
    /// The project directory does not exist or is not a directory.
    DirectoryNotFound(String),
    /// The contract source file does not exist at the resolved path.
    ContractFileNotFound(String),
    /// The `forge build` subprocess exited with a non-zero status.
    BuildFailed(String),
    /// The compiled artifact file is absent after a successful build.
    ArtifactNotFound(String),
    /// The artifact lacks the ABI or the bytecode at every known location.
    ArtifactFieldsMissing(String),
    /// The output file or its parent directories cannot be written.
    OutputWriteFailed(String, std::io::Error),
    /// The file system error.
    FileSystem(std::io::Error),
    /// The JSON parsing error.
    Json(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ToolchainMissing => write!(
                f,
                "Foundry is not installed. Please run: curl -L https://foundry.paradigm.xyz | bash"
            ),
            Self::ToolchainInstall(details) => {
                write!(f, "Foundry installation failed: {}", details)
            }
            Self::DirectoryNotFound(path) => write!(f, "Directory `{}` does not exist", path),
            Self::ContractFileNotFound(path) => write!(f, "File `{}` not found", path),
            Self::BuildFailed(details) => write!(f, "Build failed: {}", details),
            Self::ArtifactNotFound(path) => {
                write!(f, "Compiled output not found at `{}`", path)
            }
            Self::ArtifactFieldsMissing(path) => {
                write!(f, "ABI or bytecode missing in compiled output `{}`", path)
            }
            Self::OutputWriteFailed(path, error) => {
                write!(f, "Output file `{}` writing error: {}", path, error)
            }
            Self::FileSystem(error) => write!(f, "File system error: {}", error),
            Self::Json(error) => write!(f, "JSON parsing error: {}", error),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::FileSystem(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}
