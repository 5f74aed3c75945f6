//!
//! The Foundry ABI and bytecode extractor library.
//!

pub mod artifact;
pub mod error;
pub mod output;
pub mod prompt;
pub mod request;
pub mod toolchain;

pub use self::artifact::CompiledArtifact;
pub use self::error::Error;
pub use self::output::OutputRecord;
pub use self::request::CompilationRequest;
pub use self::toolchain::Toolchain;

/// The process exit code of a successful run.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code of a failed run. All failures share it.
pub const EXIT_CODE_FAILURE: i32 = 1;
