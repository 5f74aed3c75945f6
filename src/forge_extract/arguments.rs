//!
//! The Foundry ABI and bytecode extractor arguments.
//!

use std::path::PathBuf;

use structopt::StructOpt;

///
/// Compiles a contract of a Foundry project with `forge build` and saves its
/// ABI and deployment bytecode to a single JSON file.
///
/// Values omitted from the command line are prompted for interactively.
///
/// Example: forge-extract --dir ~/demo --file src/Token.sol --out build/Token.json
///
#[derive(Debug, StructOpt)]
#[structopt(name = "The Foundry ABI and bytecode extractor")]
pub struct Arguments {
    /// The Foundry project directory. A leading `~` is expanded
    /// to the home directory.
    #[structopt(short = "d", long = "dir")]
    pub dir: Option<String>,

    /// The contract source file, either relative to the project
    /// directory or absolute.
    #[structopt(short = "f", long = "file")]
    pub file: Option<String>,

    /// The destination path for the extracted ABI and bytecode.
    /// Missing parent directories are created.
    #[structopt(short = "o", long = "out")]
    pub out: Option<String>,

    /// Path to the `forge` executable.
    /// By default, `~/.foundry/bin/forge` or the one in $PATH is used.
    #[structopt(long = "forge")]
    pub forge: Option<PathBuf>,

    /// Install Foundry via its bootstrap script if `forge` is missing.
    #[structopt(long = "install")]
    pub install: bool,
}

impl Arguments {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::from_args()
    }
}

impl Default for Arguments {
    fn default() -> Self {
        Self::new()
    }
}
