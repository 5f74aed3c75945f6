//!
//! The Foundry toolchain.
//!

use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;

use colored::Colorize;

use crate::error::Error;
use crate::request::CompilationRequest;

/// The bare executable name, resolved via `$PATH`.
pub const DEFAULT_EXECUTABLE: &str = "forge";

/// The well-known installation path, relative to the home directory.
pub const HOME_INSTALL_PATH: &str = ".foundry/bin/forge";

/// The documented Foundry bootstrap command.
pub const INSTALL_COMMAND: &str = "curl -L https://foundry.paradigm.xyz | bash";

///
/// The Foundry toolchain.
///
/// Wraps a located `forge` executable. The version is only known if the
/// identity check managed to parse the `--version` output.
///
#[derive(Debug)]
pub struct Toolchain {
    /// The executable path or bare name.
    pub executable: PathBuf,
    /// The reported compiler version, if parseable.
    pub version: Option<semver::Version>,
}

impl Toolchain {
    ///
    /// Locates the `forge` executable and checks its identity.
    ///
    /// An explicit `executable` overrides the search. Otherwise the well-known
    /// home installation path is preferred, with the bare name as fallback.
    ///
    /// Identity mismatches only produce a warning. A binary that cannot be
    /// run at all is a hard failure.
    ///
    pub fn locate(executable: Option<PathBuf>) -> Result<Self, Error> {
        let executable = executable.unwrap_or_else(Self::default_executable);

        let output = Command::new(&executable)
            .arg("--version")
            .stderr(Stdio::null())
            .output()
            .map_err(|_| Error::ToolchainMissing)?;
        if !output.status.success() {
            return Err(Error::ToolchainMissing);
        }

        let stdout = String::from_utf8_lossy(output.stdout.as_slice());
        if !stdout.contains(DEFAULT_EXECUTABLE) {
            let warning = format!(
                "Warning: `{}` does not identify itself as Foundry forge, proceeding anyway",
                executable.to_string_lossy()
            );
            eprintln!("{}", warning.as_str().bright_yellow());
        }

        Ok(Self {
            executable,
            version: Self::parse_version(stdout.as_ref()),
        })
    }

    ///
    /// Installs the toolchain via the documented bootstrap command, then runs
    /// `foundryup` to fetch the binaries.
    ///
    pub fn install() -> Result<(), Error> {
        let status = Command::new("sh")
            .arg("-c")
            .arg(INSTALL_COMMAND)
            .status()
            .map_err(|error| Error::ToolchainInstall(error.to_string()))?;
        if !status.success() {
            return Err(Error::ToolchainInstall(format!(
                "bootstrap command exited with {}",
                status
            )));
        }

        let foundryup = match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(".foundry/bin/foundryup"),
            None => PathBuf::from("foundryup"),
        };
        let status = Command::new(foundryup)
            .status()
            .map_err(|error| Error::ToolchainInstall(error.to_string()))?;
        if !status.success() {
            return Err(Error::ToolchainInstall(format!(
                "foundryup exited with {}",
                status
            )));
        }

        Ok(())
    }

    ///
    /// Runs `forge build` for the requested contract with the project root as
    /// the working directory, streaming the subprocess output to the user.
    ///
    pub fn build(&self, request: &CompilationRequest) -> Result<(), Error> {
        let status = Command::new(&self.executable)
            .current_dir(&request.project_root)
            .arg("build")
            .arg(&request.contract_relative)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|error| Error::BuildFailed(error.to_string()))?;
        if !status.success() {
            return Err(Error::BuildFailed(format!(
                "`forge build` exited with {}",
                status
            )));
        }

        Ok(())
    }

    ///
    /// The default executable: the home installation if present, the bare
    /// name otherwise.
    ///
    fn default_executable() -> PathBuf {
        if let Some(home) = std::env::var_os("HOME") {
            let installed = PathBuf::from(home).join(HOME_INSTALL_PATH);
            if installed.is_file() {
                return installed;
            }
        }

        PathBuf::from(DEFAULT_EXECUTABLE)
    }

    ///
    /// Parses the version out of the `forge --version` banner, which looks
    /// like `forge 0.2.0 (fdd321b 2024-10-15T00:21:13.119600000Z)`.
    ///
    fn parse_version(banner: &str) -> Option<semver::Version> {
        banner
            .split_whitespace()
            .nth(1)
            .map(|word| word.trim_start_matches('v'))
            .and_then(|word| word.parse().ok())
    }
}
