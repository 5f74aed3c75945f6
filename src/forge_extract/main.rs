//!
//! The Foundry ABI and bytecode extractor binary.
//!

pub mod arguments;

use colored::Colorize;

use foundry_extractor::CompilationRequest;
use foundry_extractor::CompiledArtifact;
use foundry_extractor::Error;
use foundry_extractor::OutputRecord;
use foundry_extractor::Toolchain;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    std::process::exit(match main_inner() {
        Ok(()) => foundry_extractor::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{} {}", "Error:".bright_red(), error);
            foundry_extractor::EXIT_CODE_FAILURE
        }
    })
}

///
/// The auxiliary `main` function to facilitate the `?` error conversion operator.
///
/// Runs the five pipeline stages in order, short-circuiting on the first
/// failure: resolve input, locate the toolchain, build, extract, write.
///
fn main_inner() -> anyhow::Result<()> {
    let arguments = Arguments::new();

    let toolchain = match Toolchain::locate(arguments.forge.clone()) {
        Err(Error::ToolchainMissing) if arguments.install => {
            println!("{}", "Installing Foundry...".bright_cyan());
            Toolchain::install()?;
            Toolchain::locate(arguments.forge)?
        }
        result => result?,
    };
    if let Some(version) = toolchain.version.as_ref() {
        println!("Using forge {}", version);
    }

    let directory = value_or_ask(
        arguments.dir,
        "Enter the project directory (e.g. ~/demo):",
    )?;
    let file = value_or_ask(
        arguments.file,
        "Enter the contract file (e.g. src/Token.sol):",
    )?;
    let request = CompilationRequest::resolve(directory.as_str(), file.as_str())?;

    println!("{}", "Compiling with Foundry...".bright_cyan());
    toolchain.build(&request)?;

    let artifact = CompiledArtifact::try_from_request(&request)?;

    let destination = value_or_ask(
        arguments.out,
        "Enter the output file path (e.g. build/Token.json):",
    )?;
    let destination = foundry_extractor::request::expand_tilde(destination.as_str());
    let record = OutputRecord::new(request.contract_name().to_owned(), artifact);
    record.write_to_file(destination.as_path())?;

    println!(
        "{} {}",
        "ABI and bytecode saved to".bright_green(),
        destination.to_string_lossy()
    );

    Ok(())
}

///
/// Returns the flag value if present, falling back to an interactive prompt.
///
fn value_or_ask(value: Option<String>, question: &str) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => foundry_extractor::prompt::ask(question).map_err(Into::into),
    }
}
