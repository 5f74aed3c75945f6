//!
//! The interactive prompts.
//!

use std::io::BufRead;
use std::io::Write;

///
/// Prints `question` and reads one trimmed line from the standard input.
///
pub fn ask(question: &str) -> std::io::Result<String> {
    let stdin = std::io::stdin();
    let mut stdin = stdin.lock();
    let mut stdout = std::io::stdout();
    ask_with(question, &mut stdin, &mut stdout)
}

fn ask_with<R, W>(question: &str, input: &mut R, output: &mut W) -> std::io::Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{} ", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "the input stream was closed before an answer was given",
        ));
    }

    Ok(line.trim().to_owned())
}
