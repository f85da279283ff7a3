pub mod command;
pub mod run;

pub use run::{run_app, run_session};

use crate::errors::AppError;
use std::io::{BufRead, Write};

// OUTPUT FUNCTIONS
pub fn show_prompt<W: Write>(output: &mut W, prompt: &str) -> Result<(), AppError> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    Ok(())
}

pub fn print_line<W: Write>(output: &mut W, text: &str) -> Result<(), AppError> {
    writeln!(output, "{}", text)?;
    Ok(())
}

// INPUT FUNCTIONS
/// Reads one line without its line terminator. `None` means end of input.
///
/// Bytes that are not valid UTF-8 are replaced, so a garbled line is still
/// dispatched instead of ending the session.
pub fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
