use crate::{
    cli::{get_input, print_line, show_prompt},
    prelude::{AppError, ContactBook, command::Cli, execute, parse_command},
};
use clap::Parser;
use dotenv::dotenv;
use log::debug;
use std::io::{self, BufRead, Write};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .parse_default_env()
        .init();

    let mut book = ContactBook::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut stdin.lock(), &mut stdout.lock(), &mut book, &cli.prompt)
}

/// Reads commands until a farewell command or end of input.
///
/// Handler errors are printed and the session continues. Only console I/O
/// failures are returned.
pub fn run_session<R, W>(
    input: &mut R,
    output: &mut W,
    book: &mut ContactBook,
    prompt: &str,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    loop {
        show_prompt(output, prompt)?;

        let Some(line) = get_input(input)? else {
            debug!("end of input, closing session");
            // Keep the shell prompt off the last line.
            print_line(output, "")?;
            return Ok(());
        };

        let parsed = parse_command(&line);
        debug!("dispatching {:?} with {:?}", parsed.name, parsed.args);

        match execute(&parsed, book) {
            Ok(reply) => {
                print_line(output, &reply.text)?;
                if reply.terminate {
                    return Ok(());
                }
            }
            Err(e) => {
                debug!("{} failed: {:?}", parsed.name, e);
                print_line(output, &e.to_string())?;
            }
        }
    }
}
