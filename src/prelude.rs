pub use crate::cli::{command, run_app, run_session};
pub use crate::domain::{
    AddOutcome, COMMANDS, Command, ContactBook, ParsedCommand, Reply, execute, parse_command,
};
pub use crate::errors::AppError;
