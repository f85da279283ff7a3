pub mod book;
pub mod command;
pub mod handlers;

pub use crate::errors::AppError;
pub use book::{AddOutcome, ContactBook};
pub use command::{COMMANDS, Command, ParsedCommand, parse_command};
pub use handlers::{Reply, execute};
