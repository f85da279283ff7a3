use clap::Parser;
use log::LevelFilter;

pub const DEFAULT_PROMPT: &str = "Type a command>>> ";

#[derive(Parser, Debug)]
#[command(name = "rusty-phonebook", version, about = "Interactive phone book")]
pub struct Cli {
    /// Text shown before each command is read
    #[arg(long, env = "PHONEBOOK_PROMPT", default_value_t = String::from(DEFAULT_PROMPT))]
    pub prompt: String,

    /// Log verbosity written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, env = "PHONEBOOK_LOG", default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,
}
