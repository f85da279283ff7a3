/// Commands understood by the phone book.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    ShowAll,
    GoodBye,
    Unknown,
}

/// Dispatch table, tested top to bottom. The first prefix that matches wins.
///
/// Matching is on the raw line, not on the first word, so `addressbook` is
/// routed to `add`.
pub const COMMANDS: &[(&str, Command)] = &[
    ("hello", Command::Hello),
    ("add", Command::Add),
    ("change", Command::Change),
    ("phone", Command::Phone),
    ("show all", Command::ShowAll),
    ("good bye", Command::GoodBye),
    ("close", Command::GoodBye),
    ("exit", Command::GoodBye),
];

/// Shortcut that always ends the session.
pub const TERMINATOR: &str = ".";

#[derive(Debug, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: &'static str,
    pub command: Command,
    pub args: Vec<String>,
}

impl Command {
    pub fn usage(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add <name> <phone>",
            Command::Change => "change <name> <phone>",
            Command::Phone => "phone <name>",
            Command::ShowAll => "show all",
            Command::GoodBye => "good bye | close | exit | .",
            Command::Unknown => "",
        }
    }
}

/// Resolves a console line, already stripped of its line terminator.
pub fn parse_command(line: &str) -> ParsedCommand {
    if line == TERMINATOR {
        return ParsedCommand {
            name: "good bye",
            command: Command::GoodBye,
            args: Vec::new(),
        };
    }

    for &(prefix, command) in COMMANDS {
        if let Some(rest) = line.strip_prefix(prefix) {
            return ParsedCommand {
                name: prefix,
                command,
                args: rest.split_whitespace().map(str::to_string).collect(),
            };
        }
    }

    ParsedCommand {
        name: "unknown",
        command: Command::Unknown,
        args: Vec::new(),
    }
}
