use super::*;
use log::info;

/// What a command prints, and whether the session ends after it.
#[derive(Debug, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub terminate: bool,
}

impl Reply {
    fn say(text: impl Into<String>) -> Self {
        Reply {
            text: text.into(),
            terminate: false,
        }
    }

    fn farewell() -> Self {
        Reply {
            text: "Good bye!".to_string(),
            terminate: true,
        }
    }
}

/// Runs a parsed command against the book.
///
/// Lookup and argument failures come back as `Err` and leave the book as it was.
pub fn execute(parsed: &ParsedCommand, book: &mut ContactBook) -> Result<Reply, AppError> {
    match parsed.command {
        Command::Hello => Ok(hello()),
        Command::Add => add(book, &parsed.args),
        Command::Change => change(book, &parsed.args),
        Command::Phone => phone(book, &parsed.args),
        Command::ShowAll => Ok(show_all(book)),
        Command::GoodBye => Ok(Reply::farewell()),
        Command::Unknown => Ok(unknown()),
    }
}

fn hello() -> Reply {
    Reply::say("How can I help you?")
}

fn add(book: &mut ContactBook, args: &[String]) -> Result<Reply, AppError> {
    let [name, phone] = take_args::<2>(Command::Add, args)?;

    match book.add(name, phone) {
        AddOutcome::Added => {
            info!("added contact {name}");
            Ok(Reply::say(format!(
                "The contact '{name}' with phone '{phone}' has been successfully added"
            )))
        }
        AddOutcome::Duplicate => Ok(Reply::say(format!(
            "The contact '{name}' can't be added repeatedly, \
            use a 'change' command to update the number for existing contact!"
        ))),
    }
}

fn change(book: &mut ContactBook, args: &[String]) -> Result<Reply, AppError> {
    let [name, phone] = take_args::<2>(Command::Change, args)?;

    let old = book.change(name, phone)?;
    info!("changed phone of {name}");

    Ok(Reply::say(format!(
        "The phone number for contact '{name}' has been successfully changed \
        from '{old}' to '{phone}'"
    )))
}

fn phone(book: &ContactBook, args: &[String]) -> Result<Reply, AppError> {
    let [name] = take_args::<1>(Command::Phone, args)?;

    let number = book.phone(name)?;
    Ok(Reply::say(format!(
        "The phone number for contact '{name}' is '{number}'"
    )))
}

fn show_all(book: &ContactBook) -> Reply {
    if book.is_empty() {
        return Reply::say("No contacts yet");
    }

    let mut output = String::from("Contacts phone numbers are:");
    for (i, (name, phone)) in (1..).zip(book.iter()) {
        output.push_str(&format!("\n{i:>3}. {name}: {phone}"));
    }
    Reply::say(output)
}

fn unknown() -> Reply {
    Reply::say("Unknown command. Try again.")
}

/// Borrows exactly `N` arguments.
fn take_args<const N: usize>(command: Command, args: &[String]) -> Result<[&str; N], AppError> {
    if args.len() < N {
        return Err(AppError::MissingArguments {
            usage: command.usage(),
        });
    }
    if args.len() > N {
        return Err(AppError::InvalidValue(format!(
            "expected {N} argument(s), got {} (usage: {})",
            args.len(),
            command.usage()
        )));
    }

    Ok(std::array::from_fn(|i| args[i].as_str()))
}
