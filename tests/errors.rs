use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn unknown_contact_does_not_end_session() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .write_stdin("phone ghost\nchange ghost 1\nhello\n.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "There is no such contact 'ghost'. Type a correct name!",
        ))
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::ends_with("Good bye!\n"));

    Ok(())
}

#[test]
fn duplicate_add_keeps_first_number() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .write_stdin("add alice 123\nadd alice 456\nphone alice\n.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The contact 'alice' can't be added repeatedly, \
            use a 'change' command to update the number for existing contact!",
        ))
        .stdout(predicate::str::contains(
            "The phone number for contact 'alice' is '123'",
        ));

    Ok(())
}

#[test]
fn missing_and_extra_arguments() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .write_stdin("add alice\nphone\nadd alice 1 2\n.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Not all params were passed to execute an action. Usage: add <name> <phone>",
        ))
        .stdout(predicate::str::contains(
            "Not all params were passed to execute an action. Usage: phone <name>",
        ))
        .stdout(predicate::str::contains(
            "Passed values are incorrect: expected 2 argument(s), got 3",
        ));

    Ok(())
}

#[test]
fn unknown_command_keeps_looping() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .write_stdin("unknowncmd\nshow all\n.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command. Try again."))
        .stdout(predicate::str::contains("No contacts yet"));

    Ok(())
}

// Commands are matched as raw prefixes, so a longer word is routed to the
// command it starts with.
#[test]
fn word_starting_with_command_is_routed_to_it() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .write_stdin("addressbook\n.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: add <name> <phone>"))
        .stdout(predicate::str::contains("Unknown command").not());

    Ok(())
}

#[test]
fn invalid_utf8_line_does_not_end_session() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .write_stdin(&b"\xff\xfe\nadd \xff\xfe 1\nadd alice 123\nphone alice\nhello\n.\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command. Try again."))
        .stdout(predicate::str::contains(
            "The phone number for contact 'alice' is '123'",
        ))
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::ends_with("Good bye!\n"));

    Ok(())
}

#[test]
fn user_mistakes_are_not_logged_by_default() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env_remove("RUST_LOG")
        .env_remove("PHONEBOOK_LOG")
        .write_stdin("phone ghost\nadd alice\nunknowncmd\n.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("There is no such contact 'ghost'"))
        .stderr(predicate::str::is_empty());

    Ok(())
}
