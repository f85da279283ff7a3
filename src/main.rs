use rusty_phonebook::prelude::{AppError, run_app};

fn main() -> Result<(), AppError> {
    run_app()
}
