use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    NotFound(String),
    InvalidValue(String),
    MissingArguments { usage: &'static str },
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing the console: {}", e)
            }
            AppError::NotFound(name) => {
                write!(f, "There is no such contact '{}'. Type a correct name!", name)
            }
            AppError::InvalidValue(detail) => {
                write!(f, "Passed values are incorrect: {}", detail)
            }
            AppError::MissingArguments { usage } => {
                write!(
                    f,
                    "Not all params were passed to execute an action. Usage: {}",
                    usage
                )
            }
        }
    }
}

impl std::error::Error for AppError {}
