use std::fmt;
use std::io;
use std::result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Field(String),
    Argument(String),
    NotFound(String),
    Io(String),
    State(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Field(msg)       => write!(f, "{}", msg),
            Error::Argument(msg)    => write!(f, "{}", msg),
            Error::NotFound(name)   => write!(f, "Contact {} doesn't exist", name),
            Error::Io(msg)          => write!(f, "{}", msg),
            Error::State(msg)       => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Argument(format!("bad config, error: {}", err))
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Io(format!("CSV error: {}", err))
    }
}

pub type Result<T> = result::Result<T, Error>;
