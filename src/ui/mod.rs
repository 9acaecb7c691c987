use std::{fmt, io};

pub mod app;
pub mod views;

#[derive(Debug)]
pub enum UiError {
    Console(io::Error),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UiError::Console(err) => write!(f, "Console error: {}", err),
        }
    }
}

impl From<io::Error> for UiError {
    fn from(error: io::Error) -> Self {
        UiError::Console(error)
    }
}
