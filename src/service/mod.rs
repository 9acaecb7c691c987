use std::fmt;

pub mod assets;
pub mod lcu;
pub mod riot;

/// A remote document missed an expected field or carried the wrong type.
#[derive(Debug)]
pub enum ParsingError {
    InvalidType(String),
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParsingError::InvalidType(field) => write!(f, "Unexpected type for field: {}", field),
        }
    }
}
