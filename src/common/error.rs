use std::fmt::{Debug, Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum SymbolError {
    UnsupportedVersion,
    InvalidUtf8Sequence,
}

impl Display for SymbolError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let msg = match *self {
            Self::UnsupportedVersion => "No version in 1-40 can hold the data",
            Self::InvalidUtf8Sequence => "Invalid UTF8 sequence",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for SymbolError {}

pub type SymbolResult<T> = Result<T, SymbolError>;
