use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Io,
    Format,
    IndexOutOfRange,
    InactiveSlot,
    FormatMismatch,
    LengthMismatch,
    OutOfBounds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveError {
    pub code: ErrorCode,
    pub message: String,
}

impl SaveError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl Error for SaveError {}

impl From<io::Error> for SaveError {
    fn from(e: io::Error) -> Self {
        Self::new(ErrorCode::Io, e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SaveError>;
