use std::io;
use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("[line {line}] Error: Unexpected character '{character}'.")]
    UnexpectedCharacter { line: usize, character: char },

    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString { line: usize },

    #[error("[line {line}] Error: Could not convert {lexeme} into a number.")]
    InvalidNumber { line: usize, lexeme: String },

    #[error("[line 0] Error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// The source line the error was detected on, if it came from scanning.
    pub fn line(&self) -> Option<usize> {
        use Error::*;
        match self {
            UnexpectedCharacter { line, .. }
            | UnterminatedString { line }
            | InvalidNumber { line, .. } => Some(*line),
            Io(_) => None,
        }
    }

    pub fn is_lexical(&self) -> bool {
        self.line().is_some()
    }
}

impl From<Error> for io::Error {
    fn from(e: Error) -> io::Error {
        match e {
            Error::Io(inner) => inner,
            other => io::Error::new(io::ErrorKind::Other, other),
        }
    }
}
