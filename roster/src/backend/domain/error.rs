use std::fmt;
use std::path::PathBuf;

use super::models::student::StudentValidationError;

/// Key used to look a student up, carried by [`RosterError::NotFound`]
#[derive(Debug, Clone, PartialEq)]
pub enum LookupKey {
    Name(String),
    RollNumber(i32),
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Name(name) => write!(f, "name: {}", name),
            LookupKey::RollNumber(roll) => write!(f, "roll number: {}", roll),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Duplicate Roll Number! ({0})")]
    DuplicateKey(i32),
    #[error("No student found with {0}")]
    NotFound(LookupKey),
    #[error(transparent)]
    Validation(#[from] StudentValidationError),
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Corrupt data in {} at line {line}: {reason}", .path.display())]
    CorruptData {
        path: PathBuf,
        line: u64,
        reason: String,
    },
}

impl RosterError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RosterError::Io { path: path.into(), source }
    }
}

pub type RosterResult<T> = Result<T, RosterError>;
