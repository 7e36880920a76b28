//! Errors for execution.

use query_engine_translation::translation;
use thiserror::Error;

/// A failure reported by the database executor, classified the way the
/// underlying driver classifies it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct DatabaseError {
    pub kind: String,
    pub message: String,
}

impl DatabaseError {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        DatabaseError {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// Everything that can go wrong while handling a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{0}")]
    Translation(#[from] translation::error::Error),
    #[error("{0}")]
    Database(#[from] DatabaseError),
}

const DATABASE_ERROR_CODE: u32 = 1;

impl Error {
    pub fn code(&self) -> u32 {
        match self {
            Error::Translation(err) => err.code(),
            Error::Database(_) => DATABASE_ERROR_CODE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Error::Translation(err) => err.name(),
            Error::Database(_) => "DATABASE_ERROR",
        }
    }
}
