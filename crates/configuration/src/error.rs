//! Errors that can occur while reading, validating or writing configuration.

use std::path::PathBuf;

use thiserror::Error;

/// The errors that can be thrown when parsing a configuration directory.
#[derive(Debug, Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {file_path}:{line}:{column}: {message}")]
    ParseError {
        file_path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("I/O error: {0}")]
    IoErrorButStringified(String),
}

/// The errors that can be thrown when writing a configuration directory.
#[derive(Debug, Error)]
pub enum WriteParsedConfigurationError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// The errors that can be thrown when validating a parsed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MakeRuntimeConfigurationError {
    #[error("naming template {field} '{template}' should contain exactly {expected} placeholder(s), found {found}")]
    InvalidTemplate {
        field: &'static str,
        template: String,
        expected: usize,
        found: usize,
    },

    #[error("naming template idColumn should not be empty")]
    EmptyIdColumn,
}

/// The errors that can be thrown when loading a configuration directory
/// into a runtime configuration.
#[derive(Debug, Error)]
pub enum LoadConfigurationError {
    #[error(transparent)]
    Parse(#[from] ParseConfigurationError),

    #[error(transparent)]
    Invalid(#[from] MakeRuntimeConfigurationError),
}
