//! Checks shared by the statement builders.

use super::super::error::Error;

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        }
        _ => false,
    }
}

/// Names taken from the request end up in the SQL text, so each one must be
/// a plain identifier. `key` is the request entry the name was taken from.
pub fn check_identifier(key: &str, name: &str) -> Result<(), Error> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(Error::InvalidIdentifier(key.to_string()))
    }
}
