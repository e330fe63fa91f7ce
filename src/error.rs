//! Error types for the casewise crate.
//!
//! Absence of a match is never an error: a dispatch that matches nothing
//! returns [`crate::Outcome::Miss`]. The error type covers only value
//! construction: invalid regex patterns and malformed JSON input.

use std::fmt;

pub type Result<T> = std::result::Result<T, CasewiseError>;

#[derive(Debug, Clone, PartialEq)]
pub enum CasewiseError {
    InvalidRegex(String),
    InvalidJson(String),
}

impl fmt::Display for CasewiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CasewiseError::InvalidRegex(msg) => write!(f, "Invalid regex pattern: {msg}"),
            CasewiseError::InvalidJson(msg) => write!(f, "Invalid JSON: {msg}"),
        }
    }
}

impl std::error::Error for CasewiseError {}

impl From<serde_json::Error> for CasewiseError {
    fn from(err: serde_json::Error) -> Self {
        CasewiseError::InvalidJson(err.to_string())
    }
}
