//! Validation error types

use std::fmt;

/// Validation error for listing parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `fields` was given but named no known column
    NoFields { requested: String },

    /// Parameter names a column that is not in the allow-list
    UnknownColumn { field: &'static str, value: String },

    /// Query string could not be decoded at all
    MalformedQuery { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFields { requested } => {
                write!(f, "fields '{}' does not name any known column", requested)
            }
            Self::UnknownColumn { field, value } => {
                write!(f, "invalid {} value: '{}'", field, value)
            }
            Self::MalformedQuery { reason } => write!(f, "malformed query string: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
