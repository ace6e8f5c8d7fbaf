//! Crate-level error types.

use std::fmt;

/// Errors produced by the pivotcam crate.
#[derive(Debug)]
pub enum PivotcamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Malformed pointer-conditions string (e.g. in a TOML preset).
    ConditionsParse(String),
}

impl fmt::Display for PivotcamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ConditionsParse(msg) => {
                write!(f, "conditions parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for PivotcamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PivotcamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
