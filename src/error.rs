//! Crate-level error types.
//!
//! Only configuration and replay I/O can fail. Controller operations
//! themselves treat missing cameras, out-of-range input, and empty picks
//! as "nothing to do" and never produce an error.

use std::fmt;

/// Errors produced by the viewpoint crate.
#[derive(Debug)]
pub enum ViewpointError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Replay script parsing failure.
    ScriptParse(serde_json::Error),
}

impl fmt::Display for ViewpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ScriptParse(e) => write!(f, "replay script error: {e}"),
        }
    }
}

impl std::error::Error for ViewpointError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ScriptParse(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for ViewpointError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ViewpointError {
    fn from(e: serde_json::Error) -> Self {
        Self::ScriptParse(e)
    }
}
