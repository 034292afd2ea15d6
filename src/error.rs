//! Error types and Result aliases for buddyterm

use std::fmt;

/// Result type alias for buddyterm operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for buddyterm
///
/// Every variant is a local, recoverable condition surfaced synchronously to
/// the caller. The response simulator performs no real I/O, so nothing here
/// is ever raised mid-simulation.
#[derive(Debug)]
pub enum Error {
    // === Session errors ===
    /// Requested model is not in the configured catalog
    InvalidModel {
        model: String,
    },

    /// Approval mode name is outside the closed set
    InvalidApprovalMode {
        mode: String,
    },

    /// Submitted input trimmed to an empty string
    EmptyInput,

    /// A simulated response is pending; no new command may be dispatched
    SessionBusy,

    /// The session has ended and refuses further input
    SessionEnded,

    // === I/O and serialization errors ===
    /// I/O errors
    Io(std::io::Error),

    /// Serialization errors
    Serde(serde_json::Error),

    /// TOML parsing errors
    Toml(toml::de::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors (for cases not yet categorized)
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidModel { model } => {
                write!(f, "Model '{}' is not in the supported model set", model)
            }
            Error::InvalidApprovalMode { mode } => {
                write!(f, "Approval mode '{}' is not recognized", mode)
            }
            Error::EmptyInput => {
                write!(f, "Input cannot be empty")
            }
            Error::SessionBusy => {
                write!(f, "Session is busy with a pending response")
            }
            Error::SessionEnded => {
                write!(f, "Session has ended and accepts no further input")
            }
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Serde(err) => write!(f, "Serialization error: {}", err),
            Error::Toml(err) => write!(f, "TOML parsing error: {}", err),
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serde(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
