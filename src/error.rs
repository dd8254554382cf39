//! Error types for the CLI surface
//!
//! Only the outer command-line surface is fallible (bad invocation, I/O
//! while writing output). The completion engine itself has no error channel:
//! every resolution path yields a possibly empty result, because a
//! completion must never abort the user's keystroke.

use std::{fmt, io};

/// Crate-wide `Result` type using [`CompleteError`] as the error.
pub type Result<T> = std::result::Result<T, CompleteError>;

/// Top-level error type for the helper binary.
#[derive(Debug)]
pub enum CompleteError {
    /// I/O errors while writing candidates or scripts.
    Io(io::Error),

    /// Registration requested for a shell this crate has no script for.
    UnsupportedShell(String),

    /// Generic error with a free-form message.
    Generic(String),
}

impl fmt::Display for CompleteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompleteError::Io(e) => write!(f, "I/O error: {e}"),
            CompleteError::UnsupportedShell(shell) => {
                write!(f, "Unsupported shell: {shell} (expected bash or zsh)")
            }
            CompleteError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CompleteError {}

impl From<io::Error> for CompleteError {
    fn from(err: io::Error) -> Self {
        CompleteError::Io(err)
    }
}

impl From<String> for CompleteError {
    fn from(msg: String) -> Self {
        CompleteError::Generic(msg)
    }
}

impl From<&str> for CompleteError {
    fn from(msg: &str) -> Self {
        CompleteError::Generic(msg.to_owned())
    }
}
