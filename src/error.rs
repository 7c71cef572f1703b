//! Crate-level error types.

use std::fmt;

/// Errors produced by the handorbit crate.
#[derive(Debug)]
pub enum HandOrbitError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A recorded landmark frame could not be decoded.
    LandmarkParse {
        /// 1-based line number in the recording.
        line: usize,
        /// Decoder message.
        message: String,
    },
    /// The landmark source failed to produce a frame.
    Source(String),
    /// A per-frame animation callback reported a failure.
    Animation {
        /// Name the callback was registered under.
        name: String,
        /// Failure message reported by the callback.
        message: String,
    },
}

impl fmt::Display for HandOrbitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::LandmarkParse { line, message } => {
                write!(f, "landmark frame {line} is malformed: {message}")
            }
            Self::Source(msg) => write!(f, "landmark source error: {msg}"),
            Self::Animation { name, message } => {
                write!(f, "animation '{name}' failed: {message}")
            }
        }
    }
}

impl std::error::Error for HandOrbitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HandOrbitError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
