//! Lookup error taxonomy.
//!
//! Every failure of the pipeline surfaces as exactly one [`LookupError`]
//! variant. The web layer collapses them into one user-facing message but
//! logs the [`ErrorKind`].

use std::fmt;

use serde::Serialize;

use crate::config::ConfigError;
use crate::domain::{Coordinates, InvalidPlace};
use crate::fetch::FetchError;

/// Errors from resolving a place name to its nearest stop.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The place name was empty or otherwise unusable
    #[error(transparent)]
    InvalidInput(#[from] InvalidPlace),

    /// Network failure or non-success HTTP status
    #[error(transparent)]
    Transport(FetchError),

    /// Response body was not JSON, or not the shape we expect
    #[error("JSON parse error: {message}")]
    Parse {
        message: String,
        body: Option<String>,
    },

    /// The geocoding service had no usable match
    #[error("no match for place {place:?}: {reason}")]
    NoMatch { place: String, reason: &'static str },

    /// The stops service had no usable stop
    #[error("no stop found near {coords}: {reason}")]
    NoStopFound {
        coords: Coordinates,
        reason: &'static str,
    },

    /// Credentials or other settings are missing or invalid
    #[error(transparent)]
    Configuration(#[from] ConfigError),
}

impl LookupError {
    /// The broad category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::InvalidInput(_) => ErrorKind::InvalidInput,
            LookupError::Transport(_) => ErrorKind::Transport,
            LookupError::Parse { .. } => ErrorKind::Parse,
            LookupError::NoMatch { .. } => ErrorKind::NoMatch,
            LookupError::NoStopFound { .. } => ErrorKind::NoStopFound,
            LookupError::Configuration(_) => ErrorKind::Configuration,
        }
    }

    /// A payload that decoded as JSON but not into the expected structure.
    pub(crate) fn unexpected_shape(err: serde_json::Error) -> Self {
        LookupError::Parse {
            message: err.to_string(),
            body: None,
        }
    }
}

impl From<FetchError> for LookupError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Json { message, body } => LookupError::Parse { message, body },
            other => LookupError::Transport(other),
        }
    }
}

/// Category of a [`LookupError`], for logging and API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    Transport,
    Parse,
    NoMatch,
    NoStopFound,
    Configuration,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::Transport => "transport",
            ErrorKind::Parse => "parse",
            ErrorKind::NoMatch => "no_match",
            ErrorKind::NoStopFound => "no_stop_found",
            ErrorKind::Configuration => "configuration",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
