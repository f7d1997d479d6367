//! Shared error types for the services crate.

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure category of a backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// No response was obtained.
    Transport,
    /// The server answered with a non-success status.
    Server,
    /// A response arrived but did not have the expected shape.
    Decode,
}

/// Errors emitted by `QuizApi` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizApiError {
    #[error("transport failure: {0}")]
    Transport(#[source] BoxError),
    #[error("server returned {status}: {message}")]
    Server {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

impl QuizApiError {
    pub fn transport(err: impl Into<BoxError>) -> Self {
        Self::Transport(err.into())
    }

    #[must_use]
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Transport(_) | Self::Url(_) => ApiErrorKind::Transport,
            Self::Server { .. } => ApiErrorKind::Server,
            Self::Decode(_) => ApiErrorKind::Decode,
        }
    }

    /// Server-supplied message, if this is a server-reported failure.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Errors emitted while building a `ClientConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid base url {raw:?}: {source}")]
    BaseUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("base url {0:?} cannot carry a path")]
    OpaqueBaseUrl(String),
    #[error("{name} must be greater than zero")]
    ZeroDuration { name: &'static str },
    #[error("invalid value for {var}: {raw:?}")]
    InvalidEnv { var: &'static str, raw: String },
}
