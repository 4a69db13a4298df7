//! Error types for gamecmd-core

use thiserror::Error;

/// Core error type
///
/// Everything here is surfaced synchronously to the caller. Failures raised
/// by a command's guard or execute handler never show up as an `Error`; the
/// dispatcher turns them into [`ExecutionError`]s delivered through the
/// `fail` channel.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed registration, identifier or configuration value
    #[error("validation error: {0}")]
    Validation(String),

    /// Name or alias already present in the namespace
    #[error("a command named \"{0}\" already exists")]
    Conflict(String),

    /// A `receive` or `fail` listener failed
    #[error("{channel} listener failed: {source}")]
    Listener {
        /// Channel the listener was attached to
        channel: &'static str,
        /// Error returned by the listener
        #[source]
        source: anyhow::Error,
    },
}

impl Error {
    /// Shorthand for a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Phase of a dispatch in which a command failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The guard predicate failed
    Guard,
    /// The execute handler failed
    Execute,
}

impl Stage {
    /// Returns the string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guard => "guard",
            Self::Execute => "execute",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Failure captured from a command's guard or execute handler
#[derive(Debug, Error)]
#[error("{stage} failed for command \"{command}\": {source}")]
pub struct ExecutionError {
    /// Canonical name of the failing command
    pub command: String,
    /// Phase that failed
    pub stage: Stage,
    /// The error returned by the handler, untouched
    #[source]
    pub source: anyhow::Error,
}

impl ExecutionError {
    /// The original error produced by the handler
    #[must_use]
    pub fn inner(&self) -> &anyhow::Error {
        &self.source
    }

    /// Attempt to downcast the original error
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
    {
        self.source.downcast_ref::<E>()
    }
}
