//! Dispatcher configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Message sent to the actor for unknown commands unless overridden
pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "SERVER: Command not found.";

/// Configuration for the dispatcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatcherConfig {
    /// Tell the actor when the command they typed does not exist
    #[serde(default)]
    pub not_found_notice: bool,
    /// Text of the not-found notice
    #[serde(default = "default_not_found_message")]
    pub not_found_message: String,
}

fn default_not_found_message() -> String {
    DEFAULT_NOT_FOUND_MESSAGE.to_string()
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            not_found_notice: false,
            not_found_message: default_not_found_message(),
        }
    }
}

impl DispatcherConfig {
    /// Enable or disable the not-found notice
    #[must_use]
    pub fn with_not_found_notice(mut self, enabled: bool) -> Self {
        self.not_found_notice = enabled;
        self
    }

    /// Set the not-found message (checked by [`DispatcherConfig::validate`])
    #[must_use]
    pub fn with_not_found_message(mut self, message: impl Into<String>) -> Self {
        self.not_found_message = message.into();
        self
    }

    /// Reject values the dispatcher cannot use
    pub fn validate(&self) -> Result<()> {
        validate_not_found_message(&self.not_found_message)
    }
}

pub(crate) fn validate_not_found_message(message: &str) -> Result<()> {
    if message.is_empty() {
        return Err(Error::validation("message must be a non-empty string"));
    }
    Ok(())
}
