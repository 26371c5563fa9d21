//! Rule error types.

use thiserror::Error;

/// Errors that can occur while constructing a rule.
///
/// Rules fail fast at initialization; checking a token never fails.
#[derive(Debug, Error)]
pub enum RuleError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configured keywords produced an invalid search pattern.
    #[error("Invalid keyword pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl RuleError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
