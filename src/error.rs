//! Error types for coach-nlu construction.
//!
//! The per-utterance interpretation path is total and never fails. The only
//! fallible surfaces are construction-time: rule-table validation, engine
//! configuration checks, and numeral-scanner pattern compilation.

use thiserror::Error;

/// Result type alias for coach-nlu operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building the immutable NLU configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid engine or rule-table configuration.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// A scanner pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(String),
}

impl Error {
    /// Creates a configuration error from any message.
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Self::Pattern(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = Error::config("history capacity must be > 0");
        assert_eq!(
            err.to_string(),
            "configuration error: history capacity must be > 0"
        );
    }

    #[test]
    fn test_pattern_error_display() {
        let err = Error::Pattern("unclosed group".to_string());
        assert_eq!(err.to_string(), "pattern error: unclosed group");
    }

    #[test]
    #[allow(clippy::invalid_regex, clippy::unwrap_used)]
    fn test_from_regex_error() {
        let regex_err = regex::Regex::new("[invalid").unwrap_err();
        let err: Error = regex_err.into();
        assert!(matches!(err, Error::Pattern(_)));
    }
}
