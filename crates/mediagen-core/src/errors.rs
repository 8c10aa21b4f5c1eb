//! Error types for the catalog and search layer
//!
//! Ranking itself cannot fail for well-formed input; the failures collected
//! here come from building a search engine out of bad configuration and from
//! decoding a model listing that is not the JSON we expect.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MediagenError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Parsing error: {0}")]
    ParsingError(String),
}

impl From<serde_json::Error> for MediagenError {
    fn from(err: serde_json::Error) -> Self {
        MediagenError::ParsingError(err.to_string())
    }
}

impl From<regex::Error> for MediagenError {
    fn from(err: regex::Error) -> Self {
        MediagenError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MediagenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_config_error() {
        let err = MediagenError::ConfigError("popular boost must be finite".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: popular boost must be finite"
        );
    }

    #[test]
    fn json_errors_become_parsing_errors() {
        let err: MediagenError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, MediagenError::ParsingError(_)));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MediagenError>();
    }
}
