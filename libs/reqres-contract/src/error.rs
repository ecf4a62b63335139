//! Error types for contract checks

use thiserror::Error;

/// Everything that can make a contract check fail.
///
/// Transport and decoding problems fail the check the same way an assertion
/// does; nothing is retried or swallowed.
#[derive(Error, Debug)]
pub enum ContractError {
    /// Network or protocol failure while talking to the service
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request model could not be encoded
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Response body did not match the expected model shape
    #[error("failed to decode {model} from response body: {source}\n{exchange}")]
    Decode {
        model: &'static str,
        #[source]
        source: serde_json::Error,
        exchange: String,
    },

    /// Status code differs from the installed response specification
    #[error("expected status {expected}, got {actual}\n{exchange}")]
    UnexpectedStatus {
        expected: u16,
        actual: u16,
        exchange: String,
    },

    /// Response is not JSON although the specification requires it
    #[error("expected JSON content type, got `{actual}`\n{exchange}")]
    UnexpectedContentType { actual: String, exchange: String },

    /// A body was returned for a status that carries none
    #[error("expected empty body for status {status}, got {length} bytes\n{exchange}")]
    UnexpectedBody {
        status: u16,
        length: usize,
        exchange: String,
    },

    /// A field the model requires was absent or null
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),

    /// Observed value differs from the expected one
    #[error("{check}: expected {expected}, got {actual}")]
    Mismatch {
        check: &'static str,
        expected: String,
        actual: String,
    },

    /// A timestamp field is not RFC 3339
    #[error("invalid timestamp `{value}`: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Status code outside the HTTP range
    #[error("invalid status code: {0}")]
    InvalidStatus(u16),

    /// A call was made before any specification was installed
    #[error("no request/response specification installed")]
    NotInstalled,

    /// Configuration could not be used
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ContractError {
    /// Whether the failure came from an assertion rather than from transport.
    pub fn is_assertion(&self) -> bool {
        matches!(
            self,
            ContractError::UnexpectedStatus { .. }
                | ContractError::UnexpectedContentType { .. }
                | ContractError::UnexpectedBody { .. }
                | ContractError::MissingField(_)
                | ContractError::Mismatch { .. }
                | ContractError::InvalidTimestamp { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_reports_both_values() {
        let err = ContractError::Mismatch {
            check: "registration token",
            expected: "\"abc\"".to_string(),
            actual: "\"xyz\"".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "registration token: expected \"abc\", got \"xyz\""
        );
        assert!(err.is_assertion());
    }

    #[test]
    fn not_installed_is_not_an_assertion() {
        assert!(!ContractError::NotInstalled.is_assertion());
        assert!(!ContractError::InvalidStatus(1000).is_assertion());
    }
}
