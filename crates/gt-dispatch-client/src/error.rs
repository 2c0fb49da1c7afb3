//! Dispatch API client error types.

use std::collections::BTreeMap;

/// Errors from dispatch API calls.
#[derive(Debug, thiserror::Error)]
pub enum DispatchApiError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The request did not complete within the configured timeout.
    #[error("dispatch API {endpoint} timed out")]
    Timeout { endpoint: String },
    /// The backend refused the submission with its standard envelope,
    /// usually a field validation failure.
    #[error("dispatch API {endpoint} rejected the request ({status}): {message}")]
    Rejected {
        endpoint: String,
        status: u16,
        message: String,
        errors: BTreeMap<String, Vec<String>>,
    },
    /// The backend returned a non-2xx status without a readable envelope.
    #[error("dispatch API {endpoint} returned {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl DispatchApiError {
    /// Classify a reqwest failure, separating timeouts from other transport errors.
    pub(crate) fn transport(endpoint: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                endpoint: endpoint.to_string(),
            }
        } else {
            Self::Http {
                endpoint: endpoint.to_string(),
                source,
            }
        }
    }
}
