use thiserror::Error;

/// Top-level error type for the `tollgate-api` crate.
///
/// Covers every failure mode of a single remote call: configuration,
/// transport, non-2xx responses, and body decoding. The `tollgate` facade
/// wraps these when they occur inside a composite operation.
#[derive(Debug, Error)]
pub enum Error {
    // ── Configuration ───────────────────────────────────────────────
    /// A required configuration field was empty.
    #[error("Missing configuration value: {field}")]
    MissingConfiguration { field: &'static str },

    // ── Authentication ──────────────────────────────────────────────
    /// The API token was rejected (HTTP 401).
    #[error("Unauthorized -- the API token was rejected")]
    Unauthorized,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured base path (or a path built from it) is not a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── API ─────────────────────────────────────────────────────────
    /// Non-2xx response from the API.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        status: u16,
        message: String,
        code: Option<String>,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// HTTP status code carried by this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if this is a transient error a caller may retry.
    ///
    /// The client itself never retries.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Extract the API error code, if available.
    pub fn api_error_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_reported_for_response_errors() {
        let err = Error::Api {
            status: 404,
            message: "link not found".into(),
            code: Some("not_found".into()),
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
        assert!(!err.is_transient());
        assert_eq!(err.api_error_code(), Some("not_found"));

        assert_eq!(Error::Unauthorized.status(), Some(401));
        assert_eq!(
            Error::MissingConfiguration { field: "api_token" }.status(),
            None
        );
    }

    #[test]
    fn server_errors_are_transient() {
        let err = Error::Api {
            status: 503,
            message: "unavailable".into(),
            code: None,
        };
        assert!(err.is_transient());
    }
}
