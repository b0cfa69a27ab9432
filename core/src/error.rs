//! Error taxonomy for backend calls.

use crate::transport::TransportError;

/// Failure of a call to the Chronos backend.
///
/// Every variant carries enough context (method, path, status, body) for the
/// UI layer to render a diagnostic. Callers must not retry automatically.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{method} {path} failed with HTTP {status}: {body}")]
    Http {
        method: String,
        path: String,
        status: u16,
        /// Raw response body, empty if it could not be read.
        body: String,
    },

    /// A card code was found neither by direct lookup nor in the full catalog.
    #[error("card '{code}' not found")]
    NotFound { code: String },

    /// The response claimed to be JSON but did not parse.
    #[error("{method} {path} returned malformed JSON: {source}")]
    Decode {
        method: String,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// No response was received (connection refused, DNS, TLS, timeout).
    #[error("{method} {path} could not be sent: {source}")]
    Transport {
        method: String,
        path: String,
        #[source]
        source: TransportError,
    },

    /// An endpoint path could not be built.
    #[error("invalid request path: {0}")]
    InvalidPath(String),

    /// A request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    /// HTTP status of an [`ApiError::Http`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Request path the failure relates to, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            ApiError::Http { path, .. }
            | ApiError::Decode { path, .. }
            | ApiError::Transport { path, .. } => Some(path.as_str()),
            ApiError::NotFound { .. } | ApiError::InvalidPath(_) | ApiError::Encode(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. }) || self.status() == Some(404)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_carries_context() {
        let err = ApiError::Http {
            method: "DELETE".to_string(),
            path: "/game/end/g1".to_string(),
            status: 404,
            body: "no such game".to_string(),
        };
        assert_eq!(err.to_string(), "DELETE /game/end/g1 failed with HTTP 404: no such game");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.path(), Some("/game/end/g1"));
        assert!(err.is_not_found());
    }

    #[test]
    fn not_found_has_no_path() {
        let err = ApiError::NotFound { code: "X".to_string() };
        assert_eq!(err.status(), None);
        assert_eq!(err.path(), None);
        assert!(err.is_not_found());
    }
}
