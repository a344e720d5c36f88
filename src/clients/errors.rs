//! HTTP-specific error types for the Mendeley API SDK.
//!
//! # Error Handling
//!
//! Every failure surfaced by a request is an [`HttpError`], tagged with an
//! [`ErrorKind`]:
//!
//! - [`ApiError`]: a non-2xx response from the API ([`ErrorKind::Api`])
//! - [`TokenExpiredError`]: the access token has expired ([`ErrorKind::Expired`])
//! - `reqwest::Error`: connection failures and timeouts ([`ErrorKind::Transport`])
//! - [`DecodeError`]: a body that was expected to be JSON could not be decoded
//!   ([`ErrorKind::Decode`])
//!
//! Only token expiry is recovered locally, and only once per request.
//!
//! # Example
//!
//! ```rust,ignore
//! use mendeley::clients::{ErrorKind, HttpError};
//!
//! match session.documents().get("missing", None).await {
//!     Ok(doc) => println!("{:?}", doc.title),
//!     Err(HttpError::Response(e)) if e.is_not_found() => println!("no such document"),
//!     Err(e) if e.kind() == ErrorKind::Expired => println!("please sign in again"),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// The substring the API puts in a 401 body when the bearer token has expired.
pub const TOKEN_EXPIRED_MESSAGE: &str = "Token has expired";

/// Error returned when the API answers with a non-successful status.
///
/// The message is taken from the JSON body's `message` field when present
/// (falling back to `error_description`, then `error`), otherwise from the
/// raw body text, otherwise from the canonical status reason. It is never
/// empty.
///
/// # Example
///
/// ```rust
/// use mendeley::clients::ApiError;
///
/// let error = ApiError {
///     code: 404,
///     message: "Document not found".to_string(),
///     trace_id: Some("abc-123".to_string()),
/// };
///
/// assert!(error.is_not_found());
/// assert_eq!(
///     error.to_string(),
///     "The Mendeley API returned an error (status: 404, message: Document not found)"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("The Mendeley API returned an error (status: {code}, message: {message})")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Server-provided message.
    pub message: String,
    /// Trace id for error reporting (from the `X-Mendeley-Trace-Id` header).
    pub trace_id: Option<String>,
}

impl ApiError {
    /// Builds an error from a response status and raw body.
    #[must_use]
    pub fn from_response(code: u16, body: &str, trace_id: Option<String>) -> Self {
        Self {
            code,
            message: error_message(code, body),
            trace_id,
        }
    }

    /// Returns `true` for a 404 response.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.code == 404
    }
}

/// Why a request was refused on account of an expired access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpirySource {
    /// The stored token's `expires_at` had already passed; nothing was sent.
    Local,
    /// The server answered 401 with a token-expired message.
    Server,
}

/// Error returned when the access token has expired.
///
/// When the session has a [`Refresher`](crate::auth::Refresher), this error
/// triggers exactly one refresh and one retry. It reaches the caller only when
/// no refresher is configured or the retried request expired again.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Access token has expired: {message}")]
pub struct TokenExpiredError {
    /// Where the expiry was detected.
    pub origin: ExpirySource,
    /// Server-provided message, or a local description.
    pub message: String,
}

/// Error returned when JSON could not be converted: a response body that
/// does not decode, or list parameters that cannot form a query.
#[derive(Debug, Error)]
#[error("Failed to convert {target} JSON: {source}")]
pub struct DecodeError {
    /// What was being converted (e.g. "Document", "access token", "query parameters").
    pub target: String,
    /// The underlying JSON error.
    #[source]
    pub source: serde_json::Error,
}

/// Classification of an [`HttpError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The access token has expired.
    Expired,
    /// The API returned a non-successful status.
    Api,
    /// Connection, TLS or timeout failure.
    Transport,
    /// Malformed JSON where a body was expected.
    Decode,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An API error response (non-2xx status code).
    #[error(transparent)]
    Response(#[from] ApiError),

    /// The access token has expired.
    #[error(transparent)]
    TokenExpired(#[from] TokenExpiredError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl HttpError {
    /// Returns the kind tag of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Response(_) => ErrorKind::Api,
            Self::TokenExpired(_) => ErrorKind::Expired,
            Self::Network(_) => ErrorKind::Transport,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Returns the HTTP status code, if the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::TokenExpired(TokenExpiredError {
                origin: ExpirySource::Server,
                ..
            }) => Some(401),
            _ => None,
        }
    }
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};

/// Extracts a best-effort message from an error response body.
pub(crate) fn error_message(code: u16, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error_description", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
                .map(ToString::to_string)
        })
        .filter(|message| !message.is_empty());

    if let Some(message) = from_json {
        return message;
    }

    let raw = body.trim();
    if !raw.is_empty() {
        return raw.to_string();
    }

    reqwest::StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .map_or_else(|| format!("HTTP {code}"), ToString::to_string)
}

/// Returns `true` when a 401 body carries the token-expired message.
pub(crate) fn is_token_expired_body(code: u16, body: &str) -> bool {
    code == 401
        && serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(serde_json::Value::as_str)
                    .map(|message| message.contains(TOKEN_EXPIRED_MESSAGE))
            })
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_read_from_json_message_field() {
        let error = ApiError::from_response(400, r#"{"message":"Bad filter"}"#, None);
        assert_eq!(error.code, 400);
        assert_eq!(error.message, "Bad filter");
    }

    #[test]
    fn test_message_falls_back_to_oauth_error_fields() {
        let body = r#"{"error":"invalid_grant","error_description":"Refresh token revoked"}"#;
        assert_eq!(error_message(400, body), "Refresh token revoked");

        assert_eq!(error_message(400, r#"{"error":"invalid_grant"}"#), "invalid_grant");
    }

    #[test]
    fn test_malformed_json_uses_raw_body_text() {
        let error = ApiError::from_response(500, "<html>Bad gateway</html>", None);
        assert_eq!(error.message, "<html>Bad gateway</html>");
    }

    #[test]
    fn test_json_without_message_uses_raw_body_text() {
        let error = ApiError::from_response(403, r#"{"detail":"nope"}"#, None);
        assert_eq!(error.message, r#"{"detail":"nope"}"#);
    }

    #[test]
    fn test_empty_body_uses_canonical_reason() {
        let error = ApiError::from_response(404, "", None);
        assert_eq!(error.message, "Not Found");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_token_expired_body_detection() {
        let body = r#"{"message":"Could not access resource because: Token has expired"}"#;
        assert!(is_token_expired_body(401, body));
        assert!(!is_token_expired_body(403, body));
        assert!(!is_token_expired_body(401, r#"{"message":"Unauthorized"}"#));
        assert!(!is_token_expired_body(401, "Token has expired"));
    }

    #[test]
    fn test_error_kinds() {
        let api: HttpError = ApiError::from_response(500, "", None).into();
        assert_eq!(api.kind(), ErrorKind::Api);
        assert_eq!(api.status(), Some(500));

        let expired: HttpError = TokenExpiredError {
            origin: ExpirySource::Local,
            message: "expired locally".to_string(),
        }
        .into();
        assert_eq!(expired.kind(), ErrorKind::Expired);
        assert_eq!(expired.status(), None);

        let decode: HttpError = DecodeError {
            target: "Document".to_string(),
            source: serde_json::from_str::<u32>("nope").unwrap_err(),
        }
        .into();
        assert_eq!(decode.kind(), ErrorKind::Decode);
        assert!(decode.to_string().contains("Document"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let error: &dyn std::error::Error = &ApiError::from_response(400, "x", None);
        let _ = error;

        let error: &dyn std::error::Error = &TokenExpiredError {
            origin: ExpirySource::Server,
            message: "x".to_string(),
        };
        let _ = error;
    }
}
