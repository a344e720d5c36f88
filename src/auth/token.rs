//! OAuth2 access token payload.
//!
//! This module provides the [`AccessToken`] type held by a
//! [`MendeleySession`](crate::MendeleySession) and handed to the refresh
//! callback for persistence.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// An OAuth2 token payload.
///
/// Token endpoint responses carry `expires_in` (seconds from now);
/// [`AccessToken::from_token_response`] converts that into an absolute
/// `expires_at`. Fields the SDK does not know about are kept in `extra` so a
/// persisted token round-trips unchanged.
///
/// # Example
///
/// ```rust
/// use mendeley::AccessToken;
///
/// let token = AccessToken::new("access-token");
/// assert_eq!(token.token_type, "bearer");
/// assert!(!token.expired());
///
/// // Tokens serialize for storage
/// let json = serde_json::to_string(&token).unwrap();
/// assert!(json.contains("access-token"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    /// The bearer credential attached to API calls.
    pub access_token: String,

    /// Token type reported by the server.
    #[serde(default = "default_token_type")]
    pub token_type: String,

    /// The refresh token, if one was issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Lifetime in seconds as reported by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,

    /// Absolute expiry time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Granted scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Any other fields from the token payload.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl AccessToken {
    /// Creates a token with no refresh token and no known expiry.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: default_token_type(),
            refresh_token: None,
            expires_in: None,
            expires_at: None,
            scope: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Sets the refresh token.
    #[must_use]
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Sets the absolute expiry time.
    #[must_use]
    pub const fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Parses a token endpoint response body, computing `expires_at`
    /// relative to `received_at`.
    ///
    /// An `expires_in` too large to represent as a date leaves `expires_at`
    /// unset, so the server decides when the token expires.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the body is not a token payload.
    pub fn from_token_response(
        body: &str,
        received_at: DateTime<Utc>,
    ) -> Result<Self, serde_json::Error> {
        let mut token: Self = serde_json::from_str(body)?;
        if token.expires_at.is_none() {
            token.expires_at = token
                .expires_in
                .and_then(Duration::try_seconds)
                .and_then(|lifetime| received_at.checked_add_signed(lifetime));
        }
        Ok(token)
    }

    /// Returns `true` if the token has a known expiry that has passed.
    ///
    /// Tokens without an expiry are considered never expired; the server is
    /// then the only judge.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires_at.is_some_and(|expires_at| Utc::now() >= expires_at)
    }
}

// Verify AccessToken is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AccessToken>();
};
