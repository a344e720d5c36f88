//! Configuration types for the Mendeley API SDK.
//!
//! This module provides the configuration passed explicitly to every
//! [`MendeleySession`](crate::MendeleySession). There is no process-wide
//! configuration or logger state.
//!
//! # Overview
//!
//! - [`MendeleyConfig`]: The immutable configuration struct
//! - [`MendeleyConfigBuilder`]: A builder for constructing [`MendeleyConfig`] instances
//! - [`ClientId`]: A validated OAuth client id
//! - [`ClientSecret`]: A validated OAuth client secret with masked debug output
//! - [`HostUrl`]: A validated absolute http(s) URL
//!
//! # Example
//!
//! ```rust
//! use mendeley::{MendeleyConfig, ClientId, ClientSecret};
//!
//! let config = MendeleyConfig::builder()
//!     .client_id(ClientId::new("1234").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.host().as_ref(), "https://api.mendeley.com/");
//! ```

mod newtypes;

pub use newtypes::{ClientId, ClientSecret, HostUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Default base host for API requests.
pub const DEFAULT_HOST: &str = "https://api.mendeley.com";

/// Default OAuth2 token endpoint used for refresh-token grants.
pub const DEFAULT_TOKEN_URL: &str = "https://api.mendeley.com/oauth/token";

/// Configuration for the Mendeley API SDK.
///
/// # Thread Safety
///
/// `MendeleyConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct MendeleyConfig {
    client_id: ClientId,
    client_secret: ClientSecret,
    host: HostUrl,
    token_url: HostUrl,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl MendeleyConfig {
    /// Creates a new builder for constructing a `MendeleyConfig`.
    #[must_use]
    pub fn builder() -> MendeleyConfigBuilder {
        MendeleyConfigBuilder::new()
    }

    /// Returns the OAuth client id.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the OAuth client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the base host that request paths are resolved against.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the OAuth token endpoint.
    #[must_use]
    pub const fn token_url(&self) -> &HostUrl {
        &self.token_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify MendeleyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MendeleyConfig>();
};

/// Builder for constructing [`MendeleyConfig`] instances.
///
/// Required fields are `client_id` and `client_secret`.
///
/// # Defaults
///
/// - `host`: [`DEFAULT_HOST`]
/// - `token_url`: [`DEFAULT_TOKEN_URL`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no transport timeout)
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use mendeley::{MendeleyConfig, ClientId, ClientSecret, HostUrl};
///
/// let config = MendeleyConfig::builder()
///     .client_id(ClientId::new("1234").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .host(HostUrl::new("https://api-staging.example.com").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MendeleyConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    host: Option<HostUrl>,
    token_url: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl MendeleyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the OAuth client id (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the OAuth client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Overrides the API base host.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Overrides the OAuth token endpoint.
    #[must_use]
    pub fn token_url(mut self, url: HostUrl) -> Self {
        self.token_url = Some(url);
        self
    }

    /// Sets a prefix prepended to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a timeout applied by the HTTP transport to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`MendeleyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `client_secret` are not set.
    pub fn build(self) -> Result<MendeleyConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;

        let host = match self.host {
            Some(host) => host,
            None => HostUrl::new(DEFAULT_HOST)?,
        };
        let token_url = match self.token_url {
            Some(url) => url,
            None => HostUrl::new(DEFAULT_TOKEN_URL)?,
        };

        Ok(MendeleyConfig {
            client_id,
            client_secret,
            host,
            token_url,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> MendeleyConfigBuilder {
        MendeleyConfig::builder()
            .client_id(ClientId::new("1234").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
    }

    #[test]
    fn test_builder_requires_client_id() {
        let result = MendeleyConfigBuilder::new()
            .client_secret(ClientSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "client_id" })
        ));
    }

    #[test]
    fn test_builder_requires_client_secret() {
        let result = MendeleyConfigBuilder::new()
            .client_id(ClientId::new("1234").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "client_secret"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = credentials().build().unwrap();

        assert_eq!(config.host().host_name(), Some("api.mendeley.com"));
        assert_eq!(
            config.token_url().as_ref(),
            "https://api.mendeley.com/oauth/token"
        );
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let host = HostUrl::new("http://localhost:9000").unwrap();
        let token_url = HostUrl::new("http://localhost:9000/oauth/token").unwrap();

        let config = credentials()
            .host(host.clone())
            .token_url(token_url.clone())
            .user_agent_prefix("MyApp/1.0")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(config.host(), &host);
        assert_eq!(config.token_url(), &token_url);
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_config_debug_does_not_leak_secret() {
        let config = credentials().build().unwrap();
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("MendeleyConfig"));
        assert!(!debug_str.contains("\"secret\""));
    }
}
