//! Authenticated session for Mendeley API communication.
//!
//! This module provides [`MendeleySession`], the entry point for every API
//! call. It attaches the bearer token and `User-Agent`, detects expired
//! tokens, and recovers from expiry with a single refresh-and-retry when a
//! [`Refresher`] is configured.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use url::Url;

use crate::auth::{AccessToken, Refresher};
use crate::clients::errors::{
    is_token_expired_body, ApiError, ExpirySource, HttpError, TokenExpiredError,
};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::MendeleyConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// An authenticated session against the Mendeley API.
///
/// The session owns the current [`AccessToken`]. Every resource accessor
/// borrows the session and reads that token; only the [`Refresher`] replaces
/// it, and the replacement is visible to all later requests.
///
/// # Token expiry
///
/// A request is treated as token-expired when either
/// - the stored token has an `expires_at` in the past (nothing is sent), or
/// - the server answers 401 with a JSON `message` containing
///   `"Token has expired"`.
///
/// With a refresher configured, the session refreshes exactly once and
/// retries the request exactly once; whatever the retry produces is returned.
/// Without a refresher the expiry error is returned immediately.
///
/// # Concurrency
///
/// The session is `Send + Sync` and can be shared between tasks. Token reads
/// and writes are guarded, but two tasks that hit expiry at the same time
/// will each perform a refresh. Serialize refreshes externally or give each
/// worker its own session if that matters.
///
/// # Example
///
/// ```rust,ignore
/// use mendeley::{AccessToken, ClientId, ClientSecret, MendeleyConfig, MendeleySession, Refresher};
///
/// let config = MendeleyConfig::builder()
///     .client_id(ClientId::new("1234")?)
///     .client_secret(ClientSecret::new("secret")?)
///     .build()?;
///
/// let token = AccessToken::new("access").with_refresh_token("refresh");
/// let refresher = Refresher::for_token(&token);
/// let session = MendeleySession::new(config, token, refresher)?;
///
/// let response = session.get("/profiles/me", None).await?;
/// ```
pub struct MendeleySession {
    client: reqwest::Client,
    config: MendeleyConfig,
    base_url: Url,
    user_agent: String,
    token: RwLock<AccessToken>,
    refresher: Option<Refresher>,
}

// Verify MendeleySession is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MendeleySession>();
};

impl MendeleySession {
    /// Creates a new session.
    ///
    /// # Arguments
    ///
    /// * `config` - Client credentials, base host and transport settings
    /// * `token` - The access token to authenticate with
    /// * `refresher` - Optional refresher used when the token expires
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying HTTP client cannot be
    /// created (e.g. TLS initialization failure).
    pub fn new(
        config: MendeleyConfig,
        token: AccessToken,
        refresher: Option<Refresher>,
    ) -> Result<Self, HttpError> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} "));
        let user_agent = format!(
            "{user_agent_prefix}mendeley-sdk/{SDK_VERSION} Rust {}/{}",
            std::env::consts::OS,
            std::env::consts::ARCH,
        );

        let base_url = config.host().as_url().clone();

        Ok(Self {
            client,
            config,
            base_url,
            user_agent,
            token: RwLock::new(token),
            refresher,
        })
    }

    /// Returns the configuration this session was built with.
    #[must_use]
    pub const fn config(&self) -> &MendeleyConfig {
        &self.config
    }

    /// Returns the `User-Agent` header sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns a snapshot of the current access token.
    #[must_use]
    pub fn access_token(&self) -> AccessToken {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the configured refresher, if any.
    #[must_use]
    pub const fn refresher(&self) -> Option<&Refresher> {
        self.refresher.as_ref()
    }

    pub(crate) fn set_access_token(&self, token: AccessToken) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    pub(crate) const fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// Resolves a path against the base host. Absolute URLs pass through.
    #[must_use]
    pub fn resolve(&self, path: &str) -> String {
        self.base_url
            .join(path)
            .map_or_else(|_| path.to_string(), String::from)
    }

    /// Sends a request, refreshing the token and retrying once on expiry.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - the token expired and could not be recovered (`TokenExpired`)
    /// - the refresh exchange itself failed (`Response`, `Network`, `Decode`)
    /// - a non-2xx response was received (`Response`)
    /// - a network error occurred (`Network`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = self.resolve(&request.path);

        match self.attempt(&request, &url).await {
            Err(HttpError::TokenExpired(expired)) => {
                let Some(refresher) = &self.refresher else {
                    tracing::warn!(url = %url, "Access token expired and no refresher is configured");
                    return Err(expired.into());
                };

                tracing::debug!(origin = ?expired.origin, "Handling a token expiration");
                refresher.refresh(self).await?;

                tracing::debug!(url = %url, "Re-requesting after token refresh");
                self.attempt(&request, &url).await
            }
            result => result,
        }
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`MendeleySession::request`].
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, path);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.request(builder.build()).await
    }

    /// Sends a POST request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`MendeleySession::request`].
    pub async fn post(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Post, path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        self.request(builder.build()).await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`MendeleySession::request`].
    pub async fn patch(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Patch, path)
            .body(body)
            .build();
        self.request(request).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`MendeleySession::request`].
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, HttpError> {
        self.request(HttpRequest::builder(HttpMethod::Delete, path).build())
            .await
    }

    /// Performs one HTTP exchange with the current token.
    async fn attempt(&self, request: &HttpRequest, url: &str) -> Result<HttpResponse, HttpError> {
        let token = self.access_token();
        if token.expired() {
            return Err(TokenExpiredError {
                origin: ExpirySource::Local,
                message: token.expires_at.map_or_else(
                    || "access token expired".to_string(),
                    |at| format!("access token expired at {}", at.to_rfc3339()),
                ),
            }
            .into());
        }

        let mut headers = self.default_headers(&token);
        if request.body.is_some() {
            headers.insert("content-type".to_string(), "application/json".to_string());
        }
        // Header names are case-insensitive; a caller header replaces the default
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.to_ascii_lowercase(), value.clone());
            }
        }

        let mut req_builder = self.client.request(request.http_method.as_reqwest(), url);
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, url = %url, "Requesting");
        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;
        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        if is_token_expired_body(code, &response.body) {
            return Err(TokenExpiredError {
                origin: ExpirySource::Server,
                message: crate::clients::errors::error_message(code, &response.body),
            }
            .into());
        }

        tracing::debug!(status = code, url = %url, "Request failed");
        Err(ApiError::from_response(
            code,
            &response.body,
            response.trace_id().map(String::from),
        )
        .into())
    }

    /// Default headers for a request, keyed by lowercase name.
    fn default_headers(&self, token: &AccessToken) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert("user-agent".to_string(), self.user_agent.clone());
        headers.insert("accept".to_string(), "application/json".to_string());
        if !token.access_token.is_empty() {
            headers.insert(
                "authorization".to_string(),
                format!("Bearer {}", token.access_token),
            );
        }
        headers
    }

    /// Parses response headers into a `HashMap` keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl std::fmt::Debug for MendeleySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MendeleySession")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("has_refresher", &self.refresher.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientId, ClientSecret, HostUrl};

    fn create_test_session(prefix: Option<&str>) -> MendeleySession {
        let mut builder = MendeleyConfig::builder()
            .client_id(ClientId::new("client").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap());
        if let Some(prefix) = prefix {
            builder = builder.user_agent_prefix(prefix);
        }
        MendeleySession::new(builder.build().unwrap(), AccessToken::new("test-token"), None)
            .unwrap()
    }

    #[test]
    fn test_user_agent_identifies_client_and_runtime() {
        let session = create_test_session(None);
        let user_agent = session.user_agent();

        assert!(user_agent.starts_with(&format!("mendeley-sdk/{SDK_VERSION}")));
        assert!(user_agent.contains(&format!(
            " Rust {}/{}",
            std::env::consts::OS,
            std::env::consts::ARCH
        )));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let session = create_test_session(Some("MyApp/1.0"));
        assert!(session.user_agent().starts_with("MyApp/1.0 mendeley-sdk/"));
    }

    #[test]
    fn test_default_headers_carry_bearer_token() {
        let session = create_test_session(None);
        let headers = session.default_headers(&session.access_token());

        assert_eq!(
            headers.get("authorization"),
            Some(&"Bearer test-token".to_string())
        );
        assert_eq!(headers.get("accept"), Some(&"application/json".to_string()));
        assert!(headers.contains_key("user-agent"));
    }

    #[test]
    fn test_resolve_paths_against_base_host() {
        let session = create_test_session(None);

        assert_eq!(
            session.resolve("/documents"),
            "https://api.mendeley.com/documents"
        );
        assert_eq!(
            session.resolve("https://other.example.com/documents?marker=x"),
            "https://other.example.com/documents?marker=x"
        );
    }

    #[test]
    fn test_set_access_token_replaces_token() {
        let session = create_test_session(None);
        session.set_access_token(AccessToken::new("replacement"));
        assert_eq!(session.access_token().access_token, "replacement");
    }

    #[test]
    fn test_session_debug_hides_token() {
        let session = create_test_session(None);
        let debug = format!("{session:?}");
        assert!(debug.contains("MendeleySession"));
        assert!(!debug.contains("test-token"));
    }

    #[test]
    fn test_session_base_url_follows_config() {
        let config = MendeleyConfig::builder()
            .client_id(ClientId::new("client").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .host(HostUrl::new("http://127.0.0.1:9999").unwrap())
            .build()
            .unwrap();
        let session = MendeleySession::new(config, AccessToken::new("t"), None).unwrap();
        assert_eq!(session.resolve("/files"), "http://127.0.0.1:9999/files");
    }
}
