//! # Mendeley API Rust SDK
//!
//! A Rust SDK for the Mendeley reference manager API, providing type-safe
//! configuration, OAuth2 bearer authentication with automatic token refresh,
//! cursor pagination and typed access to documents, files, groups, profiles,
//! catalog entries, annotations and the trash.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`MendeleyConfig`] and [`MendeleyConfigBuilder`]
//! - Validated newtypes for client credentials and URLs
//! - An authenticated [`MendeleySession`] that detects expired tokens
//! - A [`Refresher`] that renews the token once per expired request and
//!   reports the new token through a callback for persistence
//! - Lazy, cursor-based pagination over every list endpoint
//! - Typed entities and [`ResourceAccessor`](rest::ResourceAccessor)s
//!
//! ## Quick Start
//!
//! ```rust
//! use mendeley::{ClientId, ClientSecret, MendeleyConfig};
//!
//! let config = MendeleyConfig::builder()
//!     .client_id(ClientId::new("1234").unwrap())
//!     .client_secret(ClientSecret::new("your-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Sessions and Token Refresh
//!
//! A session starts from an access token obtained elsewhere (for example an
//! authorization code flow in your application). When the token carries a
//! refresh token, attach a [`Refresher`] so expiry is handled transparently:
//!
//! ```rust,ignore
//! use mendeley::{AccessToken, MendeleySession, Refresher};
//!
//! let token: AccessToken = serde_json::from_str(&std::fs::read_to_string("token.json")?)?;
//!
//! let refresher = Refresher::new(token.refresh_token.clone().unwrap_or_default())
//!     .on_refresh(|new_token| {
//!         if let Ok(json) = serde_json::to_string(new_token) {
//!             let _ = std::fs::write("token.json", json);
//!         }
//!     });
//!
//! let session = MendeleySession::new(config, token, Some(refresher))?;
//! let me = session.profiles().me().await?;
//! ```
//!
//! ## Listing and Iterating
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use mendeley::rest::{DocumentListParams, View};
//!
//! let params = DocumentListParams { view: Some(View::All), ..Default::default() };
//!
//! // Pages are fetched lazily as the stream is consumed
//! let documents: Vec<_> = session.group_documents("G1").iter(&params).try_collect().await?;
//! ```
//!
//! ## Error Handling
//!
//! Every API call returns [`HttpError`], classified by [`ErrorKind`]:
//! `Expired`, `Api`, `Transport` or `Decode`. Only token expiry is recovered
//! automatically, and only once per request.
//!
//! ## Logging
//!
//! The SDK emits [`tracing`] events (requests, refreshes, token rotation) and
//! installs no subscriber; configure one in your application to see them.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All public types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{AccessToken, Refresher};
pub use config::{ClientId, ClientSecret, HostUrl, MendeleyConfig, MendeleyConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, DecodeError, ErrorKind, ExpirySource, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, MendeleySession, PaginationInfo, TokenExpiredError,
};

// Re-export pagination types
pub use rest::{Cursor, Page, View};
