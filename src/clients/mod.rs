//! HTTP client types for Mendeley API communication.
//!
//! This module provides the transport layer every resource accessor goes
//! through. It attaches the bearer token, detects token expiry, and
//! recovers from it with a single refresh-and-retry.
//!
//! # Overview
//!
//! - [`MendeleySession`]: The authenticated session that sends requests
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`PaginationInfo`]: Links parsed from the `Link` header
//! - [`HttpError`]: The unified error type, classified by [`ErrorKind`]
//!
//! # Example
//!
//! ```rust,ignore
//! use mendeley::clients::{HttpMethod, HttpRequest};
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/documents")
//!     .query_param("limit", "20")
//!     .build();
//!
//! let response = session.request(request).await?;
//! println!("{} documents in total", response.total_count.unwrap_or(0));
//! ```
//!
//! # Expiry Behavior
//!
//! - **Local expiry** (`expires_at` in the past): no request is sent
//! - **Server expiry** (401 with `"Token has expired"`): detected from the body
//! - **Any other non-2xx**: returned as [`ApiError`] without retry
//!
//! On expiry, a session with a [`Refresher`](crate::Refresher) refreshes once
//! and retries once. A session without one returns the expiry error.

mod errors;
mod http_request;
mod http_response;
mod session;

pub use errors::{
    ApiError, DecodeError, ErrorKind, ExpirySource, HttpError, TokenExpiredError,
    TOKEN_EXPIRED_MESSAGE,
};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, PaginationInfo};
pub use session::{MendeleySession, SDK_VERSION};
