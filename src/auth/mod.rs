//! Authentication types for the Mendeley API SDK.
//!
//! # Overview
//!
//! - [`AccessToken`]: The OAuth2 token payload a session authenticates with
//! - [`Refresher`]: Exchanges a refresh token for a new access token and
//!   reports the new payload through a callback
//!
//! Acquiring the first token (authorization code flow, client credentials)
//! happens outside this crate; a session starts from an existing
//! [`AccessToken`].
//!
//! # Example
//!
//! ```rust
//! use mendeley::{AccessToken, Refresher};
//!
//! let token = AccessToken::new("access-token").with_refresh_token("refresh-token");
//! let refresher = Refresher::for_token(&token).expect("token has a refresh token");
//! assert_eq!(refresher.refresh_token(), "refresh-token");
//! ```

mod refresher;
mod token;

pub use refresher::Refresher;
pub use token::AccessToken;
