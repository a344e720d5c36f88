//! A single page of a list endpoint.
//!
//! This module provides [`Page<T>`], which combines the decoded items with
//! the cursor for the following page and the total count reported by the
//! server. The wrapper implements `Deref<Target = [T]>` for ergonomic access.
//!
//! # Example
//!
//! ```rust,ignore
//! let page = session.documents().list_page(&DocumentListParams::default()).await?;
//!
//! for document in page.iter() {
//!     println!("{:?}", document.title);
//! }
//!
//! if let Some(cursor) = page.next_cursor() {
//!     let next = session.documents().next_page(cursor).await?;
//! }
//! ```

use std::fmt;
use std::ops::Deref;

use serde::de::DeserializeOwned;
use url::Url;

use crate::clients::{HttpError, HttpResponse};

/// Opaque continuation token for a list endpoint.
///
/// A cursor is the full `rel="next"` link the server returned. It already
/// carries the `marker` value and every filter of the original request, so
/// following it needs nothing else.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cursor(String);

impl Cursor {
    /// Wraps a next-page link.
    #[must_use]
    pub fn new(link: impl Into<String>) -> Self {
        Self(link.into())
    }

    /// Returns the link this cursor points at.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the server's `marker` query value embedded in the link.
    ///
    /// Relative links are read as well as absolute ones.
    #[must_use]
    pub fn marker(&self) -> Option<String> {
        // Joining onto a placeholder base leaves absolute links unchanged
        let url = Url::parse("http://localhost/").ok()?.join(&self.0).ok()?;
        let marker = url
            .query_pairs()
            .find(|(key, _)| key == "marker")
            .map(|(_, value)| value.into_owned());
        marker
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One page of results from a list endpoint.
#[derive(Clone, Debug)]
pub struct Page<T> {
    items: Vec<T>,
    next_cursor: Option<Cursor>,
    total_count: Option<u64>,
}

impl<T> Page<T> {
    /// Creates a page from its parts.
    #[must_use]
    pub const fn new(items: Vec<T>, next_cursor: Option<Cursor>, total_count: Option<u64>) -> Self {
        Self {
            items,
            next_cursor,
            total_count,
        }
    }

    /// Returns the items on this page, in server order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page and returns its items.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    /// Returns the cursor for the following page, if there is one.
    #[must_use]
    pub const fn next_cursor(&self) -> Option<&Cursor> {
        self.next_cursor.as_ref()
    }

    /// Returns `true` if the server advertised a following page.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_cursor.is_some()
    }

    /// Returns the `marker` value of the next-page link.
    #[must_use]
    pub fn next_marker(&self) -> Option<String> {
        self.next_cursor.as_ref().and_then(Cursor::marker)
    }

    /// Returns the total number of items across all pages, if reported.
    #[must_use]
    pub const fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// Splits the page into its items and next cursor.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Option<Cursor>) {
        (self.items, self.next_cursor)
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Builds a page from a list response.
    ///
    /// The body must be a JSON array of `T`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if the body is not such an array.
    pub fn from_http_response(response: &HttpResponse) -> Result<Self, HttpError> {
        let items: Vec<T> = response.json()?;
        let next_cursor = response.pagination.next.clone().map(Cursor::new);
        Ok(Self::new(items, next_cursor, response.total_count))
    }
}

impl<T> Deref for Page<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
