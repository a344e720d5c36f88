//! HTTP response types for the Mendeley API SDK.
//!
//! This module provides the [`HttpResponse`] type and the `Link` header
//! parser used by the pagination engine.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::{DecodeError, HttpError};

/// Links parsed from the `Link` response header.
///
/// List endpoints return `<url>; rel="next"` style links. Each field holds
/// the full link target, which already carries the `marker` cursor and the
/// original filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Link to the first page.
    pub first: Option<String>,
    /// Link to the previous page.
    pub previous: Option<String>,
    /// Link to the next page.
    pub next: Option<String>,
    /// Link to the last page.
    pub last: Option<String>,
}

impl PaginationInfo {
    /// Parses pagination links from a `Link` header value.
    ///
    /// The header format is `<url>; rel="next", <url>; rel="first"`. Unknown
    /// relations are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mendeley::clients::PaginationInfo;
    ///
    /// let info = PaginationInfo::parse_link_header(
    ///     r#"<https://api.mendeley.com/documents?marker=abc&limit=20>; rel="next""#,
    /// );
    /// assert_eq!(
    ///     info.next.as_deref(),
    ///     Some("https://api.mendeley.com/documents?marker=abc&limit=20")
    /// );
    /// assert!(info.previous.is_none());
    /// ```
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut result = Self::default();

        for link in split_links(header_value) {
            let mut parts = link.split(';');

            let Some(target) = parts.next().map(str::trim) else {
                continue;
            };
            let Some(url) = target
                .strip_prefix('<')
                .and_then(|rest| rest.strip_suffix('>'))
            else {
                continue;
            };

            let rel = parts.find_map(|part| {
                part.trim()
                    .strip_prefix("rel=")
                    .map(|value| value.trim_matches('"'))
            });

            let slot = match rel {
                Some("first") => &mut result.first,
                Some("prev" | "previous") => &mut result.previous,
                Some("next") => &mut result.next,
                Some("last") => &mut result.last,
                _ => continue,
            };
            *slot = Some(url.to_string());
        }

        result
    }
}

/// Splits a `Link` header into individual links.
///
/// Commas inside `<...>` belong to the URL, so a plain `split(',')` is not
/// enough.
fn split_links(header_value: &str) -> Vec<&str> {
    let mut links = Vec::new();
    let mut depth = 0_u32;
    let mut start = 0;

    for (index, ch) in header_value.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                links.push(header_value[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }
    links.push(header_value[start..].trim());

    links.retain(|link| !link.is_empty());
    links
}

/// An HTTP response from the Mendeley API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// Pagination links (from the `Link` header).
    pub pagination: PaginationInfo,
    /// Total number of items across all pages (from the `Mendeley-Count` header).
    pub total_count: Option<u64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the `Link` and `Mendeley-Count` headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        let pagination = headers
            .get("link")
            .map(|values| PaginationInfo::parse_link_header(&values.join(", ")))
            .unwrap_or_default();

        let total_count = headers
            .get("mendeley-count")
            .and_then(|values| values.first())
            .and_then(|value| value.trim().parse().ok());

        Self {
            code,
            headers,
            body,
            pagination,
            total_count,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Mendeley-Trace-Id` header value, if present.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.header("x-mendeley-trace-id")
    }

    /// Decodes the body as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        serde_json::from_str(&self.body).map_err(|source| {
            HttpError::Decode(DecodeError {
                target: short_type_name::<T>().to_string(),
                source,
            })
        })
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
