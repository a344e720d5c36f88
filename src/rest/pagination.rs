//! Cursor-based pagination over list endpoints.
//!
//! List endpoints return one page per request and advertise the following
//! page with a `rel="next"` link. [`list_page`] fetches the first page,
//! [`next_page`] follows a [`Cursor`], and [`iterate`] chains the two into a
//! lazy stream of items that fetches pages only as they are consumed.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use futures::TryStreamExt;
//! use mendeley::rest::{iterate, Document};
//!
//! let documents: Vec<Document> = iterate(&session, "/documents", HashMap::new(), None)
//!     .try_collect()
//!     .await?;
//! ```

use std::collections::HashMap;

use futures::stream::{self, Stream, TryStreamExt};
use serde::de::DeserializeOwned;

use crate::clients::{HttpError, HttpMethod, HttpRequest, MendeleySession};
use crate::rest::{Cursor, Page};

/// Fetches the first page of a list endpoint.
///
/// # Arguments
///
/// * `session` - The session to send the request through
/// * `endpoint` - The collection path (e.g. `/documents`)
/// * `query` - Filters and options, forwarded unvalidated
/// * `accept` - The media type to request, if the endpoint needs one
///
/// # Errors
///
/// Returns [`HttpError`] if the request fails or the body is not a JSON array.
pub async fn list_page<T: DeserializeOwned>(
    session: &MendeleySession,
    endpoint: &str,
    query: HashMap<String, String>,
    accept: Option<&str>,
) -> Result<Page<T>, HttpError> {
    let mut builder = HttpRequest::builder(HttpMethod::Get, endpoint).query(query);
    if let Some(accept) = accept {
        builder = builder.header("Accept", accept);
    }

    let response = session.request(builder.build()).await?;
    Page::from_http_response(&response)
}

/// Fetches the page a cursor points at.
///
/// # Errors
///
/// Returns [`HttpError`] if the request fails or the body is not a JSON array.
pub async fn next_page<T: DeserializeOwned>(
    session: &MendeleySession,
    cursor: &Cursor,
    accept: Option<&str>,
) -> Result<Page<T>, HttpError> {
    let mut builder = HttpRequest::builder(HttpMethod::Get, cursor.as_str());
    if let Some(accept) = accept {
        builder = builder.header("Accept", accept);
    }

    let response = session.request(builder.build()).await?;
    Page::from_http_response(&response)
}

enum PageState {
    First(String, HashMap<String, String>),
    Next(Cursor),
    Done,
}

/// Returns a lazy stream over every item of a list endpoint.
///
/// Nothing is requested until the stream is polled. Items are yielded in
/// server order; a new page is fetched only once the previous one is
/// exhausted. The stream ends after a page without a next link. A failed
/// page fetch yields the error and ends the stream.
///
/// The returned stream is not `Unpin`; pin it (e.g. with
/// `futures::pin_mut!` or `Box::pin`) before calling `next()`, or consume it
/// with combinators such as `try_collect`.
pub fn iterate<'a, T>(
    session: &'a MendeleySession,
    endpoint: &str,
    query: HashMap<String, String>,
    accept: Option<&str>,
) -> impl Stream<Item = Result<T, HttpError>> + 'a
where
    T: DeserializeOwned + 'a,
{
    let accept = accept.map(ToString::to_string);
    let start = PageState::First(endpoint.to_string(), query);

    stream::try_unfold(start, move |state| {
        let accept = accept.clone();
        async move {
            let page: Page<T> = match state {
                PageState::First(endpoint, query) => {
                    list_page(session, &endpoint, query, accept.as_deref()).await?
                }
                PageState::Next(cursor) => next_page(session, &cursor, accept.as_deref()).await?,
                PageState::Done => return Ok(None),
            };

            let (items, next_cursor) = page.into_parts();
            tracing::trace!(count = items.len(), has_next = next_cursor.is_some(), "Fetched page");
            let next_state = next_cursor.map_or(PageState::Done, PageState::Next);

            let items = stream::iter(items.into_iter().map(Ok::<T, HttpError>));
            Ok::<_, HttpError>(Some((items, next_state)))
        }
    })
    .try_flatten()
}
