//! Typed accessors for API collections.
//!
//! This module defines the [`ApiObject`] trait, implemented by every entity
//! the API returns, and [`ResourceAccessor`], which turns typed
//! get/list/iterate calls into requests against one collection path.
//!
//! # Implementing an Object
//!
//! 1. Define a struct with serde derives (`#[serde(default)]` so fields
//!    outside the requested view stay unset)
//! 2. Implement [`ApiObject`] with the media type and list parameter type
//! 3. Add a factory on [`MendeleySession`] returning a `ResourceAccessor`
//!
//! # Example
//!
//! ```rust,ignore
//! use mendeley::rest::{ApiObject, View};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! #[serde(default)]
//! pub struct Folder {
//!     pub id: String,
//!     pub name: Option<String>,
//! }
//!
//! impl ApiObject for Folder {
//!     type ListParams = FolderListParams;
//!
//!     const NAME: &'static str = "Folder";
//!     const MEDIA_TYPE: &'static str = "application/vnd.mendeley-folder.1+json";
//! }
//!
//! // Usage:
//! let folder = session.folders().get("abc", None).await?;
//! ```

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use futures::stream::{self, Stream, StreamExt};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{
    DecodeError, HttpError, HttpMethod, HttpRequest, HttpResponse, MendeleySession,
};
use crate::rest::{pagination, Cursor, Page};

/// An entity returned by the API.
///
/// # Associated Types
///
/// - `ListParams`: Filters and options for list operations. Fields that are
///   `None` are omitted from the query string.
///
/// # Associated Constants
///
/// - `NAME`: The entity name (e.g., "Document"), used in logs and errors
/// - `MEDIA_TYPE`: The versioned media type sent as the `Accept` header
pub trait ApiObject: DeserializeOwned + Send + Sync + Sized {
    /// Parameters for list operations.
    type ListParams: Serialize + Default + Send + Sync;

    /// The entity name.
    const NAME: &'static str;

    /// The versioned media type for this entity.
    const MEDIA_TYPE: &'static str;
}

/// Selects which optional field groups the server populates.
///
/// Fields outside the requested view are absent from the response and
/// decode to `None` or empty collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Bibliographic fields (volume, issue, pages, ...).
    Bib,
    /// Readership statistics.
    Stats,
    /// Per-user fields (read, starred, ...).
    Client,
    /// Tags.
    Tags,
    /// Patent fields.
    Patent,
    /// Every field group.
    All,
}

impl View {
    /// Returns the query value for this view.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bib => "bib",
            Self::Stats => "stats",
            Self::Client => "client",
            Self::Tags => "tags",
            Self::Patent => "patent",
            Self::All => "all",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed access to one collection of the API.
///
/// An accessor is cheap to create and borrows the session it was created
/// from. Scope parameters (such as `group_id`) are fixed at construction and
/// attached to every list request.
///
/// # Example
///
/// ```rust,ignore
/// use futures::TryStreamExt;
/// use mendeley::rest::{DocumentListParams, View};
///
/// let documents = session.group_documents("G1");
///
/// let params = DocumentListParams { view: Some(View::All), ..Default::default() };
/// let all: Vec<_> = documents.iter(&params).try_collect().await?;
///
/// let one = documents.get(&all[0].id, Some(View::Bib)).await?;
/// ```
pub struct ResourceAccessor<'a, T> {
    session: &'a MendeleySession,
    collection: String,
    scope: Vec<(&'static str, String)>,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T: ApiObject> ResourceAccessor<'a, T> {
    pub(crate) fn new(session: &'a MendeleySession, collection: impl Into<String>) -> Self {
        Self {
            session,
            collection: collection.into(),
            scope: Vec::new(),
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub(crate) fn scoped(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.scope.push((key, value.into()));
        self
    }

    /// Returns the session this accessor sends requests through.
    #[must_use]
    pub const fn session(&self) -> &'a MendeleySession {
        self.session
    }

    /// Returns the collection path (e.g. `/documents`).
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Returns the value of a scope parameter, if set.
    #[must_use]
    pub fn scope(&self, key: &str) -> Option<&str> {
        self.scope
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Fetches a single object by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with a 404 status if no object with
    /// that id exists (see [`ApiError::is_not_found`](crate::ApiError::is_not_found)).
    pub async fn get(&self, id: &str, view: Option<View>) -> Result<T, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, self.item_path(id, None))
            .header("Accept", T::MEDIA_TYPE);
        if let Some(view) = view {
            builder = builder.query_param("view", view.as_str());
        }

        let response = self.session.request(builder.build()).await?;
        response.json()
    }

    /// Fetches the first page of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if `params` cannot be turned into a
    /// query, otherwise any error of the request or body decoding.
    pub async fn list_page(&self, params: &T::ListParams) -> Result<Page<T>, HttpError> {
        pagination::list_page(
            self.session,
            &self.collection,
            self.list_query(params)?,
            Some(T::MEDIA_TYPE),
        )
        .await
    }

    /// Fetches the page a cursor points at.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body cannot be decoded.
    pub async fn next_page(&self, cursor: &Cursor) -> Result<Page<T>, HttpError> {
        pagination::next_page(self.session, cursor, Some(T::MEDIA_TYPE)).await
    }

    /// Returns a lazy stream over every object in the collection.
    ///
    /// See [`pagination::iterate`] for the paging behavior. If `params`
    /// cannot be turned into a query the stream yields that error and ends.
    #[allow(clippy::iter_not_returning_iterator)]
    pub fn iter(&self, params: &T::ListParams) -> impl Stream<Item = Result<T, HttpError>> + 'a
    where
        T: 'a,
    {
        match self.list_query(params) {
            Ok(query) => pagination::iterate(
                self.session,
                &self.collection,
                query,
                Some(T::MEDIA_TYPE),
            )
            .left_stream(),
            Err(e) => stream::once(async move { Err(e) }).right_stream(),
        }
    }

    /// Sends a DELETE for one object.
    pub(crate) async fn delete_item(&self, id: &str) -> Result<(), HttpError> {
        self.session.delete(&self.item_path(id, None)).await?;
        Ok(())
    }

    /// Sends a POST to an action below one object (e.g. `/documents/{id}/trash`).
    pub(crate) async fn item_action(&self, id: &str, action: &str) -> Result<HttpResponse, HttpError> {
        self.session.post(&self.item_path(id, Some(action)), None).await
    }

    /// Builds `{collection}/{id}[/{action}]` with the id percent-encoded.
    pub(crate) fn item_path(&self, id: &str, action: Option<&str>) -> String {
        let encoded = urlencoding::encode(id);
        match action {
            Some(action) => format!("{}/{encoded}/{action}", self.collection),
            None => format!("{}/{encoded}", self.collection),
        }
    }

    /// Serializes list parameters and appends the fixed scope.
    pub(crate) fn list_query(
        &self,
        params: &T::ListParams,
    ) -> Result<HashMap<String, String>, HttpError> {
        let mut query = serialize_to_query(params)?;
        for (key, value) in &self.scope {
            query.insert((*key).to_string(), value.clone());
        }
        Ok(query)
    }
}

impl<T> fmt::Debug for ResourceAccessor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceAccessor")
            .field("collection", &self.collection)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

/// Serializes a params struct to a query parameter map.
///
/// Null values are skipped, arrays become comma-separated values and nested
/// objects are sent as JSON text.
///
/// # Errors
///
/// Returns [`HttpError::Decode`] if `params` cannot be represented as JSON.
pub(crate) fn serialize_to_query<P: Serialize>(
    params: &P,
) -> Result<HashMap<String, String>, HttpError> {
    let value = serde_json::to_value(params).map_err(|source| DecodeError {
        target: "query parameters".to_string(),
        source,
    })?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}
