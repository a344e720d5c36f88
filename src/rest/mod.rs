//! Typed resource access for the Mendeley API.
//!
//! This module turns typed calls into requests and decodes the results:
//!
//! - **[`ApiObject`] trait**: Implemented by every entity the API returns
//! - **[`ResourceAccessor`]**: get/list/iterate over one collection path
//! - **[`Page<T>`]** and **[`Cursor`]**: One page of results and the link to the next
//! - **[`pagination`]**: Free functions for paging over any list endpoint
//! - **[`View`]**: Selects optional field groups
//! - **[`resources`]**: The entities (documents, files, groups, ...)
//!
//! # Example
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use mendeley::rest::{DocumentListParams, View};
//!
//! // One page at a time
//! let page = session.documents().list_page(&DocumentListParams::default()).await?;
//! println!("{} of {:?}", page.len(), page.total_count());
//! if let Some(cursor) = page.next_cursor() {
//!     let next = session.documents().next_page(cursor).await?;
//! }
//!
//! // Or lazily across all pages
//! let params = DocumentListParams { view: Some(View::Bib), ..Default::default() };
//! let all: Vec<_> = session.documents().iter(&params).try_collect().await?;
//!
//! // Single objects
//! match session.documents().get("missing-id", None).await {
//!     Err(mendeley::HttpError::Response(e)) if e.is_not_found() => println!("gone"),
//!     other => println!("{other:?}"),
//! }
//! ```

mod page;
pub mod pagination;
mod resource;

pub mod resources;

pub use page::{Cursor, Page};
pub use pagination::{iterate, list_page, next_page};
pub use resource::{ApiObject, ResourceAccessor, View};

pub use resources::{
    Annotation, AnnotationListParams, CatalogDocument, CatalogIdentifier, CatalogListParams,
    CatalogSearchParams, Document, DocumentListParams, File, FileListParams, Group,
    GroupListParams, GroupMember, Person, Profile, ProfileListParams, SortOrder, TrashDocument,
};
