//! Document resource implementation.
//!
//! This module provides the [`Document`] entity for documents in a user's
//! library or in a group, and the operations specific to it.
//!
//! # Views
//!
//! The core fields are always returned. `bib`, `client`, `tags` and
//! `patent` add their field groups; `all` returns everything.
//!
//! # Example
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use mendeley::rest::{DocumentListParams, View};
//!
//! let params = DocumentListParams {
//!     view: Some(View::All),
//!     tag: Some("to-read".to_string()),
//!     ..Default::default()
//! };
//! let documents: Vec<_> = session.documents().iter(&params).try_collect().await?;
//!
//! // Soft-delete the first one
//! session.documents().move_to_trash(&documents[0].id).await?;
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpError;
use crate::rest::resources::common::Person;
use crate::rest::{ApiObject, ResourceAccessor, View};

/// Media type for document requests.
pub const DOCUMENT_MEDIA_TYPE: &str = "application/vnd.mendeley-document.1+json";

/// A document in a user or group library.
///
/// Fields outside the requested [`View`] are absent from the response and
/// decode to `None` or empty collections.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Document {
    // --- Core fields ---
    /// The document id.
    pub id: String,

    /// Title.
    pub title: Option<String>,

    /// Document type (e.g. `journal`, `book`, `conference_proceedings`).
    #[serde(rename = "type")]
    pub document_type: Option<String>,

    /// The profile that owns the document.
    pub profile_id: Option<String>,

    /// The group the document belongs to, if any.
    pub group_id: Option<String>,

    /// When the document was added.
    pub created: Option<DateTime<Utc>>,

    /// When the document was last changed.
    pub last_modified: Option<DateTime<Utc>>,

    /// Abstract.
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,

    /// Publication the document appeared in.
    pub source: Option<String>,

    /// Publication year.
    pub year: Option<i32>,

    /// Authors, in order.
    pub authors: Vec<Person>,

    /// External identifiers keyed by scheme (`doi`, `pmid`, `arxiv`, ...).
    pub identifiers: HashMap<String, String>,

    /// Author-supplied keywords.
    pub keywords: Vec<String>,

    // --- bib view ---
    /// Publication month.
    pub month: Option<u8>,
    /// Publication day.
    pub day: Option<u8>,
    /// Page range.
    pub pages: Option<String>,
    /// Volume.
    pub volume: Option<String>,
    /// Issue.
    pub issue: Option<String>,
    /// Related web pages.
    pub websites: Vec<String>,
    /// Publisher.
    pub publisher: Option<String>,
    /// City of publication.
    pub city: Option<String>,
    /// Edition.
    pub edition: Option<String>,
    /// Institution.
    pub institution: Option<String>,
    /// Series.
    pub series: Option<String>,
    /// Chapter.
    pub chapter: Option<String>,
    /// Editors, in order.
    pub editors: Vec<Person>,
    /// Translators, in order.
    pub translators: Vec<Person>,
    /// Revision.
    pub revision: Option<String>,
    /// When an online resource was accessed.
    pub accessed: Option<String>,
    /// Citation key.
    pub citation_key: Option<String>,
    /// Language.
    pub language: Option<String>,
    /// Short title.
    pub short_title: Option<String>,
    /// Genre.
    pub genre: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// Department.
    pub department: Option<String>,

    // --- client view ---
    /// Whether the user has read the document.
    pub read: Option<bool>,
    /// Whether the user has starred the document.
    pub starred: Option<bool>,
    /// Whether the user authored the document.
    pub authored: Option<bool>,
    /// Whether the document metadata was confirmed.
    pub confirmed: Option<bool>,
    /// Whether the document is hidden.
    pub hidden: Option<bool>,
    /// Whether a file is attached.
    pub file_attached: Option<bool>,
    /// Notes.
    pub notes: Option<String>,

    // --- tags view ---
    /// User tags.
    pub tags: Vec<String>,

    // --- patent view ---
    /// Patent owner.
    pub patent_owner: Option<String>,
    /// Patent application number.
    pub patent_application_number: Option<String>,
    /// Patent legal status.
    pub patent_legal_status: Option<String>,
    /// Patent code.
    pub code: Option<String>,
}

impl ApiObject for Document {
    type ListParams = DocumentListParams;

    const NAME: &'static str = "Document";
    const MEDIA_TYPE: &'static str = DOCUMENT_MEDIA_TYPE;
}

/// Sort direction for list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// Parameters for listing documents.
///
/// Every field is optional; unset fields are left out of the query and the
/// server defaults apply. Filters are not validated locally.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentListParams {
    /// Number of documents per page.
    #[serde(rename = "limit", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Field groups to populate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<View>,

    /// Field to sort by (`created`, `last_modified`, `title`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,

    /// Only documents changed after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_since: Option<DateTime<Utc>>,

    /// Only documents deleted after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_since: Option<DateTime<Utc>>,

    /// Start from this server marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,

    /// Only documents in this folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,

    /// Only documents carrying this tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Page number, passed through as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl ResourceAccessor<'_, Document> {
    /// Moves a document to the trash.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn move_to_trash(&self, id: &str) -> Result<(), HttpError> {
        tracing::debug!(document_id = %id, "Moving document to trash");
        self.item_action(id, "trash").await?;
        Ok(())
    }

    /// Deletes a document permanently.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, id: &str) -> Result<(), HttpError> {
        self.delete_item(id).await
    }
}
