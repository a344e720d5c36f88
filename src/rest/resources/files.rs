//! File resource implementation.
//!
//! Files are attachments (usually PDFs) belonging to documents. The
//! collection can be scoped to a group, a document or a catalog entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpError;
use crate::rest::{ApiObject, ResourceAccessor};

/// A file attached to a document.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct File {
    /// The file id.
    pub id: String,
    /// The document the file is attached to.
    pub document_id: Option<String>,
    /// MIME type of the content.
    pub mime_type: Option<String>,
    /// Original file name.
    pub file_name: Option<String>,
    /// Size in bytes.
    pub size: Option<u64>,
    /// SHA-1 hash of the content.
    pub filehash: Option<String>,
    /// When the file was uploaded.
    pub created: Option<DateTime<Utc>>,
}

impl ApiObject for File {
    type ListParams = FileListParams;

    const NAME: &'static str = "File";
    const MEDIA_TYPE: &'static str = "application/vnd.mendeley-file.1+json";
}

/// Parameters for listing files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileListParams {
    /// Number of files per page.
    #[serde(rename = "limit", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Only files added after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_since: Option<DateTime<Utc>>,

    /// Only files deleted after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_since: Option<DateTime<Utc>>,

    /// Start from this server marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl ResourceAccessor<'_, File> {
    /// Deletes a file.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, id: &str) -> Result<(), HttpError> {
        self.delete_item(id).await
    }
}
