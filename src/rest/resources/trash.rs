//! Trash resource implementation.
//!
//! Documents moved to the trash are listed under `/trash` with the same
//! shape as live documents. A [`TrashDocument`] can be restored to the
//! library or deleted permanently.
//!
//! # Example
//!
//! ```rust,ignore
//! let page = session.trash().list_page(&DocumentListParams::default()).await?;
//! for document in page.iter() {
//!     session.trash().restore(&document.id).await?;
//! }
//! ```

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::clients::HttpError;
use crate::rest::resources::documents::{Document, DocumentListParams, DOCUMENT_MEDIA_TYPE};
use crate::rest::{ApiObject, ResourceAccessor};

/// A document in the trash.
///
/// Dereferences to the wrapped [`Document`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(transparent)]
pub struct TrashDocument(pub Document);

impl TrashDocument {
    /// Consumes the wrapper and returns the document.
    #[must_use]
    pub fn into_inner(self) -> Document {
        self.0
    }
}

impl Deref for TrashDocument {
    type Target = Document;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ApiObject for TrashDocument {
    type ListParams = DocumentListParams;

    const NAME: &'static str = "TrashDocument";
    const MEDIA_TYPE: &'static str = DOCUMENT_MEDIA_TYPE;
}

impl ResourceAccessor<'_, TrashDocument> {
    /// Restores a trashed document to the library.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn restore(&self, id: &str) -> Result<(), HttpError> {
        tracing::debug!(document_id = %id, "Restoring document from trash");
        self.item_action(id, "restore").await?;
        Ok(())
    }

    /// Deletes a trashed document permanently.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, id: &str) -> Result<(), HttpError> {
        self.delete_item(id).await
    }
}
