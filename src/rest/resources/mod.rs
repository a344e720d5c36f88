//! Entity types and resource accessors for the Mendeley API.
//!
//! Each entity implements [`ApiObject`](crate::rest::ApiObject). Accessors
//! are created from a [`MendeleySession`]; scoped variants fix a group,
//! document or catalog id at construction.
//!
//! # Available Accessors
//!
//! | Accessor | Path | Item |
//! |---|---|---|
//! | `documents()` / `group_documents(g)` | `/documents` | [`Document`] |
//! | `trash()` / `group_trash(g)` | `/trash` | [`TrashDocument`] |
//! | `files()` / `group_files(g)` / `document_files(d)` / `catalog_files(c)` | `/files` | [`File`] |
//! | `groups()` | `/groups` | [`Group`] |
//! | `group_members(g)` | `/groups/{g}/members` | [`GroupMember`] |
//! | `profiles()` | `/profiles` | [`Profile`] |
//! | `catalog()` | `/catalog` | [`CatalogDocument`] |
//! | `annotations()` | `/annotations` | [`Annotation`] |
//!
//! # Example
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use mendeley::rest::{DocumentListParams, View};
//!
//! let me = session.profiles().me().await?;
//!
//! let params = DocumentListParams { view: Some(View::All), ..Default::default() };
//! let docs: Vec<_> = session.group_documents("G1").iter(&params).try_collect().await?;
//!
//! for doc in &docs {
//!     let files: Vec<_> = session
//!         .document_files(&doc.id)
//!         .iter(&Default::default())
//!         .try_collect()
//!         .await?;
//! }
//! ```

mod annotations;
mod catalog;
pub mod common;
mod documents;
mod files;
mod groups;
mod profiles;
mod trash;

pub use annotations::{Annotation, AnnotationListParams, Color, Point, Position};
pub use catalog::{
    CatalogDocument, CatalogIdentifier, CatalogListParams, CatalogSearchParams,
    CATALOG_SEARCH_PATH,
};
pub use common::{Discipline, Location, Person, Photo};
pub use documents::{Document, DocumentListParams, SortOrder, DOCUMENT_MEDIA_TYPE};
pub use files::{File, FileListParams};
pub use groups::{Group, GroupListParams, GroupMember};
pub use profiles::{Profile, ProfileListParams};
pub use trash::TrashDocument;

use crate::clients::MendeleySession;
use crate::rest::ResourceAccessor;

impl MendeleySession {
    /// Documents in the user's library.
    #[must_use]
    pub fn documents(&self) -> ResourceAccessor<'_, Document> {
        ResourceAccessor::new(self, "/documents")
    }

    /// Documents in a group.
    #[must_use]
    pub fn group_documents(&self, group_id: &str) -> ResourceAccessor<'_, Document> {
        self.documents().scoped("group_id", group_id)
    }

    /// Trashed documents in the user's library.
    #[must_use]
    pub fn trash(&self) -> ResourceAccessor<'_, TrashDocument> {
        ResourceAccessor::new(self, "/trash")
    }

    /// Trashed documents in a group.
    #[must_use]
    pub fn group_trash(&self, group_id: &str) -> ResourceAccessor<'_, TrashDocument> {
        self.trash().scoped("group_id", group_id)
    }

    /// Files across the user's library.
    #[must_use]
    pub fn files(&self) -> ResourceAccessor<'_, File> {
        ResourceAccessor::new(self, "/files")
    }

    /// Files in a group.
    #[must_use]
    pub fn group_files(&self, group_id: &str) -> ResourceAccessor<'_, File> {
        self.files().scoped("group_id", group_id)
    }

    /// Files attached to one document.
    #[must_use]
    pub fn document_files(&self, document_id: &str) -> ResourceAccessor<'_, File> {
        self.files().scoped("document_id", document_id)
    }

    /// Files attached to one catalog document.
    #[must_use]
    pub fn catalog_files(&self, catalog_id: &str) -> ResourceAccessor<'_, File> {
        self.files().scoped("catalog_id", catalog_id)
    }

    /// Groups the user belongs to.
    #[must_use]
    pub fn groups(&self) -> ResourceAccessor<'_, Group> {
        ResourceAccessor::new(self, "/groups")
    }

    /// Members of a group.
    #[must_use]
    pub fn group_members(&self, group_id: &str) -> ResourceAccessor<'_, GroupMember> {
        ResourceAccessor::new(
            self,
            format!("/groups/{}/members", urlencoding::encode(group_id)),
        )
    }

    /// User profiles.
    #[must_use]
    pub fn profiles(&self) -> ResourceAccessor<'_, Profile> {
        ResourceAccessor::new(self, "/profiles")
    }

    /// The global catalog.
    #[must_use]
    pub fn catalog(&self) -> ResourceAccessor<'_, CatalogDocument> {
        ResourceAccessor::new(self, "/catalog")
    }

    /// Annotations visible to the user.
    #[must_use]
    pub fn annotations(&self) -> ResourceAccessor<'_, Annotation> {
        ResourceAccessor::new(self, "/annotations")
    }
}
