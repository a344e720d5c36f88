//! Catalog resource implementation.
//!
//! The catalog is the global, read-only index of documents. Entries can be
//! fetched by id, looked up by an external identifier, or searched.
//!
//! # Example
//!
//! ```rust,ignore
//! use mendeley::rest::{CatalogIdentifier, CatalogSearchParams, View};
//!
//! let doc = session
//!     .catalog()
//!     .by_identifier(&CatalogIdentifier::Doi("10.1371/journal.pone.0000908".into()), Some(View::Stats))
//!     .await?;
//! println!("{} readers", doc.reader_count.unwrap_or(0));
//!
//! let params = CatalogSearchParams { query: Some("forest fragmentation".into()), ..Default::default() };
//! let first_page = session.catalog().search_page(&params).await?;
//! ```

use std::collections::HashMap;

use futures::stream::{self, Stream, StreamExt};
use serde::{Deserialize, Serialize};

use crate::clients::{ApiError, HttpError};
use crate::rest::resource::serialize_to_query;
use crate::rest::resources::common::Person;
use crate::rest::resources::documents::DOCUMENT_MEDIA_TYPE;
use crate::rest::{pagination, ApiObject, Page, ResourceAccessor, View};

/// Path of the catalog search endpoint.
pub const CATALOG_SEARCH_PATH: &str = "/search/catalog";

/// A document in the global catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogDocument {
    // --- Core fields ---
    /// The catalog id.
    pub id: String,
    /// Title.
    pub title: Option<String>,
    /// Document type.
    #[serde(rename = "type")]
    pub document_type: Option<String>,
    /// Publication the document appeared in.
    pub source: Option<String>,
    /// Publication year.
    pub year: Option<i32>,
    /// External identifiers keyed by scheme.
    pub identifiers: HashMap<String, String>,
    /// Keywords.
    pub keywords: Vec<String>,
    /// Link to the catalog page.
    pub link: Option<String>,
    /// Abstract.
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    /// Authors, in order.
    pub authors: Vec<Person>,

    // --- bib view ---
    /// Volume.
    pub volume: Option<String>,
    /// Issue.
    pub issue: Option<String>,
    /// Page range.
    pub pages: Option<String>,
    /// Publication month.
    pub month: Option<u8>,
    /// Publication day.
    pub day: Option<u8>,
    /// Related web pages.
    pub websites: Vec<String>,
    /// Publisher.
    pub publisher: Option<String>,
    /// City of publication.
    pub city: Option<String>,
    /// Editors, in order.
    pub editors: Vec<Person>,
    /// Institution.
    pub institution: Option<String>,
    /// Series.
    pub series: Option<String>,
    /// Edition.
    pub edition: Option<String>,

    // --- stats view ---
    /// Number of readers.
    pub reader_count: Option<u64>,
    /// Readers by academic status.
    pub reader_count_by_academic_status: HashMap<String, u64>,
    /// Readers by discipline, then subdiscipline.
    pub reader_count_by_subdiscipline: HashMap<String, HashMap<String, u64>>,
    /// Readers by country.
    pub reader_count_by_country: HashMap<String, u64>,
    /// Number of groups the document is in.
    pub group_count: Option<u64>,

    // --- client view ---
    /// Whether a file is attached.
    pub file_attached: Option<bool>,
}

impl ApiObject for CatalogDocument {
    type ListParams = CatalogListParams;

    const NAME: &'static str = "CatalogDocument";
    const MEDIA_TYPE: &'static str = DOCUMENT_MEDIA_TYPE;
}

/// An external identifier to look a catalog document up by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIdentifier {
    /// Digital Object Identifier.
    Doi(String),
    /// PubMed id.
    Pmid(String),
    /// arXiv id.
    Arxiv(String),
    /// ISBN.
    Isbn(String),
    /// ISSN.
    Issn(String),
    /// Scopus id.
    Scopus(String),
    /// SHA-1 hash of an attached file.
    Filehash(String),
}

impl CatalogIdentifier {
    /// Returns the query parameter name for this identifier.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Doi(_) => "doi",
            Self::Pmid(_) => "pmid",
            Self::Arxiv(_) => "arxiv",
            Self::Isbn(_) => "isbn",
            Self::Issn(_) => "issn",
            Self::Scopus(_) => "scopus",
            Self::Filehash(_) => "filehash",
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Doi(v)
            | Self::Pmid(v)
            | Self::Arxiv(v)
            | Self::Isbn(v)
            | Self::Issn(v)
            | Self::Scopus(v)
            | Self::Filehash(v) => v,
        }
    }
}

/// Parameters for catalog lookups.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogListParams {
    /// Field groups to populate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<View>,
    /// DOI to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    /// PubMed id to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pmid: Option<String>,
    /// arXiv id to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arxiv: Option<String>,
    /// ISBN to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    /// ISSN to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issn: Option<String>,
    /// Scopus id to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopus: Option<String>,
    /// File hash to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filehash: Option<String>,
}

/// Parameters for catalog search.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogSearchParams {
    /// Free-text query across all fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Match on title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Match on author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Match on source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Match on abstract.
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    /// Earliest publication year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_year: Option<i32>,
    /// Latest publication year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_year: Option<i32>,
    /// Only open access documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_access: Option<bool>,
    /// Number of results per page.
    #[serde(rename = "limit", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Field groups to populate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<View>,
}

impl<'a> ResourceAccessor<'a, CatalogDocument> {
    /// Looks a catalog document up by an external identifier.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with a 404 status if nothing matches,
    /// or any error of the underlying request.
    pub async fn by_identifier(
        &self,
        identifier: &CatalogIdentifier,
        view: Option<View>,
    ) -> Result<CatalogDocument, HttpError> {
        let mut query = HashMap::new();
        query.insert(identifier.key().to_string(), identifier.value().to_string());
        if let Some(view) = view {
            query.insert("view".to_string(), view.as_str().to_string());
        }

        let page: Page<CatalogDocument> = pagination::list_page(
            self.session(),
            self.collection(),
            query,
            Some(CatalogDocument::MEDIA_TYPE),
        )
        .await?;

        page.into_inner().into_iter().next().ok_or_else(|| {
            ApiError {
                code: 404,
                message: format!(
                    "No catalog document matches {}={}",
                    identifier.key(),
                    identifier.value()
                ),
                trace_id: None,
            }
            .into()
        })
    }

    /// Fetches the first page of catalog search results.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body cannot be decoded.
    pub async fn search_page(
        &self,
        params: &CatalogSearchParams,
    ) -> Result<Page<CatalogDocument>, HttpError> {
        pagination::list_page(
            self.session(),
            CATALOG_SEARCH_PATH,
            serialize_to_query(params)?,
            Some(CatalogDocument::MEDIA_TYPE),
        )
        .await
    }

    /// Returns a lazy stream over every catalog search result.
    pub fn search(
        &self,
        params: &CatalogSearchParams,
    ) -> impl Stream<Item = Result<CatalogDocument, HttpError>> + 'a {
        match serialize_to_query(params) {
            Ok(query) => pagination::iterate(
                self.session(),
                CATALOG_SEARCH_PATH,
                query,
                Some(CatalogDocument::MEDIA_TYPE),
            )
            .left_stream(),
            Err(e) => stream::once(async move { Err(e) }).right_stream(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_document_stats_view() {
        let json = r#"{
            "id": "5cd8328e-febe-3299-8e26-cf6ab2c07f0f",
            "title": "Changes in tree reproductive traits",
            "link": "https://www.mendeley.com/catalogue/5cd8328e-febe-3299-8e26-cf6ab2c07f0f/",
            "reader_count": 39,
            "reader_count_by_academic_status": {"Professor": 4, "Student > Master": 7},
            "reader_count_by_subdiscipline": {"Psychology": {"Psychology": 2}},
            "reader_count_by_country": {"United States": 3}
        }"#;

        let doc: CatalogDocument = serde_json::from_str(json).unwrap();

        assert_eq!(doc.reader_count, Some(39));
        assert_eq!(doc.reader_count_by_academic_status["Professor"], 4);
        assert_eq!(doc.reader_count_by_subdiscipline["Psychology"]["Psychology"], 2);
        assert_eq!(doc.reader_count_by_country["United States"], 3);
        assert!(doc.volume.is_none());
        assert!(doc.editors.is_empty());
    }

    #[test]
    fn test_identifier_key_and_value() {
        let id = CatalogIdentifier::Doi("10.1/abc".to_string());
        assert_eq!(id.key(), "doi");
        assert_eq!(id.value(), "10.1/abc");
        assert_eq!(CatalogIdentifier::Filehash("h".to_string()).key(), "filehash");
    }

    #[test]
    fn test_search_params_query() {
        let params = CatalogSearchParams {
            query: Some("forest".to_string()),
            abstract_text: Some("seed".to_string()),
            min_year: Some(2000),
            page_size: Some(10),
            ..Default::default()
        };

        let query = serialize_to_query(&params).unwrap();

        assert_eq!(query.get("query"), Some(&"forest".to_string()));
        assert_eq!(query.get("abstract"), Some(&"seed".to_string()));
        assert_eq!(query.get("min_year"), Some(&"2000".to_string()));
        assert_eq!(query.get("limit"), Some(&"10".to_string()));
        assert!(!query.contains_key("view"));
    }
}
