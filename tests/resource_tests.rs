//! Integration tests for the resource accessors.
//!
//! These tests verify paths, scoping, views, media types and the
//! entity-specific operations against a mock server.

use futures::TryStreamExt;
use mendeley::rest::{
    CatalogIdentifier, CatalogSearchParams, Document, DocumentListParams, FileListParams,
    GroupListParams, View,
};
use mendeley::{
    AccessToken, ClientId, ClientSecret, HostUrl, HttpError, MendeleyConfig, MendeleySession,
    Refresher,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOCUMENT_TYPE: &str = "application/vnd.mendeley-document.1+json";

fn create_config(server: &MockServer) -> MendeleyConfig {
    MendeleyConfig::builder()
        .client_id(ClientId::new("client").unwrap())
        .client_secret(ClientSecret::new("secret").unwrap())
        .host(HostUrl::new(server.uri()).unwrap())
        .token_url(HostUrl::new(format!("{}/oauth/token", server.uri())).unwrap())
        .build()
        .unwrap()
}

fn create_session(server: &MockServer) -> MendeleySession {
    MendeleySession::new(create_config(server), AccessToken::new("token"), None).unwrap()
}

// ============================================================================
// Documents
// ============================================================================

#[tokio::test]
async fn test_group_documents_refresh_then_iterate() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "new-access",
            "expires_in": 3600,
            "refresh_token": "new-refresh"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .and(query_param("group_id", "G1"))
        .and(query_param("view", "all"))
        .and(header("Authorization", "Bearer old-access"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Token has expired"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .and(query_param("group_id", "G1"))
        .and(query_param("view", "all"))
        .and(header("Authorization", "Bearer new-access"))
        .and(header("Accept", DOCUMENT_TYPE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "d1", "title": "One", "group_id": "G1"},
            {"id": "d2", "title": "Two", "group_id": "G1"},
            {"id": "d3", "title": "Three", "group_id": "G1"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let session = MendeleySession::new(
        create_config(&server),
        AccessToken::new("old-access"),
        Some(Refresher::new("old-refresh")),
    )
    .unwrap();

    let params = DocumentListParams {
        view: Some(View::All),
        ..Default::default()
    };
    let documents: Vec<Document> = session
        .group_documents("G1")
        .iter(&params)
        .try_collect()
        .await
        .unwrap();

    let ids: Vec<&str> = documents.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["d1", "d2", "d3"]);
    assert!(documents.iter().all(|d| d.group_id.as_deref() == Some("G1")));
}

#[tokio::test]
async fn test_get_document_with_view() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents/d1"))
        .and(query_param("view", "bib"))
        .and(header("Accept", DOCUMENT_TYPE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "d1",
            "title": "Bib",
            "volume": "2",
            "issue": "9"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let session = create_session(&server);

    let doc = session.documents().get("d1", Some(View::Bib)).await.unwrap();

    assert_eq!(doc.volume.as_deref(), Some("2"));
    assert_eq!(doc.issue.as_deref(), Some("9"));
    assert!(doc.tags.is_empty());
}

#[tokio::test]
async fn test_get_missing_document_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Document not found"})),
        )
        .mount(&server)
        .await;
    let session = create_session(&server);

    match session.documents().get("missing", None).await {
        Err(HttpError::Response(e)) => {
            assert!(e.is_not_found());
            assert_eq!(e.message, "Document not found");
        }
        other => panic!("Expected not found, got {other:?}"),
    }
}

#[tokio::test]
async fn test_document_list_page_passes_filters_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .and(query_param("limit", "10"))
        .and(query_param("tag", "to-read"))
        .and(query_param("sort", "title"))
        .and(query_param("order", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "d1"}])))
        .expect(1)
        .mount(&server)
        .await;
    let session = create_session(&server);

    let params = DocumentListParams {
        page_size: Some(10),
        tag: Some("to-read".to_string()),
        sort: Some("title".to_string()),
        order: Some(mendeley::rest::SortOrder::Asc),
        ..Default::default()
    };
    let page = session.documents().list_page(&params).await.unwrap();

    assert_eq!(page.len(), 1);
    assert!(!page.has_next_page());
}

#[tokio::test]
async fn test_move_to_trash_and_delete_document() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents/d1/trash"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/documents/d2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let session = create_session(&server);

    session.documents().move_to_trash("d1").await.unwrap();
    session.documents().delete("d2").await.unwrap();
}

// ============================================================================
// Trash
// ============================================================================

#[tokio::test]
async fn test_trash_list_restore_and_delete() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trash"))
        .and(query_param("group_id", "G1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "t1", "title": "Old"}])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/trash/t1/restore"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/trash/t2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let session = create_session(&server);

    let page = session
        .group_trash("G1")
        .list_page(&DocumentListParams::default())
        .await
        .unwrap();
    assert_eq!(page[0].title.as_deref(), Some("Old"));

    session.trash().restore(&page[0].id).await.unwrap();
    session.trash().delete("t2").await.unwrap();
}

// ============================================================================
// Files, groups, profiles, annotations
// ============================================================================

#[tokio::test]
async fn test_document_files_are_scoped_by_document_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files"))
        .and(query_param("document_id", "d1"))
        .and(header("Accept", "application/vnd.mendeley-file.1+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "f1", "document_id": "d1", "file_name": "paper.pdf"}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/files/f1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let session = create_session(&server);

    let files: Vec<_> = session
        .document_files("d1")
        .iter(&FileListParams::default())
        .try_collect()
        .await
        .unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name.as_deref(), Some("paper.pdf"));

    session.files().delete("f1").await.unwrap();
}

#[tokio::test]
async fn test_group_members_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/groups/G1/members"))
        .and(header("Accept", "application/vnd.mendeley-membership.1+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"profile_id": "p1", "role": "owner"},
            {"profile_id": "p2", "role": "normal"}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let session = create_session(&server);

    let page = session
        .group_members("G1")
        .list_page(&GroupListParams::default())
        .await
        .unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].role.as_deref(), Some("owner"));
}

#[tokio::test]
async fn test_profiles_me() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profiles/me"))
        .and(header("Accept", "application/vnd.mendeley-profiles.1+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "p1",
            "display_name": "Ada Lovelace"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let session = create_session(&server);

    let me = session.profiles().me().await.unwrap();

    assert_eq!(me.id, "p1");
    assert_eq!(me.display_name.as_deref(), Some("Ada Lovelace"));
}

#[tokio::test]
async fn test_delete_annotation() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/annotations/a%2F1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let session = create_session(&server);

    session.annotations().delete("a/1").await.unwrap();
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
async fn test_catalog_by_identifier() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalog"))
        .and(query_param("doi", "10.1371/journal.pone.0000908"))
        .and(query_param("view", "stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "5cd8328e-febe-3299-8e26-cf6ab2c07f0f",
            "year": 2007,
            "reader_count": 39,
            "reader_count_by_academic_status": {"Professor": 4}
        }])))
        .expect(1)
        .mount(&server)
        .await;
    let session = create_session(&server);

    let doc = session
        .catalog()
        .by_identifier(
            &CatalogIdentifier::Doi("10.1371/journal.pone.0000908".to_string()),
            Some(View::Stats),
        )
        .await
        .unwrap();

    assert_eq!(doc.year, Some(2007));
    assert_eq!(doc.reader_count, Some(39));
    assert_eq!(doc.reader_count_by_academic_status["Professor"], 4);
}

#[tokio::test]
async fn test_catalog_by_identifier_without_match_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let session = create_session(&server);

    let error = session
        .catalog()
        .by_identifier(&CatalogIdentifier::Pmid("0".to_string()), None)
        .await
        .unwrap_err();

    match error {
        HttpError::Response(e) => assert!(e.is_not_found()),
        other => panic!("Expected not found, got {other:?}"),
    }
}

#[tokio::test]
async fn test_catalog_search_follows_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/catalog"))
        .and(query_param("marker", "s2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "c3"}])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search/catalog"))
        .and(query_param("query", "forest"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": "c1"}, {"id": "c2"}]))
                .insert_header(
                    "Link",
                    format!(
                        "<{}/search/catalog?query=forest&marker=s2>; rel=\"next\"",
                        server.uri()
                    )
                    .as_str(),
                ),
        )
        .expect(1)
        .mount(&server)
        .await;
    let session = create_session(&server);

    let params = CatalogSearchParams {
        query: Some("forest".to_string()),
        ..Default::default()
    };
    let results: Vec<_> = session.catalog().search(&params).try_collect().await.unwrap();

    let ids: Vec<&str> = results.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2", "c3"]);
}
