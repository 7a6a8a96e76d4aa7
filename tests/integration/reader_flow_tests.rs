//! Integration tests for the reader page flow
//!
//! Mock-server tests covering the listing load, the lazy per-row detail
//! fetch, and the at-most-once dispatch guard.

use pingback_client_rs::{
    Cell, ClientConfig, FetchState, OrderBy, PingbackClient, PingbackReader,
};
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper: the listing response from the end-to-end scenario
fn single_article_json() -> &'static str {
    r#"[{
        "doi": "info:doi/10.1/x",
        "articleUrl": "http://a",
        "title": "T1",
        "pingbackCount": 2,
        "mostRecentPingback": "2013-01-01"
    }]"#
}

/// Helper: a three-article listing response
fn three_article_json() -> String {
    let rows: Vec<String> = ["a", "b", "c"]
        .iter()
        .map(|id| {
            format!(
                r#"{{"doi": "info:doi/10.1/{id}", "articleUrl": "http://example.com/{id}",
                     "title": "Article {id}", "pingbackCount": 1,
                     "mostRecentPingback": "2013-01-01"}}"#
            )
        })
        .collect();
    format!("[{}]", rows.join(","))
}

/// Helper: create a reader pointing at the mock server
fn create_test_reader(base_url: &str) -> PingbackReader {
    PingbackReader::new(create_test_client(base_url))
}

fn create_test_client(base_url: &str) -> PingbackClient {
    let config = ClientConfig::new()
        .with_base_url(base_url)
        .with_user_agent("pingback-reader-test");
    PingbackClient::with_config(config)
}

async fn mount_listing(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path("/articles"))
        .and(query_param("pingbacks", ""))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
#[traced_test]
async fn test_load_renders_one_row_pair_per_article() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, three_article_json()).await;

    let mut reader = create_test_reader(&mock_server.uri());
    assert!(reader.page().warning_banner_visible);

    reader.load().await;

    let page = reader.page();
    assert!(!page.warning_banner_visible);
    assert!(page.notifications.is_empty());
    assert_eq!(page.articles.len(), 3);
    assert_eq!(page.table.rows.len(), 3);
    assert_eq!(page.states, vec![FetchState::Idle; 3]);

    // Input order is preserved and every detail row starts hidden
    for (row, id) in page.table.rows.iter().zip(["a", "b", "c"]) {
        assert_eq!(row.cells[0], Cell::Text(format!("info:doi/10.1/{id}")));
        assert!(row.detail.hidden);
    }
}

#[tokio::test]
#[traced_test]
async fn test_end_to_end_fetch_scenario() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, single_article_json().to_string()).await;

    // The DOI scheme marker must be stripped from the detail path, with the
    // DOI's own slash left intact
    Mock::given(method("GET"))
        .and(path("/articles/10.1/x"))
        .and(query_param("pingbacks", ""))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"title": "P1", "url": "http://p", "created": "2013-02-02"}]"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut reader = create_test_reader(&mock_server.uri());
    reader.load().await;

    let cells = &reader.page().table.rows[0].cells;
    assert_eq!(cells[0], Cell::Text("info:doi/10.1/x".to_string()));
    assert_eq!(
        cells[1],
        Cell::Link {
            href: "http://a".to_string(),
            label: "T1".to_string(),
        }
    );
    assert_eq!(cells[2], Cell::Text("2".to_string()));
    assert_eq!(cells[3], Cell::Text("2013-01-01".to_string()));
    assert_eq!(cells[4], Cell::FetchButton);

    let dispatched = reader.fetch(0).await;
    assert!(dispatched);

    let page = reader.page();
    assert_eq!(page.states[0], FetchState::Populated);
    let detail = &page.table.rows[0].detail;
    assert!(!detail.hidden);
    assert_eq!(detail.header, "Pingbacks for \"T1\"");

    let rows = detail.pingbacks.as_ref().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], Cell::Text("P1".to_string()));
    assert_eq!(
        rows[0][1],
        Cell::Link {
            href: "http://p".to_string(),
            label: "http://p".to_string(),
        }
    );
    assert_eq!(rows[0][2], Cell::Text("2013-02-02".to_string()));
}

#[tokio::test]
#[traced_test]
async fn test_second_click_does_not_dispatch() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, single_article_json().to_string()).await;

    Mock::given(method("GET"))
        .and(path("/articles/10.1/x"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut reader = create_test_reader(&mock_server.uri());
    reader.load().await;

    assert!(reader.fetch(0).await);
    assert!(!reader.fetch(0).await);
    assert_eq!(reader.page().states[0], FetchState::Populated);
}

#[tokio::test]
#[traced_test]
async fn test_fetch_out_of_range_is_ignored() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, single_article_json().to_string()).await;

    let mut reader = create_test_reader(&mock_server.uri());
    reader.load().await;

    assert!(!reader.fetch(5).await);
    assert!(reader.page().notifications.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_jsonp_wrapped_bodies_are_accepted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles"))
        .and(query_param("pingbacks", ""))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!("loadArticles({});", single_article_json()))
                .insert_header("content-type", "text/javascript"),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/articles/10.1/x"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"loadPingbacks([{"title": "P1", "url": "http://p", "created": "2013-02-02"}]);"#,
        ))
        .mount(&mock_server)
        .await;

    let mut reader = create_test_reader(&mock_server.uri());
    reader.load().await;
    assert_eq!(reader.page().table.rows.len(), 1);

    assert!(reader.fetch(0).await);
    let detail = &reader.page().table.rows[0].detail;
    assert_eq!(detail.pingbacks.as_ref().unwrap().len(), 1);
}

#[tokio::test]
#[traced_test]
async fn test_ordered_listing_passes_sort_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles"))
        .and(query_param("pingbacks", ""))
        .and(query_param("orderby", "count"))
        .respond_with(ResponseTemplate::new(200).set_body_string(three_article_json()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let articles = client.list_articles_ordered(OrderBy::Count).await.unwrap();
    assert_eq!(articles.len(), 3);
}
