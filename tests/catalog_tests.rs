//! # Catalog Client Tests
//!
//! Tests for catalog search against a local mock server: query encoding,
//! decoding of the search response and retry behavior on failures.

use cocktails::catalog::CatalogClient;
use cocktails::catalog_errors::CatalogError;
use cocktails::config::{AppConfig, RecoveryConfig};
use mockito::Matcher;

const MARGARITA_BODY: &str = r#"{
  "drinks": [
    {
      "idDrink": "11007",
      "strDrink": "Margarita",
      "strInstructions": "Shake tequila, triple sec and lime juice with ice.",
      "strIngredient1": "Tequila",
      "strIngredient2": "Triple sec",
      "strIngredient3": "Lime juice",
      "strIngredient4": "Salt",
      "strMeasure1": "1 1/2 oz ",
      "strMeasure2": "1/2 oz ",
      "strMeasure3": "1 oz ",
      "strMeasure4": null
    }
  ]
}"#;

fn client_for(server: &mockito::Server, max_retries: u32) -> CatalogClient {
    let config = AppConfig {
        api_base_url: server.url(),
        recovery: RecoveryConfig {
            max_retries,
            base_retry_delay_ms: 1,
            max_retry_delay_ms: 5,
        },
        ..Default::default()
    };
    CatalogClient::new(&config).expect("client should build")
}

#[tokio::test]
async fn test_search_decodes_drinks() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "margarita".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(MARGARITA_BODY)
        .create_async()
        .await;

    let client = client_for(&server, 0);
    let records = client.search("margarita").await.unwrap();

    mock.assert_async().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Margarita");
    assert_eq!(records[0].ingredient(3), Some("Lime juice"));
    assert_eq!(records[0].measure(4), None);
}

#[tokio::test]
async fn test_search_encodes_query_with_spaces() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "whiskey sour".into()))
        .with_status(200)
        .with_body(r#"{"drinks":[{"strDrink":"Whiskey Sour"}]}"#)
        .create_async()
        .await;

    let client = client_for(&server, 0);
    let records = client.search("  whiskey sour ").await.unwrap();

    mock.assert_async().await;
    assert_eq!(records[0].name, "Whiskey Sour");
}

#[tokio::test]
async fn test_search_without_matches() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"drinks":null}"#)
        .create_async()
        .await;

    let client = client_for(&server, 0);
    assert!(client.search("zzz").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_no_data_found_string() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"drinks":"no data found"}"#)
        .create_async()
        .await;

    let client = client_for(&server, 0);
    assert!(client.search("qqq").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_blank_query_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server, 3);
    assert!(client.search("   ").await.unwrap().is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_errors_are_retried() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(503)
        .expect(3)
        .create_async()
        .await;

    let client = client_for(&server, 2);
    let result = client.search("margarita").await;

    mock.assert_async().await;
    assert!(matches!(result, Err(CatalogError::Status(503))));
}

#[tokio::test]
async fn test_client_errors_are_not_retried() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(404)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, 3);
    let result = client.search("margarita").await;

    mock.assert_async().await;
    assert!(matches!(result, Err(CatalogError::Status(404))));
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, 3);
    let result = client.search("margarita").await;

    mock.assert_async().await;
    assert!(matches!(result, Err(CatalogError::Decode(_))));
}

#[tokio::test]
async fn test_malformed_record_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"drinks":[{"idDrink": 11007, "strDrink": "Margarita"}]}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, 3);
    let result = client.search("margarita").await;

    mock.assert_async().await;
    assert!(matches!(result, Err(CatalogError::Decode(_))));
}
