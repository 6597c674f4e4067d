//! API integration tests against a running server and database

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Helper to create a book and return its body
async fn create_book(client: &Client, body: Value) -> Value {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_ready_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_book_lifecycle() {
    let client = Client::new();

    let created = create_book(&client, json!({ "title": "Dune", "author": "Frank Herbert" })).await;
    let id = created["id"].as_i64().expect("No book ID");
    assert_eq!(created["title"], "Dune");

    // Fetch
    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched, created);

    // Partial update, applied twice
    for _ in 0..2 {
        let response = client
            .patch(format!("{}/books/{}", BASE_URL, id))
            .json(&json!({ "title": "Dune (2nd ed)" }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 200);

        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["id"], id);
        assert_eq!(body["title"], "Dune (2nd ed)");
        assert_eq!(body["author"], "Frank Herbert");
    }

    // Listed
    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let books: Value = response.json().await.expect("Failed to parse response");
    assert!(books
        .as_array()
        .expect("Expected an array")
        .iter()
        .any(|b| b["id"] == id));
}

#[tokio::test]
#[ignore]
async fn test_missing_book_is_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/{}", BASE_URL, i32::MAX))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "No se encontró el libro");

    let response = client
        .patch(format!("{}/books/{}", BASE_URL, i32::MAX))
        .json(&json!({ "title": "Nothing" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let response = client
        .post(format!("{}/books/{}/loan", BASE_URL, i32::MAX))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_create_loan() {
    let client = Client::new();

    let book = create_book(&client, json!({ "title": "The Left Hand of Darkness" })).await;
    let id = book["id"].as_i64().expect("No book ID");

    let response = client
        .post(format!("{}/books/{}/loan", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let loan: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(loan["book_id"], id);
    assert!(loan["id"].is_number());
    assert!(loan["loan_date"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_search_by_title() {
    let client = Client::new();

    create_book(&client, json!({ "title": "A Wizard of Earthsea" })).await;

    let response = client
        .get(format!("{}/books/search", BASE_URL))
        .query(&[("title", "wizard OF")])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let books: Value = response.json().await.expect("Failed to parse response");
    assert!(books
        .as_array()
        .expect("Expected an array")
        .iter()
        .any(|b| b["title"] == "A Wizard of Earthsea"));

    for title in ["", "no-such-title-0f9c2e"] {
        let response = client
            .get(format!("{}/books/search", BASE_URL))
            .query(&[("title", title)])
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 200);
        let books: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(books, json!([]));
    }
}
