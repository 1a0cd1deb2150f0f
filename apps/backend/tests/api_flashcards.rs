//! Flashcard CRUD API tests.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::fixtures;
use common::TestContext;
use pretty_assertions::assert_eq;

/// Test list is empty for a fresh store.
#[tokio::test]
async fn test_list_flashcards_empty() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/api/flashcards").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body.as_array().unwrap().is_empty());
}

/// Test creating a flashcard with context.
#[tokio::test]
async fn test_create_flashcard() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/flashcards")
        .json(&fixtures::create_request("ubiquitous", Some("Phones are everywhere.")))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], 1);
    assert_eq!(body["word"], "ubiquitous");
    assert_eq!(body["context"], "Phones are everywhere.");
    assert!(body["aiContent"].is_null());
}

/// Test creating a flashcard without context.
#[tokio::test]
async fn test_create_flashcard_without_context() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/flashcards")
        .json(&fixtures::create_request("  terse  ", Some("   ")))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["word"], "terse");
    assert!(body["context"].is_null());
}

/// Test creating a flashcard with a blank word is rejected.
#[tokio::test]
async fn test_create_flashcard_blank_word() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/flashcards")
        .json(&fixtures::create_request("   ", None))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "bad_request");
    assert!(ctx.store_is_empty());
}

/// Test a body without a word is rejected as a bad request.
#[tokio::test]
async fn test_create_flashcard_missing_word() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/flashcards")
        .json(&json!({ "context": "x" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "bad_request");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Bad request: Invalid flashcard data: "));
    assert!(ctx.store_is_empty());
}

/// Test a non-string word is rejected as a bad request.
#[tokio::test]
async fn test_create_flashcard_wrong_word_type() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/flashcards")
        .json(&json!({ "word": 5 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "bad_request");
    assert!(ctx.store_is_empty());
}

/// Test list returns records in creation order.
#[tokio::test]
async fn test_list_flashcards_in_creation_order() {
    let ctx = TestContext::new();
    let server = ctx.server();

    for word in ["gamma", "alpha", "beta"] {
        server
            .post("/api/flashcards")
            .json(&fixtures::create_request(word, None))
            .await
            .assert_status_ok();
    }

    let body: Value = server.get("/api/flashcards").await.json();
    let words: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["word"].as_str().unwrap())
        .collect();
    assert_eq!(words, vec!["gamma", "alpha", "beta"]);
}

/// Test deleting a single flashcard.
#[tokio::test]
async fn test_delete_flashcard() {
    let ctx = TestContext::new();
    let server = ctx.server();
    let keep = ctx.seed("keep", None);
    let drop = ctx.seed("drop", None);

    let response = server.delete(&format!("/api/flashcards/{}", drop.id)).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["deleted"], drop.id);

    let list: Value = server.get("/api/flashcards").await.json();
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], keep.id);
}

/// Test deleting an unknown flashcard.
#[tokio::test]
async fn test_delete_flashcard_not_found() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.delete("/api/flashcards/99").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "not_found");
}

/// Test deleting all flashcards.
#[tokio::test]
async fn test_delete_all_flashcards() {
    let ctx = TestContext::new();
    let server = ctx.server();
    ctx.seed("one", None);
    ctx.seed("two", None);

    let response = server.delete("/api/flashcards").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "All flashcards deleted");
    assert!(ctx.store_is_empty());
}

/// Test ids are never reused after a bulk clear.
#[tokio::test]
async fn test_ids_not_reused_after_clear() {
    let ctx = TestContext::new();
    let server = ctx.server();
    ctx.seed("one", None);
    ctx.seed("two", None);

    server.delete("/api/flashcards").await.assert_status_ok();

    let response = server
        .post("/api/flashcards")
        .json(&fixtures::create_request("three", None))
        .await;
    let body: Value = response.json();
    assert_eq!(body["id"], 3);
}

/// Test health check.
#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}
