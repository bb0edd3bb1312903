//! Integration tests for the per-session detection history.

mod common;

use axum::http::StatusCode;
use common::fixtures::{self, sessions};
use common::{assert_error, assert_success, TestApp};
use huescope::models::{AppConfig, HistoryConfig};
use pretty_assertions::assert_eq;
use serde_json::json;

/// Detect a solid image of `rgb` under `session`
async fn detect(app: &TestApp, session: &str, rgb: [u8; 3]) {
    let png = fixtures::solid_png(6, 6, rgb);
    let response = app
        .post_json(
            "/api/detect",
            &fixtures::session(session),
            &json!({"image": fixtures::data_url(&png)}),
        )
        .await;
    assert_success(&response);
}

#[tokio::test]
async fn test_history_without_session_is_empty() {
    let app = TestApp::new();

    let response = app.get("/api/history").await;

    let json = assert_success(&response);
    assert_eq!(json["count"], 0);
    assert_eq!(json["history"], json!([]));
}

#[tokio::test]
async fn test_history_is_newest_first() {
    let app = TestApp::new();
    detect(&app, sessions::ALICE, [255, 0, 0]).await;
    detect(&app, sessions::ALICE, [0, 255, 0]).await;
    detect(&app, sessions::ALICE, [0, 0, 255]).await;

    let response = app
        .get_with_headers("/api/history", &fixtures::session(sessions::ALICE))
        .await;

    let json = assert_success(&response);
    let hexes: Vec<&str> = json["history"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["hex_code"].as_str().unwrap())
        .collect();
    assert_eq!(hexes, vec!["#0000ff", "#00ff00", "#ff0000"]);
    assert_eq!(json["history"][0]["rgb"], json!({"r": 0, "g": 0, "b": 255}));
    assert!(json["history"][0]["created_at"].is_string());
    assert!(json["history"][0].get("session_id").is_none());
}

#[tokio::test]
async fn test_history_limit() {
    let app = TestApp::new();
    for v in 0..5u8 {
        detect(&app, sessions::ALICE, [v, v, v]).await;
    }

    let response = app
        .get_with_headers("/api/history?limit=2", &fixtures::session(sessions::ALICE))
        .await;

    let json = assert_success(&response);
    assert_eq!(json["count"], 2);
    assert_eq!(json["history"][0]["hex_code"], "#040404");
}

#[tokio::test]
async fn test_history_rejects_bad_limit() {
    let app = TestApp::new();

    let response = app
        .get_with_headers("/api/history?limit=lots", &fixtures::session(sessions::ALICE))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_history_is_isolated_per_session() {
    let app = TestApp::new();
    detect(&app, sessions::ALICE, [255, 0, 0]).await;

    let response = app
        .get_with_headers("/api/history", &fixtures::session(sessions::BOB))
        .await;

    assert_eq!(assert_success(&response)["count"], 0);
}

#[tokio::test]
async fn test_history_evicts_oldest_beyond_cap() {
    let app = TestApp::with_config(AppConfig {
        history: HistoryConfig {
            max_entries_per_session: 2,
            ..Default::default()
        },
        ..Default::default()
    });
    detect(&app, sessions::ALICE, [1, 1, 1]).await;
    detect(&app, sessions::ALICE, [2, 2, 2]).await;
    detect(&app, sessions::ALICE, [3, 3, 3]).await;

    let response = app
        .get_with_headers("/api/history", &fixtures::session(sessions::ALICE))
        .await;

    let json = assert_success(&response);
    assert_eq!(json["count"], 2);
    assert_eq!(json["history"][0]["hex_code"], "#030303");
    assert_eq!(json["history"][1]["hex_code"], "#020202");
}

#[tokio::test]
async fn test_delete_history_entry() {
    let app = TestApp::new();
    detect(&app, sessions::ALICE, [255, 0, 0]).await;
    detect(&app, sessions::ALICE, [0, 255, 0]).await;

    let list = app
        .get_with_headers("/api/history", &fixtures::session(sessions::ALICE))
        .await;
    let id = assert_success(&list)["history"][0]["id"].as_u64().unwrap();

    let response = app
        .delete(&format!("/api/history/{id}"), &fixtures::session(sessions::ALICE))
        .await;
    let json = assert_success(&response);
    assert_eq!(json["message"], "History item deleted");

    let list = app
        .get_with_headers("/api/history", &fixtures::session(sessions::ALICE))
        .await;
    let json = assert_success(&list);
    assert_eq!(json["count"], 1);
    assert_eq!(json["history"][0]["hex_code"], "#ff0000");
}

#[tokio::test]
async fn test_delete_history_entry_of_other_session_is_not_found() {
    let app = TestApp::new();
    detect(&app, sessions::ALICE, [255, 0, 0]).await;

    let list = app
        .get_with_headers("/api/history", &fixtures::session(sessions::ALICE))
        .await;
    let id = assert_success(&list)["history"][0]["id"].as_u64().unwrap();

    let response = app
        .delete(&format!("/api/history/{id}"), &fixtures::session(sessions::BOB))
        .await;

    let error = assert_error(&response, StatusCode::NOT_FOUND);
    assert_eq!(error, "History item not found");
}

#[tokio::test]
async fn test_delete_history_entry_requires_session() {
    let app = TestApp::new();

    let response = app.delete("/api/history/1", &[]).await;

    let error = assert_error(&response, StatusCode::BAD_REQUEST);
    assert_eq!(error, "Missing required header: X-Session-Id");
}

#[tokio::test]
async fn test_delete_history_entry_rejects_bad_id() {
    let app = TestApp::new();

    let response = app
        .delete("/api/history/abc", &fixtures::session(sessions::ALICE))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_clear_history() {
    let app = TestApp::new();
    detect(&app, sessions::ALICE, [255, 0, 0]).await;
    detect(&app, sessions::BOB, [0, 0, 255]).await;

    let response = app
        .delete("/api/history", &fixtures::session(sessions::ALICE))
        .await;
    assert_eq!(assert_success(&response)["message"], "History cleared");

    let alice = app
        .get_with_headers("/api/history", &fixtures::session(sessions::ALICE))
        .await;
    assert_eq!(assert_success(&alice)["count"], 0);

    let bob = app
        .get_with_headers("/api/history", &fixtures::session(sessions::BOB))
        .await;
    assert_eq!(assert_success(&bob)["count"], 1);
}

#[tokio::test]
async fn test_clear_history_without_session() {
    let app = TestApp::new();

    let response = app.delete("/api/history", &[]).await;

    assert_eq!(assert_success(&response)["message"], "No history to clear");
}
