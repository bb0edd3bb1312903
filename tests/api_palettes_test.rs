//! Integration tests for saved palettes.

mod common;

use axum::http::StatusCode;
use common::fixtures::{self, sessions};
use common::{assert_error, assert_status, assert_success, TestApp};
use pretty_assertions::assert_eq;
use serde_json::json;

async fn create(app: &TestApp, session: &str, body: serde_json::Value) -> serde_json::Value {
    let response = app
        .post_json("/api/palettes", &fixtures::session(session), &body)
        .await;
    assert_status(&response, StatusCode::CREATED);
    let json: serde_json::Value = response.json();
    assert_eq!(json["success"], true);
    json["palette"].clone()
}

#[tokio::test]
async fn test_create_palette_normalizes_colors() {
    let app = TestApp::new();

    let palette = create(
        &app,
        sessions::ALICE,
        json!({"name": "  Brand  ", "colors": ["#FF0000", "0f0", "0000Ff"]}),
    )
    .await;

    assert_eq!(palette["name"], "Brand");
    assert_eq!(palette["description"], "");
    assert_eq!(palette["colors"], json!(["#ff0000", "#00ff00", "#0000ff"]));
    assert_eq!(palette["is_favorite"], false);
    assert_eq!(palette["created_at"], palette["updated_at"]);
    assert!(palette["id"].is_u64());
}

#[tokio::test]
async fn test_create_palette_requires_session() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/palettes", &[], &json!({"name": "x", "colors": []}))
        .await;

    let error = assert_error(&response, StatusCode::BAD_REQUEST);
    assert_eq!(error, "Missing required header: X-Session-Id");
}

#[tokio::test]
async fn test_create_palette_rejects_blank_name() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/palettes",
            &fixtures::session(sessions::ALICE),
            &json!({"name": "   ", "colors": ["#ffffff"]}),
        )
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_palette_rejects_invalid_color() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/palettes",
            &fixtures::session(sessions::ALICE),
            &json!({"name": "Bad", "colors": ["#ffffff", "purple"]}),
        )
        .await;

    let error = assert_error(&response, StatusCode::BAD_REQUEST);
    assert!(error.contains("purple"), "{error}");
}

#[tokio::test]
async fn test_list_palettes_favorites_first() {
    let app = TestApp::new();
    create(&app, sessions::ALICE, json!({"name": "First", "colors": []})).await;
    create(
        &app,
        sessions::ALICE,
        json!({"name": "Starred", "colors": [], "is_favorite": true}),
    )
    .await;
    create(&app, sessions::ALICE, json!({"name": "Latest", "colors": []})).await;
    create(&app, sessions::BOB, json!({"name": "Other", "colors": []})).await;

    let response = app
        .get_with_headers("/api/palettes", &fixtures::session(sessions::ALICE))
        .await;

    let json = assert_success(&response);
    let names: Vec<&str> = json["palettes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Starred", "Latest", "First"]);
    assert_eq!(json["count"], 3);
}

#[tokio::test]
async fn test_list_palettes_without_session_is_empty() {
    let app = TestApp::new();
    create(&app, sessions::ALICE, json!({"name": "Mine", "colors": []})).await;

    let response = app.get("/api/palettes").await;

    assert_eq!(assert_success(&response)["count"], 0);
}

#[tokio::test]
async fn test_update_palette_keeps_absent_fields() {
    let app = TestApp::new();
    let palette = create(
        &app,
        sessions::ALICE,
        json!({"name": "Warm", "description": "reds", "colors": ["#ff0000"]}),
    )
    .await;
    let id = palette["id"].as_u64().unwrap();

    let response = app
        .put_json(
            &format!("/api/palettes/{id}"),
            &fixtures::session(sessions::ALICE),
            &json!({"is_favorite": true, "colors": ["#FFA500"]}),
        )
        .await;

    let json = assert_success(&response);
    assert_eq!(json["palette"]["name"], "Warm");
    assert_eq!(json["palette"]["description"], "reds");
    assert_eq!(json["palette"]["colors"], json!(["#ffa500"]));
    assert_eq!(json["palette"]["is_favorite"], true);
    assert_eq!(json["palette"]["created_at"], palette["created_at"]);
}

#[tokio::test]
async fn test_update_palette_of_other_session_is_not_found() {
    let app = TestApp::new();
    let palette = create(&app, sessions::ALICE, json!({"name": "Mine", "colors": []})).await;
    let id = palette["id"].as_u64().unwrap();

    let response = app
        .put_json(
            &format!("/api/palettes/{id}"),
            &fixtures::session(sessions::BOB),
            &json!({"name": "Stolen"}),
        )
        .await;

    let error = assert_error(&response, StatusCode::NOT_FOUND);
    assert_eq!(error, "Palette not found");
}

#[tokio::test]
async fn test_delete_palette() {
    let app = TestApp::new();
    let palette = create(&app, sessions::ALICE, json!({"name": "Gone", "colors": []})).await;
    let id = palette["id"].as_u64().unwrap();

    let response = app
        .delete(&format!("/api/palettes/{id}"), &fixtures::session(sessions::ALICE))
        .await;
    assert_eq!(assert_success(&response)["message"], "Palette deleted");

    let again = app
        .delete(&format!("/api/palettes/{id}"), &fixtures::session(sessions::ALICE))
        .await;
    assert_error(&again, StatusCode::NOT_FOUND);
}
