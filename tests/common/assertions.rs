//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert a successful JSON response and return its body
pub fn assert_success(response: &TestResponse) -> serde_json::Value {
    assert_ok(response);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["success"], true,
        "Expected success=true. Full response: {}",
        serde_json::to_string_pretty(&json).unwrap()
    );
    json
}

/// Assert the JSON error shape and return the error message
pub fn assert_error(response: &TestResponse, expected: StatusCode) -> String {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();

    assert_eq!(json["success"], false);
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}, got {:?}",
        expected.as_u16(),
        json["status"]
    );
    json["error"]
        .as_str()
        .expect("Expected error to be a string")
        .to_string()
}

/// Assert a value is a lowercase `#rrggbb` string
pub fn assert_hex(value: &serde_json::Value) {
    let hex = value.as_str().expect("Expected hex to be a string");
    assert_eq!(hex.len(), 7, "Expected #rrggbb, got {hex}");
    assert!(hex.starts_with('#'), "Expected leading '#', got {hex}");
    assert!(
        hex[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
        "Expected lowercase hex digits, got {hex}"
    );
}
