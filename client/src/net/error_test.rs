use super::*;
use serde_json::json;

#[test]
fn backend_message_prefers_body_message() {
    let err = ApiError::Status { status: 401, body: json!({ "message": "invalid credentials" }) };
    assert_eq!(failure_message(&err, "Login failed"), "invalid credentials");
}

#[test]
fn empty_backend_message_falls_back_to_description() {
    let err = ApiError::Status { status: 500, body: json!({ "message": "" }) };
    assert_eq!(err.backend_message(), None);
    assert_eq!(failure_message(&err, "Login failed"), "request failed with status code 500");
}

#[test]
fn non_string_message_is_ignored() {
    let err = ApiError::Status { status: 400, body: json!({ "message": { "email": "required" } }) };
    assert_eq!(err.backend_message(), None);
}

#[test]
fn transport_failure_uses_its_description() {
    let err = ApiError::Transport("connection refused".into());
    assert_eq!(failure_message(&err, "Request failed"), "network error: connection refused");
}

#[test]
fn detail_free_failures_use_fallback() {
    assert_eq!(failure_message(&ApiError::Transport(String::new()), "Request failed"), "Request failed");
    assert_eq!(failure_message(&ApiError::Decode("  ".into()), "Profile fetch failed"), "Profile fetch failed");
}

#[test]
fn missing_token_message() {
    assert_eq!(failure_message(&ApiError::MissingToken, "Login failed"), "No token in response");
}

#[test]
fn unauthorized_detection() {
    assert!(ApiError::Status { status: 401, body: Value::Null }.is_unauthorized());
    assert!(!ApiError::Status { status: 403, body: Value::Null }.is_unauthorized());
    assert!(!ApiError::MissingToken.is_unauthorized());
}
