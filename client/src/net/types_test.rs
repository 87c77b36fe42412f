use super::*;
use serde_json::json;

fn parse(body: Value) -> AuthResponse {
    AuthResponse::from_body(&body)
}

#[test]
fn bearer_token_prefers_access_token() {
    let resp = parse(json!({ "access_token": "A", "token": "B", "accessToken": "C" }));
    assert_eq!(resp.bearer_token(), Some("A"));
}

#[test]
fn bearer_token_falls_back_in_order() {
    assert_eq!(parse(json!({ "token": "B", "accessToken": "C" })).bearer_token(), Some("B"));
    assert_eq!(parse(json!({ "accessToken": "C" })).bearer_token(), Some("C"));
}

#[test]
fn bearer_token_skips_empty_values() {
    let resp = parse(json!({ "access_token": "", "token": "B" }));
    assert_eq!(resp.bearer_token(), Some("B"));
}

#[test]
fn bearer_token_absent() {
    let resp = parse(json!({ "message": "registered", "user": { "id": 1 } }));
    assert_eq!(resp.bearer_token(), None);
    assert_eq!(resp.user, Some(json!({ "id": 1 })));
}

#[test]
fn login_response_from_backend_shape() {
    let resp = parse(json!({
        "message": "ok",
        "access_token": "T",
        "access_expires": "2026-01-01T00:00:00",
        "refresh_token": "R",
        "refresh_expires": "2026-01-08T00:00:00",
        "user": { "id": 3, "role": "user" }
    }));
    assert_eq!(resp.bearer_token(), Some("T"));
    assert_eq!(resp.refresh(), Some("R"));
    assert_eq!(resp.message.as_deref(), Some("ok"));
}

#[test]
fn non_object_bodies_read_as_empty() {
    for body in [Value::Null, json!("<html></html>"), json!([1, 2]), json!(42)] {
        assert_eq!(parse(body), AuthResponse::default());
    }
}

#[test]
fn mistyped_fields_are_ignored() {
    let resp = parse(json!({ "access_token": "T", "message": ["ok"], "token": 5, "user": null }));
    assert_eq!(resp.bearer_token(), Some("T"));
    assert_eq!(resp.message, None);
    assert_eq!(resp.token, None);
    assert_eq!(resp.user, None);
}

#[test]
fn request_bodies_serialize_with_backend_field_names() {
    let confirm = PasswordResetConfirm { token: "t", password: "new" };
    assert_eq!(serde_json::to_value(confirm).unwrap(), json!({ "token": "t", "password": "new" }));
    let register = RegisterRequest { name: "N", email: "e", password: "p" };
    assert_eq!(
        serde_json::to_value(register).unwrap(),
        json!({ "name": "N", "email": "e", "password": "p" })
    );
}

#[test]
fn user_helpers_read_opaque_fields() {
    let user = json!({ "name": "", "email": "a@x.com", "role": "admin" });
    assert_eq!(user_role(&user), Some("admin"));
    assert_eq!(user_display_name(&user), Some("a@x.com"));
    assert_eq!(user_role(&Value::Null), None);
}
