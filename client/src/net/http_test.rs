use super::*;
use crate::net::mock::MockTransport;
use crate::util::navigation::RecordingNavigator;
use crate::util::storage::{MemoryStore, REFRESH_TOKEN_KEY, USER_KEY};
use futures::executor::block_on;
use serde_json::json;

struct Fixture {
    client: HttpClient,
    transport: Arc<MockTransport>,
    storage: MemoryStore,
    navigator: Arc<RecordingNavigator>,
}

fn fixture_at(path: &str, base_url: Option<&str>) -> Fixture {
    let transport = Arc::new(MockTransport::new());
    let storage = MemoryStore::new();
    let navigator = Arc::new(RecordingNavigator::at(path));
    let client = HttpClient::new(
        ClientConfig::with_base_url(base_url),
        transport.clone(),
        Arc::new(storage.clone()),
        navigator.clone(),
    );
    Fixture { client, transport, storage, navigator }
}

fn fixture() -> Fixture {
    fixture_at("/dashboard", None)
}

// =============================================================
// Request hook
// =============================================================

#[test]
fn request_carries_json_content_type_and_credentials() {
    let f = fixture();
    f.transport.reply(200, json!({}));
    block_on(f.client.post("/api/login", Some(json!({ "email": "a@x.com" })))).unwrap();

    let req = f.transport.last_request();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, "/api/login");
    assert_eq!(req.header(CONTENT_TYPE), Some("application/json"));
    assert!(req.include_credentials);
    assert_eq!(req.body, Some(json!({ "email": "a@x.com" })));
}

#[test]
fn request_uses_configured_base_url() {
    let f = fixture_at("/dashboard", Some("https://api.example.com"));
    f.transport.reply(200, Value::Null);
    block_on(f.client.get("/api/profile")).unwrap();
    assert_eq!(f.transport.last_request().url, "https://api.example.com/api/profile");
}

#[test]
fn request_without_stored_token_has_no_authorization() {
    let f = fixture();
    f.transport.reply(200, Value::Null);
    block_on(f.client.get("/api/profile")).unwrap();
    assert_eq!(f.transport.last_request().header(AUTHORIZATION), None);
}

#[test]
fn request_attaches_stored_bearer_token() {
    let f = fixture();
    f.storage.set(TOKEN_KEY, "T1");
    f.transport.reply(200, Value::Null);
    block_on(f.client.get("/api/profile")).unwrap();
    assert_eq!(f.transport.last_request().header(AUTHORIZATION), Some("Bearer T1"));
}

#[test]
fn stored_token_overrides_default_authorization_header() {
    let f = fixture();
    f.client.set_default_header(AUTHORIZATION, "Bearer stale");
    f.storage.set(TOKEN_KEY, "fresh");
    f.transport.reply(200, Value::Null);
    block_on(f.client.get("/api/profile")).unwrap();
    assert_eq!(f.transport.last_request().header(AUTHORIZATION), Some("Bearer fresh"));
}

#[test]
fn removed_default_header_is_not_sent() {
    let f = fixture();
    f.client.set_default_header("X-Trace", "1");
    f.client.remove_default_header("X-Trace");
    f.transport.reply(200, Value::Null);
    block_on(f.client.get("/api/profile")).unwrap();
    assert_eq!(f.transport.last_request().header("X-Trace"), None);
}

// =============================================================
// Response hook
// =============================================================

#[test]
fn success_response_passes_through() {
    let f = fixture();
    f.transport.reply(201, json!({ "message": "registered" }));
    let resp = block_on(f.client.post("/api/register", None)).unwrap();
    assert_eq!(resp.status, 201);
    assert_eq!(resp.body, json!({ "message": "registered" }));
}

#[test]
fn non_success_status_becomes_status_error() {
    let f = fixture();
    f.transport.reply(409, json!({ "message": "Email already registered" }));
    let err = block_on(f.client.post("/api/register", None)).unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.backend_message(), Some("Email already registered"));
}

#[test]
fn transport_error_propagates_without_touching_session() {
    let f = fixture();
    f.storage.set(TOKEN_KEY, "T");
    f.transport.fail("offline");
    let err = block_on(f.client.get("/api/profile")).unwrap_err();
    assert_eq!(err, ApiError::Transport("offline".into()));
    assert_eq!(f.storage.get(TOKEN_KEY).as_deref(), Some("T"));
    assert!(f.navigator.assigns().is_empty());
}

#[test]
fn unauthorized_clears_session_and_redirects_once() {
    let f = fixture();
    f.storage.set(TOKEN_KEY, "T");
    f.storage.set(USER_KEY, "{}");
    f.storage.set(REFRESH_TOKEN_KEY, "R");
    f.transport.reply(401, json!({ "message": "Token expired." }));

    let err = block_on(f.client.get("/api/profile")).unwrap_err();

    assert!(err.is_unauthorized());
    assert!(f.storage.get(TOKEN_KEY).is_none());
    assert!(f.storage.get(USER_KEY).is_none());
    assert!(f.storage.get(REFRESH_TOKEN_KEY).is_none());
    assert_eq!(f.navigator.assigns(), vec!["/login".to_owned()]);
}

#[test]
fn unauthorized_on_login_page_does_not_redirect() {
    let f = fixture_at("/login", None);
    f.storage.set(TOKEN_KEY, "T");
    f.transport.reply(401, json!({ "message": "invalid credentials" }));

    let err = block_on(f.client.post("/api/login", None)).unwrap_err();

    assert_eq!(err.backend_message(), Some("invalid credentials"));
    assert!(f.storage.get(TOKEN_KEY).is_none());
    assert!(f.navigator.assigns().is_empty());
}

#[test]
fn forbidden_does_not_clear_session() {
    let f = fixture();
    f.storage.set(TOKEN_KEY, "T");
    f.transport.reply(403, Value::Null);
    let _ = block_on(f.client.get("/api/admin-only"));
    assert_eq!(f.storage.get(TOKEN_KEY).as_deref(), Some("T"));
    assert!(f.navigator.assigns().is_empty());
}

// =============================================================
// Body decoding
// =============================================================

#[test]
fn parse_body_handles_empty_and_non_json() {
    assert_eq!(parse_body(""), Value::Null);
    assert_eq!(parse_body("  \n"), Value::Null);
    assert_eq!(parse_body("{\"a\":1}"), json!({ "a": 1 }));
    assert_eq!(parse_body("<html>oops</html>"), json!("<html>oops</html>"));
}

#[test]
fn unavailable_transport_reports_transport_error() {
    let req = HttpRequest {
        method: Method::Get,
        url: "/api/profile".into(),
        headers: BTreeMap::new(),
        body: None,
        include_credentials: true,
    };
    let err = block_on(UnavailableTransport.send(req)).unwrap_err();
    assert_eq!(err, ApiError::Transport("not available on server".into()));
}
