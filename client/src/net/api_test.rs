use std::sync::Arc;

use super::*;
use crate::config::ClientConfig;
use crate::net::http::Method;
use crate::net::mock::MockTransport;
use crate::util::navigation::RecordingNavigator;
use crate::util::storage::MemoryStore;
use futures::executor::block_on;
use serde_json::json;

fn client() -> (HttpClient, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::new());
    let http = HttpClient::new(
        ClientConfig::default(),
        transport.clone(),
        Arc::new(MemoryStore::new()),
        Arc::new(RecordingNavigator::at("/login")),
    );
    (http, transport)
}

#[test]
fn login_posts_credentials() {
    let (http, transport) = client();
    transport.reply(200, json!({ "access_token": "T" }));
    let resp = block_on(login(&http, "a@x.com", "pw")).unwrap();
    assert_eq!(resp.bearer_token(), Some("T"));
    let req = transport.last_request();
    assert_eq!((req.method, req.url.as_str()), (Method::Post, "/api/login"));
    assert_eq!(req.body, Some(json!({ "email": "a@x.com", "password": "pw" })));
}

#[test]
fn register_posts_name_email_password() {
    let (http, transport) = client();
    transport.reply(201, json!({ "token": "T" }));
    block_on(register(&http, "Ann", "a@x.com", "pw")).unwrap();
    let req = transport.last_request();
    assert_eq!(req.url, "/api/register");
    assert_eq!(req.body, Some(json!({ "name": "Ann", "email": "a@x.com", "password": "pw" })));
}

#[test]
fn login_with_non_object_body_yields_no_token() {
    let (http, transport) = client();
    transport.reply(200, json!("<html></html>"));
    let resp = block_on(login(&http, "a@x.com", "pw")).unwrap();
    assert_eq!(resp.bearer_token(), None);
}

#[test]
fn logout_without_refresh_token_sends_no_body() {
    let (http, transport) = client();
    transport.reply(200, json!({ "message": "tokens revoked" }));
    block_on(logout(&http, None)).unwrap();
    let req = transport.last_request();
    assert_eq!(req.url, "/api/logout");
    assert_eq!(req.body, None);
}

#[test]
fn logout_forwards_refresh_token() {
    let (http, transport) = client();
    transport.reply(200, Value::Null);
    block_on(logout(&http, Some("R"))).unwrap();
    assert_eq!(transport.last_request().body, Some(json!({ "refresh_token": "R" })));
}

#[test]
fn password_reset_calls_return_payload_verbatim() {
    let (http, transport) = client();
    transport.reply(200, json!({ "status": "sent" }));
    transport.reply(200, json!({ "message": "password reset successful" }));

    let sent = block_on(request_password_reset(&http, "a@x.com")).unwrap();
    let done = block_on(confirm_password_reset(&http, "tok", "new-pw")).unwrap();

    assert_eq!(sent, json!({ "status": "sent" }));
    assert_eq!(done, json!({ "message": "password reset successful" }));
    let reqs = transport.requests();
    assert_eq!(reqs[0].url, "/api/password-reset/request");
    assert_eq!(reqs[0].body, Some(json!({ "email": "a@x.com" })));
    assert_eq!(reqs[1].url, "/api/password-reset/confirm");
    assert_eq!(reqs[1].body, Some(json!({ "token": "tok", "password": "new-pw" })));
}

#[test]
fn fetch_profile_extracts_user() {
    let (http, transport) = client();
    transport.reply(200, json!({ "user": { "id": 1, "role": "admin" } }));
    let user = block_on(fetch_profile(&http)).unwrap();
    assert_eq!(user, json!({ "id": 1, "role": "admin" }));
    assert_eq!(transport.last_request().method, Method::Get);
}

#[test]
fn refresh_posts_refresh_token() {
    let (http, transport) = client();
    transport.reply(200, json!({ "access_token": "T2", "access_expires": "later" }));
    let resp = block_on(refresh(&http, "R")).unwrap();
    assert_eq!(resp.bearer_token(), Some("T2"));
    assert_eq!(transport.last_request().url, "/api/token/refresh");
}
