//! Scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::error::ApiError;
use super::http::{HttpRequest, HttpResponse, Transport};

#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with `status` and JSON `body`.
    pub fn reply(&self, status: u16, body: Value) -> &Self {
        self.replies.lock().unwrap().push_back(Ok(HttpResponse { status, body }));
        self
    }

    /// Queue a transport failure.
    pub fn fail(&self, message: &str) -> &Self {
        self.replies.lock().unwrap().push_back(Err(ApiError::Transport(message.to_owned())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request sent")
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_owned())))
    }
}
