//! Scripted in-memory transport for tests.

use hashbrown::HashMap;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::transport::{HttpMethod, Transport, TransportError, TransportRequest, TransportResponse};

type Reply = Result<TransportResponse, TransportError>;

#[derive(Default)]
struct MockState {
    routes: HashMap<(HttpMethod, String), VecDeque<Reply>>,
    requests: Vec<TransportRequest>,
}

/// Serves canned responses per `(method, path)` and records every request.
///
/// Each route holds a queue; replies are consumed in order and the last one
/// is repeated once the queue is drained. Unknown routes answer 404.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub const BASE_URL: &'static str = "http://chronos.test";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self, method: HttpMethod, path: &str, response: TransportResponse) {
        self.push(method, path, Ok(response));
    }

    pub fn fail(&self, method: HttpMethod, path: &str, message: &str) {
        self.push(method, path, Err(TransportError(message.to_string())));
    }

    fn push(&self, method: HttpMethod, path: &str, reply: Reply) {
        let mut state = self.state.lock().unwrap();
        state
            .routes
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> Option<TransportRequest> {
        self.state.lock().unwrap().requests.last().cloned()
    }

    /// Number of requests sent to `path` (query string included).
    pub fn count(&self, method: HttpMethod, path: &str) -> usize {
        let url = format!("{}{}", Self::BASE_URL, path);
        self.state
            .lock()
            .unwrap()
            .requests
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }

    pub fn total_requests(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut state = self.state.lock().unwrap();
        let path = request
            .url
            .strip_prefix(Self::BASE_URL)
            .unwrap_or(&request.url)
            .to_string();
        let key = (request.method, path.clone());
        state.requests.push(request);

        match state.routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) if !queue.is_empty() => queue[0].clone(),
            _ => Ok(text_response(404, &format!("no route for {} {}", key.0, path))),
        }
    }
}

pub fn json_response(status: u16, body: Value) -> TransportResponse {
    raw_response(status, "application/json", &body.to_string())
}

pub fn text_response(status: u16, body: &str) -> TransportResponse {
    raw_response(status, "text/plain", body)
}

pub fn raw_response(status: u16, content_type: &str, body: &str) -> TransportResponse {
    TransportResponse {
        status,
        content_type: Some(content_type.to_string()),
        body: body.as_bytes().to_vec(),
    }
}
