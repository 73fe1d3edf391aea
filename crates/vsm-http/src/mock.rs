use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{HttpError, HttpGet};

/// Canned answer of [`MockHttp`]
#[derive(Debug, Clone)]
pub enum MockResponse {
    Body(String),
    Status { status: u16, body: String },
    Transport(String),
}

/// In-memory transport for tests.
///
/// Answers are served in order; once only one is left it is repeated.
/// Every requested URL is recorded.
#[derive(Default)]
pub struct MockHttp {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<String>>,
}

impl MockHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(body: impl Into<String>) -> Self {
        Self::new().respond(MockResponse::Body(body.into()))
    }

    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self::new().respond(MockResponse::Status {
            status,
            body: body.into(),
        })
    }

    pub fn respond(self, response: MockResponse) -> Self {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
        self
    }

    /// URLs requested so far
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    fn next_response(&self) -> Option<MockResponse> {
        let mut responses = self.responses.lock().ok()?;
        if responses.len() > 1 {
            responses.pop_front()
        } else {
            responses.front().cloned()
        }
    }
}

#[async_trait]
impl HttpGet for MockHttp {
    async fn get(&self, url: &str) -> Result<String, HttpError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        match self.next_response() {
            Some(MockResponse::Body(body)) => Ok(body),
            Some(MockResponse::Status { status, body }) => Err(HttpError::Status { status, body }),
            Some(MockResponse::Transport(message)) => Err(HttpError::Transport(message)),
            None => Err(HttpError::Transport(format!("no mock response for {url}"))),
        }
    }
}
