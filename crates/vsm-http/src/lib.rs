mod client;
#[cfg(any(test, feature = "mock"))]
mod mock;

pub use client::ReqwestClient;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockHttp, MockResponse};

/// Transport used by dictionary adapters: one GET, body or error
#[async_trait::async_trait]
pub trait HttpGet: Send + Sync {
    /// Fetch `url` and return the response body of a 2xx response
    async fn get(&self, url: &str) -> Result<String, HttpError>;
}

#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("Network error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection-level failure reported by an in-memory transport
    #[cfg(any(test, feature = "mock"))]
    #[error("Transport error: {0}")]
    Transport(String),
}

impl HttpError {
    /// HTTP status code, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            HttpError::Request(e) => e.status().map(|s| s.as_u16()),
            #[cfg(any(test, feature = "mock"))]
            HttpError::Transport(_) => None,
        }
    }
}
