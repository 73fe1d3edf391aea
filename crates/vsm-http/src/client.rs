use std::time::Duration;

use async_trait::async_trait;

use crate::{HttpError, HttpGet};

#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpGet for ReqwestClient {
    async fn get(&self, url: &str) -> Result<String, HttpError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("GET {url} failed with HTTP {status}");
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
