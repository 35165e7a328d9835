//! Review-service API client.

use async_trait::async_trait;
use hwpulse_core::error::{HwPulseError, Result};
use hwpulse_core::traits::StatusSource;
use serde_json::Value;
use std::time::Duration;

/// HTTP client for the homework-status endpoint.
pub struct ReviewClient {
    endpoint: String,
    token: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl ReviewClient {
    pub fn new(endpoint: &str, token: &str, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            token: token.to_string(),
            client: reqwest::Client::new(),
            timeout,
        }
    }
}

#[async_trait]
impl StatusSource for ReviewClient {
    /// GET the status feed for everything that changed since `from_date`.
    /// A non-success HTTP status is a transport failure; the body is not
    /// consulted in that case.
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date.to_string())])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| HwPulseError::Transport(format!("status fetch failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HwPulseError::Transport(format!(
                "endpoint returned {status}"
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| HwPulseError::Decode(format!("body is not valid JSON: {e}")))
    }
}
