use anyhow::{Context, Result};
use log::{debug, error, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// How an upstream GET ended
#[derive(Debug)]
pub enum FetchOutcome {
    Payload(Value),
    RateLimited,
    Malformed,
    Failed,
}

impl FetchOutcome {
    /// Degrades every failure to the caller-supplied empty payload.
    pub fn into_payload(self, empty: impl FnOnce() -> Value) -> Value {
        match self {
            FetchOutcome::Payload(value) => value,
            _ => empty(),
        }
    }
}

/// HTTP client for upstream providers. Failures never escape `get_json`.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
}

impl UpstreamClient {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    /// GETs `url`, classifying the response. `label` names the source in logs.
    pub async fn get_json(&self, url: &str, label: &str) -> FetchOutcome {
        debug!("Fetching {} from {}", label, url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Error fetching {} data: {}", label, e);
                return FetchOutcome::Failed;
            }
        };

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Rate limited when fetching {} data. Returning empty data.", label);
            return FetchOutcome::RateLimited;
        }

        if !status.is_success() {
            error!("Failed to fetch data for {}: {}", label, status);
            return FetchOutcome::Failed;
        }

        if !Self::is_json(&response) {
            warn!("Non-JSON response for {}. Returning empty data.", label);
            return FetchOutcome::Malformed;
        }

        match response.json::<Value>().await {
            Ok(value) => FetchOutcome::Payload(value),
            Err(e) => {
                warn!("Unreadable JSON for {}: {}. Returning empty data.", label, e);
                FetchOutcome::Malformed
            }
        }
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    fn is_json(response: &reqwest::Response) -> bool {
        response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("application/json"))
            .unwrap_or(false)
    }
}
