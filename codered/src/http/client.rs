//! HTTP client implementation

use genai_client::models::ErrorResponse;
use reqwest::{header::HeaderMap, Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};
use url::Url;

use crate::errors::ConsoleError;

/// HTTP client bound to one backend base URL
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(base_url: &str) -> Result<Self, ConsoleError> {
        Url::parse(base_url)?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a POST request
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        headers: HeaderMap,
        body: &B,
    ) -> Result<T, ConsoleError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ConsoleError::ServerError(failure_message(status, &body)));
        }

        let body = response.json().await?;
        Ok(body)
    }
}

/// Describe a non-success response, preferring the backend's error envelope
fn failure_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(envelope) => {
            let reason = envelope.error.status.unwrap_or_default();
            error!(
                code = envelope.error.code,
                status = %reason,
                "HTTP POST failed: {} - {}",
                status,
                envelope.error.message
            );
            format!("{} {}: {}", status, reason, envelope.error.message)
        }
        Err(_) => {
            error!("HTTP POST failed: {} - {}", status, body);
            format!("{}: {}", status, body)
        }
    }
}
