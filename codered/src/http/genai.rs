//! Generative backend API client

use genai_client::models::{GenerateContentRequest, GenerateContentResponse};
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::errors::ConsoleError;
use crate::http::client::HttpClient;

const API_KEY_HEADER: &str = "x-goog-api-key";

impl HttpClient {
    /// Run one `generateContent` call against `model`
    pub async fn generate_content(
        &self,
        model: &str,
        api_key: &SecretString,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ConsoleError> {
        let mut key = HeaderValue::from_str(api_key.expose_secret())
            .map_err(|e| ConsoleError::ConfigError(format!("invalid API key: {}", e)))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let path = format!("/v1beta/models/{}:generateContent", model);
        self.post(&path, headers, request).await
    }
}
