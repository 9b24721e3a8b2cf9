// HTTP client for the Gemini generateContent API

use std::time::Duration;

use reqwest::Client;

use super::types::{GenerateRequest, GenerateResponse};
use crate::config::Config;
use crate::errors::{Error, Result};

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Outbound gateway to the Gemini inference endpoint.
///
/// One network round trip per call - no retry, no caching. The model id is
/// a fixed constant, not a per-request parameter.
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        use anyhow::Context;

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.gemini_base_url.clone(),
        })
    }

    /// Send the analysis prompt and return the normalized plain-text answer.
    ///
    /// Fails with [`Error::Configuration`] before any network I/O when the
    /// API key is absent, and with [`Error::Inference`] on transport errors
    /// or a non-2xx response.
    pub async fn analyze(&self, prompt: &str) -> Result<String> {
        let api_key = match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => key,
            _ => {
                return Err(Error::Configuration(
                    "GEMINI_API_KEY missing".to_string(),
                ))
            }
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, GEMINI_MODEL, api_key
        );
        let request = GenerateRequest::new(prompt);

        tracing::debug!(model = GEMINI_MODEL, "Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Inference(format!("Failed to send request to Gemini API: {e}")))?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Error::Inference(format!(
                "Gemini API request failed: status {status}, body: {error_body}"
            )));
        }

        let envelope: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::Inference(format!("Failed to parse Gemini API response: {e}")))?;

        tracing::debug!("Received response from Gemini API");

        Ok(envelope.into_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_config(api_key: Option<&str>) -> Config {
        Config {
            api_key: api_key.map(String::from),
            bind_address: "127.0.0.1:5000".to_string(),
            log_dir: PathBuf::from("logs"),
            gemini_base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    #[test]
    fn test_client_creation() {
        let client = GeminiClient::new(&test_config(Some("test-key")));
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        let client = GeminiClient::new(&test_config(None)).unwrap();
        let result = client.analyze("prompt").await;
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[tokio::test]
    async fn test_blank_key_fails_before_network() {
        let client = GeminiClient::new(&test_config(Some("  "))).unwrap();
        let result = client.analyze("prompt").await;
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
