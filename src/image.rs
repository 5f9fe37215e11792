use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::config::ImageConfig;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    wait_for_model: bool,
}

/// Client for a text-to-image inference endpoint. One HTTP call per
/// prompt, no retries; a 2xx response body is the image, verbatim.
pub struct ImageClient {
    client: reqwest::Client,
    config: ImageConfig,
}

impl ImageClient {
    pub fn new(config: ImageConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub async fn generate(&self, prompt: &str) -> Result<Vec<u8>> {
        let request = GenerateRequest {
            inputs: prompt,
            options: GenerateOptions {
                wait_for_model: true,
            },
        };

        debug!("Sending generation request to: {}", self.config.base_url);

        let response = self
            .client
            .post(&self.config.base_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await
            .context("Failed to send request to the inference API")?;

        let status = response.status();
        debug!("Inference API status: {}", status);

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!("Inference API error ({}): {}", status, error_body);
        }

        // No content-type check: whatever the API returned is the photo payload.
        let bytes = response
            .bytes()
            .await
            .context("Failed to read inference API response body")?;

        Ok(bytes.to_vec())
    }
}
