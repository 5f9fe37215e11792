use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::config::CheckConfig;

/// One detected issue from the text-analysis API: a short description
/// plus zero or more suggested replacements.
#[derive(Debug, Clone, Deserialize)]
pub struct Finding {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "shortMessage", default)]
    pub short_message: String,
    #[serde(default)]
    pub replacements: Vec<Replacement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Replacement {
    pub value: String,
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<Finding>,
}

/// Client for a LanguageTool-style `/check` endpoint. Form-encoded
/// request, no auth header, one call per word.
pub struct CheckClient {
    client: reqwest::Client,
    config: CheckConfig,
}

impl CheckClient {
    pub fn new(config: CheckConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub async fn check(&self, word: &str) -> Result<Vec<Finding>> {
        debug!("Sending check request to: {}", self.config.base_url);

        let response = self
            .client
            .post(&self.config.base_url)
            .form(&[("text", word), ("language", self.config.language.as_str())])
            .send()
            .await
            .context("Failed to send request to the spell check API")?;

        let status = response.status();
        debug!("Spell check API status: {}", status);

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!("Spell check API error ({}): {}", status, error_body);
        }

        let parsed: CheckResponse = response
            .json()
            .await
            .context("Failed to parse spell check API response")?;

        Ok(parsed.matches)
    }
}
