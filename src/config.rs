use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Which external API this deployment bridges to. Fixed at startup;
/// the two variants are never mixed in one running process.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Image,
    Spellcheck,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Image => write!(f, "image"),
            Mode::Spellcheck => write!(f, "spellcheck"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub mode: Mode,
    pub telegram: TelegramConfig,
    pub image: Option<ImageConfig>,
    #[serde(default = "default_check_config")]
    pub check: CheckConfig,
    #[serde(default = "default_health_config")]
    pub health: HealthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImageConfig {
    pub api_key: String,
    #[serde(default = "default_image_base_url")]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CheckConfig {
    #[serde(default = "default_check_base_url")]
    pub base_url: String,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HealthConfig {
    #[serde(default = "default_health_port")]
    pub port: u16,
}

fn default_image_base_url() -> String {
    "https://api-inference.huggingface.co/models/runwayml/stable-diffusion-v1-5".to_string()
}

fn default_check_base_url() -> String {
    "https://api.languagetool.org/v2/check".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_health_port() -> u16 {
    10000
}

fn default_check_config() -> CheckConfig {
    CheckConfig {
        base_url: default_check_base_url(),
        language: default_language(),
    }
}

fn default_health_config() -> HealthConfig {
    HealthConfig {
        port: default_health_port(),
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// The [image] section, required when running in image mode.
    pub fn image_config(&self) -> Result<&ImageConfig> {
        self.image
            .as_ref()
            .context("Missing [image] section in config")
    }

    fn validate(&self) -> Result<()> {
        if self.telegram.bot_token.is_empty() {
            bail!("telegram.bot_token must not be empty");
        }
        if self.mode == Mode::Image {
            match &self.image {
                Some(image) if !image.api_key.is_empty() => {}
                _ => bail!("mode \"image\" requires an [image] section with a non-empty api_key"),
            }
        }
        Ok(())
    }
}
