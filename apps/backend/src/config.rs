//! Environment configuration for the backend.

use flashcard_core::ExportConfig;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Settings for the OpenAI chat completions client.
#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Backend configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub openai: OpenAiConfig,
    pub export: ExportConfig,
    /// Suffix download file names with the export time.
    pub timestamped_filename: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Recognized vars:
    /// - HOST, PORT: listen address (default 0.0.0.0:3000)
    /// - OPENAI_API_KEY: provider key; generation fails without it
    /// - OPENAI_MODEL: chat model (default gpt-4o)
    /// - OPENAI_BASE_URL: API root (default https://api.openai.com/v1)
    /// - EXPORT_INCLUDE_HEADER: emit the CSV header line (default true)
    /// - EXPORT_TIMESTAMPED_FILENAME: timestamp download names (default false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let include_header = match var("EXPORT_INCLUDE_HEADER") {
            Some(value) => parse_bool("EXPORT_INCLUDE_HEADER", value)?,
            None => true,
        };

        let timestamped_filename = match var("EXPORT_TIMESTAMPED_FILENAME") {
            Some(value) => parse_bool("EXPORT_TIMESTAMPED_FILENAME", value)?,
            None => false,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            openai: OpenAiConfig {
                api_key: var("OPENAI_API_KEY"),
                model: var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: var("OPENAI_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            },
            export: ExportConfig { include_header },
            timestamped_filename,
        })
    }

    /// Socket address string for the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value }),
    }
}
