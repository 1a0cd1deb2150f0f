//! AI content provider backed by the OpenAI chat completions API.

use std::time::Duration;

use async_openai::config::OpenAIConfig;
use async_openai::error::{ApiError, OpenAIError};
use async_openai::types::{
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs, ResponseFormat,
};
use async_openai::Client;
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use thiserror::Error;

use crate::config::OpenAiConfig;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("AI provider not configured: {0}")]
    NotConfigured(String),

    #[error("Rate limited by AI provider: {0}")]
    RateLimited(String),

    #[error("AI provider rejected credentials: {0}")]
    Unauthorized(String),

    #[error("AI provider error: {0}")]
    Backend(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("AI provider returned no content")]
    EmptyResponse,
}

impl ProviderError {
    /// Quota exhaustion and rate limiting; the user can act on these.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }
}

impl From<OpenAIError> for ProviderError {
    fn from(err: OpenAIError) -> Self {
        match err {
            OpenAIError::ApiError(api) => classify_api_error(api),
            OpenAIError::Reqwest(e) => ProviderError::Network(e.to_string()),
            OpenAIError::JSONDeserialize(e) => ProviderError::InvalidResponse(e.to_string()),
            other => ProviderError::Backend(other.to_string()),
        }
    }
}

/// Text generation capability.
///
/// `complete` returns the raw model output; it is not validated here.
#[async_trait]
pub trait AiProvider: Send + Sync {
    async fn complete(
        &self,
        system_instructions: &str,
        prompt: &str,
    ) -> Result<String, ProviderError>;
}

/// OpenAI chat completions client.
pub struct OpenAiClient {
    client: Option<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiClient {
    /// Build the client. Without an API key every call fails with
    /// `NotConfigured` and no request is sent.
    pub fn new(config: &OpenAiConfig) -> Self {
        let client = config.api_key.as_deref().map(|api_key| {
            let openai_config = OpenAIConfig::new()
                .with_api_key(api_key)
                .with_api_base(config.base_url.trim_end_matches('/'));

            // Fail on the first error; retries belong to the caller.
            let no_retry = ExponentialBackoffBuilder::new()
                .with_max_elapsed_time(Some(Duration::ZERO))
                .build();

            Client::with_config(openai_config).with_backoff(no_retry)
        });

        Self {
            client,
            model: config.model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl AiProvider for OpenAiClient {
    async fn complete(
        &self,
        system_instructions: &str,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| ProviderError::NotConfigured("OPENAI_API_KEY not set".to_string()))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .response_format(ResponseFormat::JsonObject)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system_instructions)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt)
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = client.chat().create(request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(ProviderError::EmptyResponse)
    }
}

/// Map an OpenAI error body to a provider error.
///
/// The body carries no HTTP status, so the `code` and `type` fields decide.
fn classify_api_error(err: ApiError) -> ProviderError {
    let kinds = [err.code.as_deref(), err.r#type.as_deref()];

    if kinds.iter().flatten().any(|k| {
        matches!(
            *k,
            "rate_limit_exceeded" | "insufficient_quota" | "requests" | "tokens"
        )
    }) {
        ProviderError::RateLimited(err.message)
    } else if kinds.iter().flatten().any(|k| {
        matches!(
            *k,
            "invalid_api_key" | "authentication_error" | "permission_error"
        )
    }) {
        ProviderError::Unauthorized(err.message)
    } else {
        ProviderError::Backend(err.message)
    }
}
