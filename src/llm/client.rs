use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse>;
}

pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::config("Gemini client requires an API key"));
        }

        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            model: config.model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse> {
        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::llm(format!("Gemini API error {}: {}", status, body)));
        }

        let body = response.bytes().await?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&body)
            .map_err(|e| Error::response_format(e.to_string()))?;

        if let Some(reason) = parsed
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            debug!("Prompt blocked by provider: {}", reason);
        }
        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt_token_count,
                candidate_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                "Received generateContent response with {} candidates",
                parsed.candidates.len()
            );
        }

        Ok(parsed)
    }
}
