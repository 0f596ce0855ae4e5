use async_trait::async_trait;
use serde_json::json;

use crate::config::GeneratorConfig;
use crate::error::{RepodocError, Result};

use super::describer::DescriptionGenerator;

const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Factory function to create the configured description generator
pub fn create_generator(config: &GeneratorConfig) -> Result<Box<dyn DescriptionGenerator>> {
    match config.provider.as_str() {
        "openai" | "openai-compatible" => Ok(Box::new(OpenAiCompatibleProvider::new(config)?)),
        _ => Err(RepodocError::Config(format!(
            "Unsupported generator provider: {}",
            config.provider
        ))),
    }
}

/// Provider for OpenAI-style chat completions endpoints, including local
/// servers that speak the same protocol
pub struct OpenAiCompatibleProvider {
    config: GeneratorConfig,
    client: reqwest::Client,
}

impl OpenAiCompatibleProvider {
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        if config.api_key.is_none() && config.base_url.is_none() {
            return Err(RepodocError::Config(
                "API key required unless a local base URL is configured".to_string(),
            ));
        }

        Ok(Self {
            config: config.clone(),
            client: reqwest::Client::new(),
        })
    }

    fn endpoint(&self) -> String {
        match &self.config.base_url {
            Some(base) => format!("{}/chat/completions", base.trim_end_matches('/')),
            None => OPENAI_CHAT_COMPLETIONS_URL.to_string(),
        }
    }
}

#[async_trait]
impl DescriptionGenerator for OpenAiCompatibleProvider {
    async fn generate(
        &self,
        prompt: &str,
        max_new_tokens: u32,
        temperature: f32,
    ) -> Result<String> {
        let payload = json!({
            "model": self.config.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "max_tokens": max_new_tokens,
            "temperature": temperature
        });

        let mut request = self.client.post(self.endpoint()).json(&payload);
        if let Some(api_key) = &self.config.api_key {
            request = request.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = request
            .send()
            .await
            .map_err(|e| RepodocError::Generation(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(RepodocError::Generation(format!(
                "endpoint returned {}: {}",
                status, error_text
            )));
        }

        let response_data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| RepodocError::Generation(format!("malformed response: {}", e)))?;

        response_data["choices"][0]["message"]["content"]
            .as_str()
            .map(|content| content.to_string())
            .ok_or_else(|| {
                RepodocError::Generation("response carried no message content".to_string())
            })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
