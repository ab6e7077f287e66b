use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use std::time::Duration;
use tracing::info;

use super::error::LlmError;
use super::stateless_llm_interface::{GenerationParams, Message, StatelessLLMInterface};
use super::transport::{build_http_client, send_chat_completion};
use super::types::ChatCompletionRequest;

/// OpenAI compatible LLM implementation
/// Talks to any `/chat/completions` endpoint that accepts a bearer token
pub struct OpenAICompatibleLLM {
    client: Client,
    model: String,
    base_url: String,
}

impl OpenAICompatibleLLM {
    pub fn new(
        model: String,
        base_url: String,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let mut headers = HeaderMap::new();
        if !api_key.is_empty() {
            let mut auth_val = HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|_| LlmError::InvalidConfig("api key is not a valid header value".to_string()))?;
            auth_val.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_val);
        }

        let client = build_http_client(headers, timeout)?;

        info!(
            "Initialized OpenAICompatibleLLM: model={}, base_url={}",
            model, base_url
        );
        Ok(Self {
            client,
            model,
            base_url,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl StatelessLLMInterface for OpenAICompatibleLLM {
    async fn chat_completion(
        &self,
        messages: &[Message],
        params: GenerationParams,
    ) -> Result<String, LlmError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        };

        send_chat_completion(self.client.post(self.completions_url()), &body).await
    }
}
