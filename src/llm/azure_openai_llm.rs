use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use std::time::Duration;
use tracing::info;

use super::error::LlmError;
use super::stateless_llm_interface::{GenerationParams, Message, StatelessLLMInterface};
use super::transport::{build_http_client, send_chat_completion};
use super::types::ChatCompletionRequest;

/// Azure OpenAI chat completions.
///
/// The deployment name doubles as the model; requests go to
/// `{endpoint}/openai/deployments/{deployment}/chat/completions?api-version=...`
/// and authenticate with the `api-key` header.
pub struct AzureOpenAILLM {
    client: Client,
    endpoint: String,
    deployment: String,
    api_version: String,
}

impl AzureOpenAILLM {
    pub fn new(
        endpoint: String,
        deployment: String,
        api_version: String,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let mut headers = HeaderMap::new();
        let mut key_val = HeaderValue::from_str(api_key)
            .map_err(|_| LlmError::InvalidConfig("api key is not a valid header value".to_string()))?;
        key_val.set_sensitive(true);
        headers.insert("api-key", key_val);

        let client = build_http_client(headers, timeout)?;

        info!(
            "Initialized AzureOpenAILLM: endpoint={}, deployment={}, api_version={}",
            endpoint, deployment, api_version
        );
        Ok(Self {
            client,
            endpoint,
            deployment,
            api_version,
        })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions",
            self.endpoint.trim_end_matches('/'),
            self.deployment
        )
    }
}

#[async_trait]
impl StatelessLLMInterface for AzureOpenAILLM {
    async fn chat_completion(
        &self,
        messages: &[Message],
        params: GenerationParams,
    ) -> Result<String, LlmError> {
        let body = ChatCompletionRequest {
            model: &self.deployment,
            messages,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        };

        let request = self
            .client
            .post(self.completions_url())
            .query(&[("api-version", self.api_version.as_str())]);
        send_chat_completion(request, &body).await
    }
}
