use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder};
use tracing::{debug, warn};

use super::error::LlmError;
use super::types::{ChatCompletionRequest, ChatCompletionResponse};

// Upper bound on how much of an upstream error body is kept for logging.
const MAX_ERROR_BODY_CHARS: usize = 512;

pub(super) fn build_http_client(headers: HeaderMap, timeout: Duration) -> Result<Client, LlmError> {
    Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .connect_timeout(timeout)
        .build()
        .map_err(LlmError::Http)
}

/// Send a chat-completion body and pull out the first choice's content
pub(super) async fn send_chat_completion(
    request: RequestBuilder,
    body: &ChatCompletionRequest<'_>,
) -> Result<String, LlmError> {
    let response = request.json(body).send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let body: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        warn!("Chat completion rejected with status {}", status);
        return Err(LlmError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await?;
    let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)
        .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;
    debug!("Chat completion returned {} choice(s)", parsed.choices.len());
    parsed.into_first_content()
}
