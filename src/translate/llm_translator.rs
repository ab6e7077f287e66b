use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::error::TranslateError;
use super::interface::TranslatorInterface;
use super::prompt::build_system_prompt;
use crate::llm::{GenerationParams, LlmError, Message, StatelessLLMInterface};

/// Translator backed by a chat-completion model
pub struct LLMTranslator {
    llm: Arc<dyn StatelessLLMInterface>,
    params: GenerationParams,
    default_source_language: String,
}

impl LLMTranslator {
    pub fn new(
        llm: Arc<dyn StatelessLLMInterface>,
        params: GenerationParams,
        default_source_language: String,
    ) -> Self {
        Self {
            llm,
            params,
            default_source_language,
        }
    }
}

#[async_trait]
impl TranslatorInterface for LLMTranslator {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<String, TranslateError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TranslateError::InvalidInput("text is empty"));
        }
        let target_language = target_language.trim();
        if target_language.is_empty() {
            return Err(TranslateError::InvalidInput("target language is empty"));
        }
        let source_language = source_language
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(self.default_source_language.as_str());

        let messages = [
            Message::system(build_system_prompt(target_language, Some(source_language))),
            Message::user(text),
        ];

        debug!(
            "Requesting translation {} -> {} ({} chars)",
            source_language,
            target_language,
            text.chars().count()
        );
        let content = self.llm.chat_completion(&messages, self.params).await?;

        let translated = content.trim();
        if translated.is_empty() {
            return Err(LlmError::MalformedResponse("completion content is empty".to_string()).into());
        }
        Ok(translated.to_string())
    }
}
