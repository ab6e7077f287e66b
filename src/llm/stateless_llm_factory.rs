use std::sync::Arc;
use tracing::info;

use super::azure_openai_llm::AzureOpenAILLM;
use super::error::LlmError;
use super::openai_compatible_llm::OpenAICompatibleLLM;
use super::stateless_llm_interface::StatelessLLMInterface;
use crate::config::LlmConfig;

pub const AZURE_OPENAI_PROVIDER: &str = "azure_openai_llm";

/// Provider names served by the OpenAI-compatible client
pub const OPENAI_COMPATIBLE_PROVIDERS: &[&str] = &[
    "openai_compatible_llm",
    "openai_llm",
    "deepseek_llm",
    "groq_llm",
    "mistral_llm",
    "ollama_llm",
];

/// Providers that may run without a credential (local servers)
pub const KEYLESS_PROVIDERS: &[&str] = &["ollama_llm"];

/// Factory for creating stateless LLM instances
pub struct StatelessLLMFactory;

impl StatelessLLMFactory {
    pub fn is_supported(llm_provider: &str) -> bool {
        llm_provider == AZURE_OPENAI_PROVIDER || OPENAI_COMPATIBLE_PROVIDERS.contains(&llm_provider)
    }

    /// Create an LLM based on the configuration.
    pub fn create_llm(config: &LlmConfig) -> Result<Arc<dyn StatelessLLMInterface>, LlmError> {
        info!("Initializing LLM: {}", config.llm_provider);
        let timeout = config.request_timeout();

        match config.llm_provider.as_str() {
            AZURE_OPENAI_PROVIDER => Ok(Arc::new(AzureOpenAILLM::new(
                config.base_url.clone(),
                config.model.clone(),
                config.api_version.clone(),
                &config.api_key,
                timeout,
            )?)),
            provider if OPENAI_COMPATIBLE_PROVIDERS.contains(&provider) => {
                Ok(Arc::new(OpenAICompatibleLLM::new(
                    config.model.clone(),
                    config.base_url.clone(),
                    &config.api_key,
                    timeout,
                )?))
            }
            other => Err(LlmError::UnsupportedProvider(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn llm_config(provider: &str) -> LlmConfig {
        serde_yaml::from_str(&format!(
            "llm_provider: {provider}\nbase_url: https://demo.openai.azure.com\napi_key: secret\n"
        ))
        .unwrap()
    }

    #[test]
    fn recognises_every_alias() {
        assert!(StatelessLLMFactory::is_supported("azure_openai_llm"));
        for provider in OPENAI_COMPATIBLE_PROVIDERS {
            assert!(StatelessLLMFactory::is_supported(provider));
        }
        assert!(!StatelessLLMFactory::is_supported("claude_llm"));
    }

    #[test]
    fn builds_known_providers() {
        assert!(StatelessLLMFactory::create_llm(&llm_config("azure_openai_llm")).is_ok());
        assert!(StatelessLLMFactory::create_llm(&llm_config("groq_llm")).is_ok());
    }

    #[test]
    fn rejects_unknown_provider() {
        let err = StatelessLLMFactory::create_llm(&llm_config("llama_cpp_llm"))
            .err()
            .unwrap();
        assert!(matches!(err, LlmError::UnsupportedProvider(p) if p == "llama_cpp_llm"));
    }
}
