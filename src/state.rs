use std::sync::Arc;

use crate::config::Config;
use crate::llm::StatelessLLMFactory;
use crate::translate::{LLMTranslator, TranslatorInterface};

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Arc<dyn TranslatorInterface>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let llm = StatelessLLMFactory::create_llm(&config.llm_config)?;
        let translator = Arc::new(LLMTranslator::new(
            llm,
            config.llm_config.generation_params(),
            config.translator_config.default_source_language.clone(),
        ));

        Ok(Self::with_translator(config, translator))
    }

    pub fn with_translator(config: Config, translator: Arc<dyn TranslatorInterface>) -> Self {
        Self {
            config: Arc::new(config),
            translator,
        }
    }
}
