pub mod error;
pub mod interface;
pub mod llm_translator;
pub mod prompt;

pub use error::TranslateError;
pub use interface::*;
pub use llm_translator::LLMTranslator;
