pub mod azure_openai_llm;
pub mod error;
pub mod openai_compatible_llm;
pub mod stateless_llm_factory;
pub mod stateless_llm_interface;
mod transport;
mod types;

pub use error::LlmError;
pub use stateless_llm_factory::StatelessLLMFactory;
pub use stateless_llm_interface::*;
