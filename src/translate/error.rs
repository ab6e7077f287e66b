use thiserror::Error;

use crate::llm::LlmError;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("invalid translation input: {0}")]
    InvalidInput(&'static str),
    #[error(transparent)]
    Upstream(#[from] LlmError),
}
