use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::TranslateError;

/// Placeholder the demo page's language pickers submit before a choice is made
pub const UNSELECTED_LANGUAGE_PLACEHOLDER: &str = "Select one";

/// A language field as received from a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSelection {
    /// Field missing, null, blank or not a string
    Absent,
    /// Picker left on its placeholder
    Unselected,
    Selected(String),
}

impl LanguageSelection {
    pub fn from_field(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str).map(str::trim) {
            None | Some("") => LanguageSelection::Absent,
            Some(UNSELECTED_LANGUAGE_PLACEHOLDER) => LanguageSelection::Unselected,
            Some(name) => LanguageSelection::Selected(name.to_string()),
        }
    }

    pub fn is_unselected(&self) -> bool {
        matches!(self, LanguageSelection::Unselected)
    }

    pub fn into_selected(self) -> Option<String> {
        match self {
            LanguageSelection::Selected(name) => Some(name),
            _ => None,
        }
    }
}

/// A validated translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_language: Option<String>,
    pub target_language: String,
}

/// Body returned by `POST /translate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original: String,
    pub translated: String,
    pub target_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
}

/// Translator interface; the HTTP layer only sees this trait
#[async_trait]
pub trait TranslatorInterface: Send + Sync {
    /// Translate `text` into `target_language`.
    ///
    /// # Arguments
    /// * `text` - The content to translate
    /// * `target_language` - Human readable language name, e.g. "French"
    /// * `source_language` - Language of `text`; the translator's default when `None`
    ///
    /// # Returns
    /// The translated text with surrounding whitespace removed
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<String, TranslateError>;
}
