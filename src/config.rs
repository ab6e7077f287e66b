use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::llm::stateless_llm_factory::{StatelessLLMFactory, AZURE_OPENAI_PROVIDER, KEYLESS_PROVIDERS};
use crate::llm::GenerationParams;
use crate::utils::config_file::{read_text_file_with_guess_encoding, substitute_env_vars};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    pub llm_config: LlmConfig,
    #[serde(default)]
    pub translator_config: TranslatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Connection and sampling settings for the chat-completion backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_llm_provider")]
    pub llm_provider: String,

    /// Azure resource endpoint, or the OpenAI-compatible base url
    pub base_url: String,

    #[serde(default)]
    pub api_key: String,

    /// Model name; for Azure this is the deployment name
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_api_version")]
    pub api_version: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_llm_provider() -> String {
    AZURE_OPENAI_PROVIDER.to_string()
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_api_version() -> String {
    "2024-10-21".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f32 {
    0.3
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    #[serde(default = "default_source_language")]
    pub default_source_language: String,

    /// Treat every request as the two-language variant
    #[serde(default)]
    pub require_source_language: bool,
}

fn default_languages() -> Vec<String> {
    [
        "Spanish",
        "French",
        "German",
        "Italian",
        "Chinese",
        "Japanese",
        "Korean",
        "Russian",
        "Portuguese",
        "Arabic",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_source_language() -> String {
    crate::translate::prompt::DEFAULT_SOURCE_LANGUAGE.to_string()
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            default_source_language: default_source_language(),
            require_source_language: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

impl Config {
    /// Load, expand `${VAR}` placeholders, parse and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_text_file_with_guess_encoding(path)?;
        let content = substitute_env_vars(&content)?;
        let config = Self::parse(&content, ConfigFormat::from_path(path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        let config = match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.llm_config.validate()?;
        if self.translator_config.default_source_language.trim().is_empty() {
            bail!("translator_config.default_source_language must not be empty");
        }
        Ok(())
    }
}

fn is_unset(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.contains("${")
}

impl LlmConfig {
    pub fn validate(&self) -> Result<()> {
        if !StatelessLLMFactory::is_supported(&self.llm_provider) {
            bail!("Unsupported LLM provider: {}", self.llm_provider);
        }
        if is_unset(&self.base_url) {
            bail!("llm_config.base_url is not set");
        }
        if is_unset(&self.api_key) && !KEYLESS_PROVIDERS.contains(&self.llm_provider.as_str()) {
            bail!(
                "llm_config.api_key is not set for provider {}",
                self.llm_provider
            );
        }
        if is_unset(&self.model) {
            bail!("llm_config.model is not set");
        }
        if self.llm_provider == AZURE_OPENAI_PROVIDER && is_unset(&self.api_version) {
            bail!("llm_config.api_version is required for {}", AZURE_OPENAI_PROVIDER);
        }
        if self.max_tokens == 0 {
            bail!("llm_config.max_tokens must be positive");
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            bail!(
                "llm_config.temperature must be between 0 and 2, got {}",
                self.temperature
            );
        }
        if self.timeout_secs == 0 {
            bail!("llm_config.timeout_secs must be positive");
        }
        Ok(())
    }

    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_YAML: &str = r#"
llm_config:
  base_url: https://demo.openai.azure.com
  api_key: secret
"#;

    #[test]
    fn minimal_yaml_fills_defaults() {
        let config = Config::parse(MINIMAL_YAML, ConfigFormat::Yaml).unwrap();
        config.validate().unwrap();

        assert_eq!(config.system_config.port, 5000);
        assert_eq!(config.llm_config.llm_provider, "azure_openai_llm");
        assert_eq!(config.llm_config.model, "gpt-4");
        assert_eq!(config.llm_config.api_version, "2024-10-21");
        assert_eq!(config.llm_config.generation_params(), GenerationParams::default());
        assert_eq!(config.llm_config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.translator_config.languages.len(), 10);
        assert_eq!(config.translator_config.default_source_language, "English");
        assert!(!config.translator_config.require_source_language);
    }

    #[test]
    fn json_format_is_supported() {
        let json = r#"{
            "system_config": {"port": 8080},
            "llm_config": {
                "llm_provider": "openai_llm",
                "base_url": "https://api.openai.com/v1",
                "api_key": "sk-test",
                "model": "gpt-4o-mini",
                "temperature": 0.1
            },
            "translator_config": {"languages": ["Dutch"], "require_source_language": true}
        }"#;
        let config = Config::parse(json, ConfigFormat::Json).unwrap();
        config.validate().unwrap();

        assert_eq!(config.system_config.port, 8080);
        assert_eq!(config.system_config.host, "0.0.0.0");
        assert_eq!(config.llm_config.model, "gpt-4o-mini");
        assert_eq!(config.translator_config.languages, vec!["Dutch".to_string()]);
        assert!(config.translator_config.require_source_language);
    }

    #[test]
    fn unresolved_credential_placeholder_is_fatal() {
        let yaml = r#"
llm_config:
  base_url: https://demo.openai.azure.com
  api_key: ${LLM_TRANSLATOR_TEST_NEVER_SET_KEY}
"#;
        let content = substitute_env_vars(yaml).unwrap();
        let config = Config::parse(&content, ConfigFormat::Yaml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn empty_endpoint_is_fatal() {
        let yaml = "llm_config:\n  base_url: \"\"\n  api_key: secret\n";
        let config = Config::parse(yaml, ConfigFormat::Yaml).unwrap();
        assert!(config.validate().unwrap_err().to_string().contains("base_url"));
    }

    #[test]
    fn ollama_runs_without_credential() {
        let yaml = "llm_config:\n  llm_provider: ollama_llm\n  base_url: http://localhost:11434/v1\n  model: llama3\n";
        let config = Config::parse(yaml, ConfigFormat::Yaml).unwrap();
        config.validate().unwrap();
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut config = Config::parse(MINIMAL_YAML, ConfigFormat::Yaml).unwrap();
        config.llm_config.temperature = 3.5;
        assert!(config.validate().is_err());

        let mut config = Config::parse(MINIMAL_YAML, ConfigFormat::Yaml).unwrap();
        config.llm_config.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::parse(MINIMAL_YAML, ConfigFormat::Yaml).unwrap();
        config.llm_config.llm_provider = "claude_llm".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_substitutes_environment_variables() {
        std::env::set_var("LLM_TRANSLATOR_TEST_LOAD_KEY", "from-env");
        let path = std::env::temp_dir().join(format!(
            "llm-translator-conf-{}.yaml",
            uuid::Uuid::new_v4()
        ));
        std::fs::write(
            &path,
            "llm_config:\n  base_url: https://demo.openai.azure.com\n  api_key: ${LLM_TRANSLATOR_TEST_LOAD_KEY}\n",
        )
        .unwrap();

        let config = Config::load(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.unwrap().llm_config.api_key, "from-env");
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("conf.JSON")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("conf.yml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("conf")), ConfigFormat::Yaml);
    }
}
