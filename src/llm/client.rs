//! LLM Client abstractions and provider management
//!
//! This module provides a unified interface for the hosted completion services
//! the support assistant can talk to:
//! - **Gemini**: Google generative language API over plain HTTPS (always available)
//! - **OpenAI**: chat completions API and compatible endpoints (`openai` feature)

use crate::types::{AppError, Result};
use crate::utils::toml_config::{ProviderKind, SoftSellConfig, SoftSellConfigManager};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Generic LLM client trait for provider abstraction
///
/// All LLM providers implement this trait, allowing for easy swapping
/// between providers without changing application code.
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Generate a completion from a prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Generate with a fixed instruction preceding the visitor's message
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String>;

    /// Get the model name/identifier
    fn model_name(&self) -> &str;
}

/// Sampling and transport settings shared by every provider
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub timeout: Duration,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Provider enum for runtime selection
#[derive(Debug, Clone)]
pub enum Provider {
    /// Google Gemini `generateContent` API
    ///
    /// # Example
    /// ```rust,ignore
    /// let provider = Provider::Gemini {
    ///     api_key: "AIza...".to_string(),
    ///     api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
    ///     model: "gemini-1.5-flash".to_string(),
    ///     settings: GenerationSettings::default(),
    /// };
    /// ```
    Gemini {
        api_key: String,
        api_base: String,
        model: String,
        settings: GenerationSettings,
    },

    /// OpenAI API provider (including compatible APIs)
    OpenAI {
        api_key: String,
        api_base: String,
        model: String,
        settings: GenerationSettings,
    },
}

impl Provider {
    /// Build the provider described by the `[assistant]` section
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the API key variable is unset.
    pub fn from_config(config: &SoftSellConfig) -> Result<Self> {
        let assistant = &config.assistant;
        let api_key = config
            .api_key()
            .map_err(|e| AppError::Configuration(e.to_string()))?;
        let settings = GenerationSettings {
            temperature: assistant.temperature,
            max_tokens: assistant.max_tokens,
            timeout: assistant.timeout(),
        };
        let api_base = assistant.api_base().trim_end_matches('/').to_string();
        let model = assistant.model().to_string();

        Ok(match assistant.provider {
            ProviderKind::Gemini => Provider::Gemini {
                api_key,
                api_base,
                model,
                settings,
            },
            ProviderKind::OpenAI => Provider::OpenAI {
                api_key,
                api_base,
                model,
                settings,
            },
        })
    }

    /// Create a client instance for this provider
    ///
    /// # Errors
    ///
    /// Returns an error if the provider was not compiled in or the HTTP
    /// client cannot be built.
    pub fn create_client(&self) -> Result<Box<dyn LLMClient>> {
        match self {
            Provider::Gemini {
                api_key,
                api_base,
                model,
                settings,
            } => Ok(Box::new(super::gemini::GeminiClient::new(
                api_key.clone(),
                api_base.clone(),
                model.clone(),
                settings.clone(),
            )?)),

            #[cfg(feature = "openai")]
            Provider::OpenAI {
                api_key,
                api_base,
                model,
                settings,
            } => Ok(Box::new(super::openai::OpenAIClient::new(
                api_key.clone(),
                api_base.clone(),
                model.clone(),
                settings.clone(),
            )?)),

            #[cfg(not(feature = "openai"))]
            Provider::OpenAI { model, .. } => Err(AppError::Configuration(format!(
                "OpenAI provider requested for model '{}' but this build lacks the `openai` feature",
                model
            ))),
        }
    }

    /// Check if this provider is compiled into the binary
    pub fn is_available(&self) -> bool {
        match self {
            Provider::Gemini { .. } => true,
            Provider::OpenAI { .. } => cfg!(feature = "openai"),
        }
    }

    /// Get a human-readable name for this provider
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Gemini { .. } => "Gemini",
            Provider::OpenAI { .. } => "OpenAI",
        }
    }
}

/// Source of LLM clients for request handlers
///
/// Handlers ask for a fresh client per request so that configuration
/// reloads take effect without restarting the server.
#[async_trait]
pub trait LLMClientFactoryTrait: Send + Sync {
    /// Create a client for the currently configured provider
    async fn create_default(&self) -> Result<Box<dyn LLMClient>>;
}

/// Factory that builds clients from the live `softsell.toml` configuration
pub struct ConfigBasedLLMFactory {
    config_manager: Arc<SoftSellConfigManager>,
}

impl ConfigBasedLLMFactory {
    pub fn new(config_manager: Arc<SoftSellConfigManager>) -> Self {
        Self { config_manager }
    }

    /// Provider described by the current configuration
    pub fn current_provider(&self) -> Result<Provider> {
        Provider::from_config(&self.config_manager.config())
    }
}

#[async_trait]
impl LLMClientFactoryTrait for ConfigBasedLLMFactory {
    async fn create_default(&self) -> Result<Box<dyn LLMClient>> {
        self.current_provider()?.create_client()
    }
}

/// Factory that always hands out clients for one fixed provider
pub struct LLMClientFactory {
    default_provider: Provider,
}

impl LLMClientFactory {
    /// Create a new factory with the specified default provider
    pub fn new(default_provider: Provider) -> Self {
        Self { default_provider }
    }

    /// Get a reference to the default provider
    pub fn default_provider(&self) -> &Provider {
        &self.default_provider
    }
}

#[async_trait]
impl LLMClientFactoryTrait for LLMClientFactory {
    async fn create_default(&self) -> Result<Box<dyn LLMClient>> {
        self.default_provider.create_client()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gemini() -> Provider {
        Provider::Gemini {
            api_key: "test".to_string(),
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-1.5-flash".to_string(),
            settings: GenerationSettings::default(),
        }
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(gemini().name(), "Gemini");

        let openai = Provider::OpenAI {
            api_key: "".to_string(),
            api_base: "".to_string(),
            model: "".to_string(),
            settings: GenerationSettings::default(),
        };
        assert_eq!(openai.name(), "OpenAI");
        assert_eq!(openai.is_available(), cfg!(feature = "openai"));
    }

    #[test]
    fn test_gemini_is_always_available() {
        assert!(gemini().is_available());
        assert!(gemini().create_client().is_ok());
    }

    #[test]
    fn test_provider_from_config_requires_api_key() {
        let mut config = SoftSellConfig::default();
        config.assistant.api_key_env = Some("SOFTSELL_CLIENT_TEST_MISSING".to_string());

        let err = Provider::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("SOFTSELL_CLIENT_TEST_MISSING"));
    }

    #[test]
    fn test_provider_from_config_trims_api_base() {
        // SAFETY: Tests are run single-threaded for env var safety
        unsafe {
            std::env::set_var("SOFTSELL_CLIENT_TEST_KEY", "k");
        }
        let mut config = SoftSellConfig::default();
        config.assistant.api_key_env = Some("SOFTSELL_CLIENT_TEST_KEY".to_string());
        config.assistant.api_base = Some("http://localhost:9999/".to_string());
        config.assistant.temperature = 0.2;

        match Provider::from_config(&config).unwrap() {
            Provider::Gemini {
                api_key,
                api_base,
                model,
                settings,
            } => {
                assert_eq!(api_key, "k");
                assert_eq!(api_base, "http://localhost:9999");
                assert_eq!(model, "gemini-1.5-flash");
                assert_eq!(settings.temperature, 0.2);
            }
            other => panic!("Expected Gemini provider, got {}", other.name()),
        }
    }

    #[cfg(not(feature = "openai"))]
    #[test]
    fn test_openai_without_feature_returns_helpful_error() {
        let provider = Provider::OpenAI {
            api_key: "k".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            settings: GenerationSettings::default(),
        };

        // Box<dyn LLMClient> doesn't implement Debug
        let err = match provider.create_client() {
            Ok(_) => panic!("Expected error"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("openai"));
        assert!(err.contains("gpt-3.5-turbo"));
    }

    #[tokio::test]
    async fn test_fixed_factory_creates_default_client() {
        let factory = LLMClientFactory::new(gemini());
        assert_eq!(factory.default_provider().name(), "Gemini");

        let client = factory.create_default().await.unwrap();
        assert_eq!(client.model_name(), "gemini-1.5-flash");
    }
}
