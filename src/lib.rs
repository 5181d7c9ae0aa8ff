//! # SoftSell - Software License Resale Platform
//!
//! Server side of the SoftSell marketing site: a small Axum application that
//! serves the Leptos frontend and answers the support chat widget by
//! proxying visitor questions to a hosted LLM. The API key never leaves the
//! server.
//!
//! ## Overview
//!
//! SoftSell can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `softsell-server` binary
//! 2. **As a library** - Mount [`api::routes::create_app`] in your own binary
//!    or drive the [`SupportAssistant`] directly
//!
//! ### Basic Example
//!
//! ```rust,ignore
//! use softsell::{GenerationSettings, Provider, SupportAssistant};
//! use softsell::llm::assistant::{DEFAULT_FALLBACK_REPLY, DEFAULT_SYSTEM_PROMPT};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Provider::Gemini {
//!         api_key: std::env::var("GEMINI_API_KEY")?,
//!         api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
//!         model: "gemini-1.5-flash".to_string(),
//!         settings: GenerationSettings::default(),
//!     };
//!
//!     let assistant = SupportAssistant::new(
//!         provider.create_client()?,
//!         DEFAULT_SYSTEM_PROMPT,
//!         DEFAULT_FALLBACK_REPLY,
//!     );
//!     let reply = assistant.reply("What is the refund policy?").await;
//!     println!("{}", reply.text);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Configuration-Driven Setup
//!
//! ```rust,ignore
//! use softsell::{AppState, ConfigBasedLLMFactory, SoftSellConfigManager};
//! use std::sync::Arc;
//!
//! let config_manager = Arc::new(SoftSellConfigManager::new("softsell.toml")?);
//! let state = AppState {
//!     llm_factory: Arc::new(ConfigBasedLLMFactory::new(config_manager.clone())),
//!     config_manager,
//! };
//! let app = softsell::api::routes::create_app(state);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `openai` | OpenAI API support |
//! | `ui` | Embed and serve the Leptos frontend from `ui/dist` |
//! | `swagger-ui` | Interactive API docs at `/swagger-ui/` |
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`cli`] - Command line interface
//! - [`llm`] - LLM client implementations and the support assistant
//! - [`types`] - Common types and error handling
//! - [`utils`] - `softsell.toml` configuration with hot reload

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Command line interface and scaffolding.
pub mod cli;
/// LLM provider clients and abstractions.
pub mod llm;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use llm::{
    AssistantReply, ConfigBasedLLMFactory, GenerationSettings, LLMClient, LLMClientFactory,
    LLMClientFactoryTrait, Provider, SupportAssistant,
};
pub use types::{AppError, Result};
pub use utils::toml_config::{SoftSellConfig, SoftSellConfigManager};

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// TOML configuration with hot-reload support
    pub config_manager: Arc<SoftSellConfigManager>,
    /// Source of LLM clients for the chat handler
    pub llm_factory: Arc<dyn LLMClientFactoryTrait>,
}
