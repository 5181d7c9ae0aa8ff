//! LLM Provider Clients and Abstractions
//!
//! This module provides a unified interface for the hosted model the support
//! chat talks to. Provider-specific request shapes stay behind the
//! [`LLMClient`] trait so the rest of the server only ever sees text in and
//! text out.
//!
//! # Architecture
//!
//! - [`LLMClient`] - The core trait that all providers implement
//! - [`Provider`] - Runtime selection of a provider and its settings
//! - [`ConfigBasedLLMFactory`] - Creates clients from the live `softsell.toml`
//! - [`SupportAssistant`] - Adds the support instruction and the fallback reply
//!
//! # Supported Providers
//!
//! - Gemini - always compiled in
//! - `openai` feature - OpenAI chat completions and compatible APIs
//!
//! # Example
//!
//! ```ignore
//! use softsell::llm::{ConfigBasedLLMFactory, LLMClientFactoryTrait, SupportAssistant};
//!
//! let factory = ConfigBasedLLMFactory::new(config_manager.clone());
//! let client = factory.create_default().await?;
//! let assistant = SupportAssistant::from_config(client, &config_manager.config().assistant);
//!
//! let reply = assistant.reply("How do I sell my license?").await;
//! println!("{}", reply.text);
//! ```

/// Support assistant wrapper with fallback handling.
pub mod assistant;
/// Core LLM client trait, providers and factories.
pub mod client;
/// Google Gemini client.
pub mod gemini;

#[cfg(feature = "openai")]
pub mod openai;

pub use assistant::{AssistantReply, SupportAssistant};
pub use client::{
    ConfigBasedLLMFactory, GenerationSettings, LLMClient, LLMClientFactory,
    LLMClientFactoryTrait, Provider,
};
