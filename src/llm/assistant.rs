//! Customer support assistant behind the chat widget
//!
//! Wraps an [`LLMClient`] with the fixed support instruction and guarantees
//! that a visitor always gets a reply: every provider failure is logged and
//! replaced with the configured apology.

use crate::llm::client::LLMClient;
use crate::utils::toml_config::AssistantConfig;
use tracing::{debug, warn};

/// Instruction sent ahead of every visitor question
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful customer support assistant for a platform where users can buy and sell licenses.
Provide clear, concise, and accurate answers. If you don't know the answer, say so and offer to escalate the query.
Example questions include: \"How do I sell my license?\", \"What is the refund policy?\", \"How do I contact support?\"";

/// Reply used whenever the provider cannot answer
pub const DEFAULT_FALLBACK_REPLY: &str =
    "Sorry, something went wrong. Please try again or contact support.";

/// Outcome of one visitor question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub text: String,
    /// True when `text` is the fallback apology
    pub is_fallback: bool,
}

impl AssistantReply {
    pub fn answer(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_fallback: false,
        }
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_fallback: true,
        }
    }
}

pub struct SupportAssistant {
    client: Box<dyn LLMClient>,
    system_prompt: String,
    fallback_reply: String,
}

impl SupportAssistant {
    pub fn new(
        client: Box<dyn LLMClient>,
        system_prompt: impl Into<String>,
        fallback_reply: impl Into<String>,
    ) -> Self {
        Self {
            client,
            system_prompt: system_prompt.into(),
            fallback_reply: fallback_reply.into(),
        }
    }

    pub fn from_config(client: Box<dyn LLMClient>, config: &AssistantConfig) -> Self {
        Self::new(client, &config.system_prompt, &config.fallback_reply)
    }

    /// Answer one visitor message. Never fails.
    pub async fn reply(&self, message: &str) -> AssistantReply {
        debug!(model = self.client.model_name(), "Forwarding chat message");

        match self
            .client
            .generate_with_system(&self.system_prompt, message)
            .await
        {
            Ok(text) => AssistantReply::answer(text.trim()),
            Err(e) => {
                warn!(model = self.client.model_name(), error = %e, "Assistant call failed, sending fallback reply");
                AssistantReply::fallback(&self.fallback_reply)
            }
        }
    }
}
