//! Mock implementations for testing.
//!
//! This module provides mock LLM clients and factories that can be used
//! across different test files without duplication.

#![allow(dead_code)]

use async_trait::async_trait;
use softsell::llm::{LLMClient, LLMClientFactoryTrait};
use softsell::types::{AppError, Result};
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing with configurable responses.
///
/// Every call is recorded as `(system, prompt)` so tests can check what the
/// assistant actually sent.
#[derive(Clone)]
pub struct MockLLMClient {
    response: String,
    should_fail: bool,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockLLMClient {
    /// Create a new mock client that returns the given response.
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            should_fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock client that always returns an error.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }

    /// Calls made so far, shared between clones.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_with_system("", prompt).await
    }

    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));
        if self.should_fail {
            return Err(AppError::LLM("Mock LLM failure".to_string()));
        }
        Ok(self.response.clone())
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Mock LLM factory for tests requiring complete isolation from external services.
pub struct MockLLMFactory {
    client: MockLLMClient,
}

impl MockLLMFactory {
    /// Create a new mock factory that hands out clones of the given client.
    pub fn new(client: MockLLMClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LLMClientFactoryTrait for MockLLMFactory {
    async fn create_default(&self) -> Result<Box<dyn LLMClient>> {
        Ok(Box::new(self.client.clone()))
    }
}

/// Factory that cannot produce a client, as when the API key is missing.
pub struct UnconfiguredLLMFactory;

#[async_trait]
impl LLMClientFactoryTrait for UnconfiguredLLMFactory {
    async fn create_default(&self) -> Result<Box<dyn LLMClient>> {
        Err(AppError::Configuration(
            "Environment variable 'GEMINI_API_KEY' referenced in config is not set".to_string(),
        ))
    }
}
