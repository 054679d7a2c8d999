//! The language-model completion service.

use anyhow::Result;
use async_trait::async_trait;

use crate::api::{ChatApi, Message};

/// Turns a flattened conversation prompt into the model's reply.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Completion service backed by an OpenAI-compatible endpoint.
///
/// The prompt is sent as a single user message; the model sees no
/// structured message list, only the flattened transcript.
pub struct CompletionClient {
    api: ChatApi,
    model: String,
}

impl CompletionClient {
    pub const fn new(api: ChatApi, model: String) -> Self {
        Self { api, model }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionService for CompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.api.chat(&self.model, &[Message::user(prompt)]).await
    }
}
