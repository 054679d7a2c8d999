use anyhow::Result;
use async_trait::async_trait;

use super::language::Language;
use super::prompt::build_system_prompt;
use crate::api::{ChatApi, Message};

/// Translates text into a destination language.
#[async_trait]
pub trait TranslationService: Send + Sync {
    async fn translate(&self, text: &str, target: Language) -> Result<String>;
}

/// Translation service that asks an OpenAI-compatible model to translate.
pub struct TranslationClient {
    api: ChatApi,
    model: String,
}

impl TranslationClient {
    pub const fn new(api: ChatApi, model: String) -> Self {
        Self { api, model }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TranslationService for TranslationClient {
    async fn translate(&self, text: &str, target: Language) -> Result<String> {
        let messages = [
            Message::system(build_system_prompt(target.name())),
            Message::user(text),
        ];
        self.api.chat(&self.model, &messages).await
    }
}
