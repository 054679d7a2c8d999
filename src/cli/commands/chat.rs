use anyhow::Result;

use crate::api::ChatApi;
use crate::chat::{ChatSession, SessionConfig};
use crate::cli::SessionArgs;
use crate::completion::CompletionClient;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::conversation::AnswerPipeline;
use crate::translation::TranslationClient;

pub async fn run_chat(args: SessionArgs) -> Result<()> {
    let resolved = load_resolved_config(&args)?;
    let pipeline = build_pipeline(&resolved);
    let mut session = ChatSession::new(SessionConfig::from(resolved), pipeline);
    session.run().await
}

/// Merges CLI overrides with the config file.
pub fn load_resolved_config(args: &SessionArgs) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default();

    let options = ResolveOptions {
        language: args.lang.clone(),
        provider: args.provider.clone(),
        model: args.model.clone(),
    };

    resolve_config(&options, &config_file)
}

/// Connects the completion and translation clients to the resolved provider.
pub fn build_pipeline(
    resolved: &ResolvedConfig,
) -> AnswerPipeline<CompletionClient, TranslationClient> {
    let api = ChatApi::new(resolved.endpoint.clone(), resolved.api_key.clone());
    AnswerPipeline::new(
        CompletionClient::new(api.clone(), resolved.model.clone()),
        TranslationClient::new(api, resolved.translation_model.clone()),
    )
}
