//! Error kinds surfaced by the conversation core.

use thiserror::Error;

/// Errors returned by [`AnswerPipeline::generate`](crate::conversation::AnswerPipeline::generate)
/// and the export helpers.
///
/// Upstream failures render their whole `anyhow` context chain in the message.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The translation service failed in either direction.
    #[error("Translation failed: {0:#}")]
    Translation(anyhow::Error),

    /// The completion service failed.
    #[error("Completion failed: {0:#}")]
    Completion(anyhow::Error),

    /// The question was empty after trimming.
    #[error("Please enter a question")]
    EmptyInput,

    /// Export was requested while the transcript holds no turns.
    #[error("No conversation history yet")]
    EmptyTranscript,

    /// A language code or name outside the supported mapping.
    #[error(
        "Unsupported language: '{0}'\n\n\
         Run 'convo languages' to see all supported languages."
    )]
    UnsupportedLanguage(String),
}
