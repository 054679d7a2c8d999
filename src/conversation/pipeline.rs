//! One question→answer exchange.

use super::prompt::build_prompt;
use super::transcript::Transcript;
use crate::completion::CompletionService;
use crate::error::ChatError;
use crate::translation::{Language, TranslationService};

/// Orchestrates translation, prompt assembly and completion for a session.
///
/// The pipeline holds no conversation state of its own; the caller owns the
/// [`Transcript`] and lends it to [`generate`](Self::generate).
pub struct AnswerPipeline<C, T> {
    completer: C,
    translator: T,
}

impl<C, T> AnswerPipeline<C, T>
where
    C: CompletionService,
    T: TranslationService,
{
    pub const fn new(completer: C, translator: T) -> Self {
        Self {
            completer,
            translator,
        }
    }

    pub const fn completer(&self) -> &C {
        &self.completer
    }

    pub const fn translator(&self) -> &T {
        &self.translator
    }

    /// Answers `question` in `language`, recording the exchange on success.
    ///
    /// Non-English questions are translated to English before completion and
    /// the answer is translated back. The stored user turn is the question as
    /// the user typed it; the stored assistant turn is the returned answer.
    /// If any step fails, `transcript` is left untouched.
    pub async fn generate(
        &self,
        question: &str,
        language: Language,
        transcript: &mut Transcript,
    ) -> Result<String, ChatError> {
        if question.trim().is_empty() {
            return Err(ChatError::EmptyInput);
        }

        let working_question = if language.is_english() {
            question.to_string()
        } else {
            self.translator
                .translate(question, Language::English)
                .await
                .map_err(ChatError::Translation)?
        };

        let prompt = build_prompt(transcript, &working_question);

        let completion = self
            .completer
            .complete(&prompt)
            .await
            .map_err(ChatError::Completion)?;

        let answer = if language.is_english() {
            completion
        } else {
            self.translator
                .translate(&completion, language)
                .await
                .map_err(ChatError::Translation)?
        };

        transcript.record_exchange(question, answer.clone());
        Ok(answer)
    }
}
