//! One-shot question command handler.

use anyhow::Result;

use super::chat::{build_pipeline, load_resolved_config};
use crate::cli::SessionArgs;
use crate::conversation::Transcript;
use crate::error::ChatError;
use crate::input::InputReader;
use crate::ui::Spinner;

/// Answers one question and prints the answer to stdout.
///
/// The transcript lives only for this exchange.
pub async fn run_ask(question: Option<&str>, args: SessionArgs) -> Result<()> {
    let question = InputReader::read(question)?;
    if question.is_empty() {
        return Err(ChatError::EmptyInput.into());
    }

    let resolved = load_resolved_config(&args)?;
    let language = resolved.language;
    let pipeline = build_pipeline(&resolved);
    let mut transcript = Transcript::new();

    let spinner = Spinner::new("Thinking...");
    let result = pipeline
        .generate(&question, language, &mut transcript)
        .await;
    spinner.stop();

    println!("{}", result?);
    Ok(())
}
