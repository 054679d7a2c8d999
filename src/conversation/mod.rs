//! Conversation core: the transcript, prompt assembly, the answer pipeline
//! and transcript export.

/// Transcript export as plain text or CSV.
pub mod export;
mod pipeline;
mod prompt;
mod transcript;

pub use export::ExportFormat;
pub use pipeline::AnswerPipeline;
pub use prompt::{ANSWER_MARKER, build_prompt};
pub use transcript::{Speaker, Transcript, Turn};
