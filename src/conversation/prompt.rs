//! Flattening a transcript into a single completion prompt.

use super::transcript::Transcript;

/// Marker that tells the model it is its turn to speak.
pub const ANSWER_MARKER: &str = "AI:";

/// Builds the prompt sent to the completion service.
///
/// Every prior turn is included, in order, followed by the new question and
/// the answer marker. There is no truncation of long histories.
pub fn build_prompt(transcript: &Transcript, question: &str) -> String {
    let mut lines = transcript.as_lines();
    lines.push(format!("User: {question}"));
    lines.push(ANSWER_MARKER.to_string());
    lines.join("\n")
}
