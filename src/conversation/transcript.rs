//! The session transcript (turn store).

use std::fmt;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    /// Line prefix used in prompts, history display and exports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Assistant => "Assistant",
        }
    }
}

/// One utterance. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    speaker: Speaker,
    text: String,
}

impl Turn {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Speaker::Assistant, text)
    }

    pub const fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.speaker.label(), self.text)
    }
}

/// Ordered log of turns for one session.
///
/// After every completed exchange the turns alternate User/Assistant,
/// starting with User. `append` does not enforce this; `record_exchange`
/// is the write path that keeps it, and `is_paired` checks it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub const fn new() -> Self {
        Self { turns: Vec::new() }
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Appends a question and its answer, in that order.
    pub fn record_exchange(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.turns.reserve(2);
        self.turns.push(Turn::user(question));
        self.turns.push(Turn::assistant(answer));
    }

    /// Discards every turn.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Returns `true` if the turns form complete User/Assistant pairs.
    pub fn is_paired(&self) -> bool {
        self.turns.len() % 2 == 0
            && self.turns.chunks_exact(2).all(|pair| {
                pair[0].speaker == Speaker::User && pair[1].speaker == Speaker::Assistant
            })
    }

    /// Iterates over `(question, answer)` pairs.
    ///
    /// A trailing unpaired turn is yielded with `None` as its partner.
    pub fn exchanges(&self) -> impl Iterator<Item = (&Turn, Option<&Turn>)> {
        self.turns.chunks(2).map(|pair| (&pair[0], pair.get(1)))
    }

    /// Renders each turn as `"<Speaker>: <text>"`, in order.
    pub fn as_lines(&self) -> Vec<String> {
        self.turns.iter().map(ToString::to_string).collect()
    }
}
