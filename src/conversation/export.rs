//! Read-only projections of a transcript for download.

use std::fmt;
use std::str::FromStr;

use super::transcript::Transcript;
use crate::error::ChatError;

/// Column header of the tabular export.
pub const CSV_HEADER: &str = "Conversation";

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// One turn-line per row, no header.
    Text,
    /// Single `Conversation` column, one turn-line per row.
    Csv,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
        }
    }

    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Text => "conversation_history.txt",
            Self::Csv => "conversation_history.csv",
        }
    }

    /// Renders `transcript` in this format.
    ///
    /// Exporting an empty transcript is an error rather than an empty file.
    pub fn render(self, transcript: &Transcript) -> Result<String, ChatError> {
        if transcript.is_empty() {
            return Err(ChatError::EmptyTranscript);
        }
        Ok(match self {
            Self::Text => to_text(transcript),
            Self::Csv => to_csv(transcript),
        })
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            other => Err(format!("Unknown export format: '{other}' (expected txt or csv)")),
        }
    }
}

/// Turn-lines joined by newlines.
pub fn to_text(transcript: &Transcript) -> String {
    transcript.as_lines().join("\n")
}

/// Header row followed by one quoted-as-needed row per turn-line.
pub fn to_csv(transcript: &Transcript) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for line in transcript.as_lines() {
        out.push_str(&csv_field(&line));
        out.push('\n');
    }
    out
}

/// Quotes a field when it contains a delimiter, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
