//! Supported conversation languages.

use std::fmt;
use std::str::FromStr;

use crate::error::ChatError;
use crate::ui::Style;

/// A language the user can converse in.
///
/// English is the working language of the completion service; every other
/// variant is translated to English on the way in and back on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Chinese,
    Hindi,
}

impl Language {
    /// All supported languages, in menu order.
    pub const ALL: [Self; 6] = [
        Self::English,
        Self::Spanish,
        Self::French,
        Self::German,
        Self::Chinese,
        Self::Hindi,
    ];

    /// The code handed to the translation service.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
            Self::Chinese => "zh-cn",
            Self::Hindi => "hi",
        }
    }

    /// Human-readable name shown in menus.
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::Chinese => "Chinese",
            Self::Hindi => "Hindi",
        }
    }

    pub const fn is_english(self) -> bool {
        matches!(self, Self::English)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ChatError;

    /// Accepts either a code (`es`, `zh-cn`) or a display name (`Spanish`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        Self::ALL
            .into_iter()
            .find(|lang| {
                lang.code().eq_ignore_ascii_case(input) || lang.name().eq_ignore_ascii_case(input)
            })
            .ok_or_else(|| ChatError::UnsupportedLanguage(input.to_string()))
    }
}

/// Prints the language mapping to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages"));
    for lang in Language::ALL {
        println!(
            "  {:7} {}",
            Style::code(lang.code()),
            Style::secondary(lang.name())
        );
    }
}
