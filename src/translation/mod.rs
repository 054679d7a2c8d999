mod client;
mod language;
mod prompt;

pub use client::{TranslationClient, TranslationService};
pub use language::{Language, print_languages};
