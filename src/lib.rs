//! # convo - Multilingual LLM Chat
//!
//! `convo` is a command-line chat front-end for OpenAI-compatible language
//! model endpoints. Questions can be asked in any supported language: they
//! are translated to English for the model and the answer is translated
//! back. The session keeps a transcript that is sent as context with every
//! question and can be exported as plain text or CSV.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive chat
//! convo
//!
//! # Chat in Spanish
//! convo chat --lang es
//!
//! # One question, answer on stdout
//! convo ask "What is the capital of France?"
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/convo/config.toml`:
//!
//! ```toml
//! [convo]
//! provider = "ollama"
//! model = "gemma3:12b"
//! language = "en"
//!
//! [providers.ollama]
//! endpoint = "http://localhost:11434"
//! models = ["gemma3:12b", "llama3.2"]
//! ```

/// OpenAI-compatible chat completion wire format and HTTP client.
pub mod api;

/// Interactive chat mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// The language-model completion service.
pub mod completion;

/// Configuration file management and provider settings.
pub mod config;

/// Transcript, prompt assembly, answer pipeline and export.
pub mod conversation;

/// Error kinds of the conversation core.
pub mod error;

/// File system utilities.
pub mod fs;

/// Question input from arguments and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation service and supported languages.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;

pub use error::ChatError;
