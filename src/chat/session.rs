use anyhow::{Result, bail};
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::path::PathBuf;

use super::command::{Input, SlashCommand, SlashCommandCompleter, example_question, parse_input};
use super::ui;
use crate::completion::CompletionService;
use crate::config::ResolvedConfig;
use crate::conversation::{AnswerPipeline, ExportFormat, Transcript};
use crate::error::ChatError;
use crate::fs::atomic_write;
use crate::translation::{Language, TranslationService};
use crate::ui::{Spinner, Style, is_prompt_cancelled};

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub provider_name: String,
    pub endpoint: String,
    pub model: String,
    pub translation_model: String,
    /// The language the user converses in.
    pub language: Language,
}

impl From<ResolvedConfig> for SessionConfig {
    fn from(resolved: ResolvedConfig) -> Self {
        Self {
            provider_name: resolved.provider_name,
            endpoint: resolved.endpoint,
            model: resolved.model,
            translation_model: resolved.translation_model,
            language: resolved.language,
        }
    }
}

/// An interactive chat session.
///
/// The session exclusively owns its transcript; it lives as long as the
/// REPL and is never written to disk except by an explicit export.
pub struct ChatSession<C, T> {
    config: SessionConfig,
    pipeline: AnswerPipeline<C, T>,
    transcript: Transcript,
}

impl<C, T> ChatSession<C, T>
where
    C: CompletionService,
    T: TranslationService,
{
    pub const fn new(config: SessionConfig, pipeline: AnswerPipeline<C, T>) -> Self {
        Self {
            config,
            pipeline,
            transcript: Transcript::new(),
        }
    }

    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub const fn language(&self) -> Language {
        self.config.language
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.config);

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Ask a question, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.ask(&text).await;
                    }
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!();
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Runs one command. Returns `false` when the session should end.
    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Clear => {
                self.transcript.clear();
                ui::print_success("Conversation history cleared");
            }
            SlashCommand::Config => ui::print_config(&self.config),
            SlashCommand::Example(number) => self.ask_example(number.as_deref()).await,
            SlashCommand::Examples => ui::print_examples(),
            SlashCommand::Export { format, path } => {
                match self.export(format.as_deref(), path.as_deref()) {
                    Ok(written) => ui::print_exported(&written),
                    Err(e) => match e.downcast_ref::<ChatError>() {
                        Some(ChatError::EmptyTranscript) => {
                            crate::info!("{}", Style::hint("No conversation history yet."));
                        }
                        _ => ui::print_error(&format!("{e:#}")),
                    },
                }
            }
            SlashCommand::Help => ui::print_help(),
            SlashCommand::History => ui::print_history(&self.transcript),
            SlashCommand::Lang(value) => self.set_language(value.as_deref()),
            SlashCommand::Quit => return false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        true
    }

    fn set_language(&mut self, value: Option<&str>) {
        let Some(value) = value else {
            ui::print_error("Usage: /lang <code|name>");
            return;
        };

        match value.parse::<Language>() {
            Ok(language) => {
                self.config.language = language;
                ui::print_success(&format!(
                    "Language set to {} {}",
                    Style::value(language.name()),
                    Style::code(format!("({})", language.code()))
                ));
            }
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    async fn ask_example(&mut self, number: Option<&str>) {
        let Some(question) = number.and_then(example_question) else {
            ui::print_error("Usage: /example <number> (see /examples)");
            return;
        };

        println!("{} {question}", Style::user("User:"));
        self.ask(question).await;
    }

    /// Runs one exchange and prints the answer or the error.
    ///
    /// Failures are reported and the session continues; the transcript is
    /// unchanged by a failed exchange.
    async fn ask(&mut self, question: &str) {
        match self.generate(question).await {
            Ok(answer) => ui::print_answer(&answer),
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    async fn generate(&mut self, question: &str) -> Result<String, ChatError> {
        let spinner = Spinner::new("Thinking...");
        let result = self
            .pipeline
            .generate(question, self.config.language, &mut self.transcript)
            .await;
        spinner.stop();
        result
    }

    /// Writes the transcript in `format` to `path` (or the default file name).
    fn export(&self, format: Option<&str>, path: Option<&str>) -> Result<PathBuf> {
        let Some(format) = format else {
            bail!("Usage: /export <txt|csv> [path]");
        };
        let format = format.parse::<ExportFormat>().map_err(anyhow::Error::msg)?;

        let content = format.render(&self.transcript)?;
        let path = path.map_or_else(|| PathBuf::from(format.default_file_name()), PathBuf::from);

        atomic_write(&path, &content)?;
        Ok(path)
    }
}
