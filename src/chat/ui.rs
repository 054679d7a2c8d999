//! Chat mode UI components.

use std::path::Path;

use super::command::EXAMPLE_QUESTIONS;
use super::session::SessionConfig;
use crate::conversation::{Speaker, Transcript, Turn};
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(config: &SessionConfig) {
    println!(
        "{} {} - Interactive Chat ({})",
        Style::header("convo"),
        Style::version(format!("v{VERSION}")),
        Style::code(config.language.name())
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_answer(answer: &str) {
    println!("{}", Style::header("Answer:"));
    println!("{answer}");
    println!();
}

fn styled_line(turn: &Turn) -> String {
    let label = format!("{}:", turn.speaker().label());
    let label = match turn.speaker() {
        Speaker::User => Style::user(label),
        Speaker::Assistant => Style::assistant(label),
    };
    format!("{label} {}", turn.text())
}

pub fn print_history(transcript: &Transcript) {
    if transcript.is_empty() {
        crate::info!("{}", Style::hint("No conversation history yet."));
        return;
    }

    println!("{}", Style::header("Conversation history"));
    for (question, answer) in transcript.exchanges() {
        println!("{}", styled_line(question));
        if let Some(answer) = answer {
            println!("{}", styled_line(answer));
        }
        println!();
    }
}

pub fn print_examples() {
    println!("{}", Style::header("Predefined questions"));
    for (number, question) in EXAMPLE_QUESTIONS.iter().enumerate() {
        println!("  {}  {question}", Style::value(number + 1));
    }
    println!(
        "{}",
        Style::hint("Ask one with /example <number>")
    );
    println!();
}

pub fn print_config(config: &SessionConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}           {}",
        Style::label("provider"),
        Style::value(&config.provider_name)
    );
    println!(
        "  {}              {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}  {}",
        Style::label("translation_model"),
        Style::value(&config.translation_model)
    );
    println!(
        "  {}           {} {}",
        Style::label("language"),
        Style::value(config.language.name()),
        Style::code(format!("({})", config.language.code()))
    );
    println!(
        "  {}           {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let rows: &[(&str, &str)] = &[
        ("/history", "Show the conversation history"),
        ("/clear", "Clear the conversation history"),
        ("/export <txt|csv> [path]", "Export the conversation history"),
        ("/lang <code|name>", "Switch the conversation language"),
        ("/examples", "List predefined questions"),
        ("/example <n>", "Ask predefined question n"),
        ("/config", "Show current configuration"),
        ("/help", "Show this help"),
        ("/quit", "Exit chat mode"),
    ];
    for (command, description) in rows {
        println!(
            "  {}  {}",
            Style::command(format!("{command:26}")),
            Style::secondary(description)
        );
    }
    println!();
}

pub fn print_success(message: &str) {
    println!("{} {message}", Style::success("✓"));
}

pub fn print_exported(path: &Path) {
    print_success(&format!(
        "Conversation history saved to {}",
        Style::secondary(path.display())
    ));
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
