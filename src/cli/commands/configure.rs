//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{ConfigFile, ConfigManager, DefaultsConfig};
use crate::translation::Language;
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command to edit default settings.
///
/// Lets the user pick the default provider, model and conversation language.
pub fn run_configure() -> Result<()> {
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default();

    if config.providers.is_empty() {
        bail!(
            "No providers configured.\n\n\
             Add a [providers.<name>] section to {} first.",
            manager.config_path().display()
        );
    }

    print_current_defaults(&config);

    let mut provider_names: Vec<String> = config.providers.keys().cloned().collect();
    provider_names.sort();

    let provider = select_provider(&provider_names, config.convo.provider.as_deref())?;

    let available_models: Vec<String> = config
        .providers
        .get(&provider)
        .map(|p| p.models.clone())
        .unwrap_or_default();

    let model = select_model(&available_models, config.convo.model.as_deref())?;

    let current_language = config
        .convo
        .language
        .as_deref()
        .and_then(|l| l.parse::<Language>().ok())
        .unwrap_or_default();
    let language = select_language(current_language)?;

    config.convo = DefaultsConfig {
        provider: Some(provider),
        model: Some(model),
        translation_model: config.convo.translation_model.take(),
        language: Some(language.code().to_string()),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    let show = |value: Option<&str>| value.map_or_else(|| Style::secondary("(not set)"), Style::value);

    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}  {}",
        Style::label("provider"),
        show(config.convo.provider.as_deref())
    );
    println!(
        "  {}     {}",
        Style::label("model"),
        show(config.convo.model.as_deref())
    );
    println!(
        "  {}  {}",
        Style::label("language"),
        show(config.convo.language.as_deref())
    );
    println!();
}

fn select_provider(providers: &[String], default: Option<&str>) -> Result<String> {
    let default_index = default
        .and_then(|d| providers.iter().position(|p| p == d))
        .unwrap_or(0);

    let selection = Select::new("Default provider:", providers.to_vec())
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}

fn select_model(available_models: &[String], default: Option<&str>) -> Result<String> {
    if available_models.is_empty() {
        let mut prompt = Text::new("Default model:").with_help_message("Enter the model name");

        if let Some(d) = default {
            prompt = prompt.with_default(d);
        }

        let model = prompt.prompt()?;

        if model.trim().is_empty() {
            bail!("Model name cannot be empty");
        }

        Ok(model.trim().to_string())
    } else {
        let default_index = default
            .and_then(|d| available_models.iter().position(|m| m == d))
            .unwrap_or(0);

        let selection = Select::new("Default model:", available_models.to_vec())
            .with_starting_cursor(default_index)
            .prompt()?;

        Ok(selection)
    }
}

fn select_language(current: Language) -> Result<Language> {
    let options: Vec<String> = Language::ALL
        .iter()
        .map(|lang| format!("{} - {}", lang.name(), lang.code()))
        .collect();

    let default_index = Language::ALL
        .iter()
        .position(|lang| *lang == current)
        .unwrap_or(0);

    let selection = Select::new("Default language:", options)
        .with_starting_cursor(default_index)
        .raw_prompt()?;

    Ok(Language::ALL[selection.index])
}
