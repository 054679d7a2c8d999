//! Provider listing command handler.

use anyhow::{Result, bail};

use crate::config::{ConfigFile, ConfigManager};
use crate::ui::Style;

/// Prints configured providers to stdout.
///
/// With `specific_provider`, shows the details of that provider only.
pub fn print_providers(specific_provider: Option<&str>) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default();

    if config.providers.is_empty() {
        println!("No providers configured.");
        println!("Add providers to ~/.config/convo/config.toml");
        return Ok(());
    }

    match specific_provider {
        Some(name) => print_provider_details(&config, name),
        None => {
            print_provider_list(&config);
            Ok(())
        }
    }
}

fn is_default(config: &ConfigFile, name: &str) -> bool {
    config.convo.provider.as_deref() == Some(name)
}

fn default_suffix(config: &ConfigFile, name: &str) -> String {
    if is_default(config, name) {
        format!(" {}", Style::default_marker())
    } else {
        String::new()
    }
}

fn print_provider_details(config: &ConfigFile, name: &str) -> Result<()> {
    let Some(provider) = config.providers.get(name) else {
        bail!("Provider '{name}' not found");
    };

    println!(
        "{} {}{}",
        Style::header("Provider:"),
        Style::value(name),
        default_suffix(config, name)
    );
    println!("  {} = {}", Style::label("endpoint"), provider.endpoint);
    if provider.requires_api_key() {
        let state = if provider.get_api_key().is_some() {
            "(set)"
        } else {
            "(not set)"
        };
        println!("  {}  = {}", Style::label("api_key"), state);
    }
    if provider.models.is_empty() {
        println!("  {}   = (none configured)", Style::label("models"));
    } else {
        println!("  {}:", Style::label("models"));
        for model in &provider.models {
            println!("    - {model}");
        }
    }
    Ok(())
}

fn print_provider_list(config: &ConfigFile) {
    println!("{}\n", Style::header("Configured providers:"));

    let mut names: Vec<&String> = config.providers.keys().collect();
    names.sort();

    for name in names {
        let provider = &config.providers[name];
        println!("  {}{}", Style::value(name), default_suffix(config, name));
        println!(
            "    {} {}",
            Style::label("endpoint:"),
            Style::secondary(&provider.endpoint)
        );
        if !provider.models.is_empty() {
            println!(
                "    {} {}",
                Style::label("models:"),
                provider.models.join(", ")
            );
        }
    }
}
