#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults (English)

use std::collections::HashMap;
use convo_cli::config::{
    ConfigFile, DefaultsConfig, ProviderConfig, ResolveOptions, resolve_config,
};
use convo_cli::translation::Language;

fn provider(endpoint: &str, model: &str) -> ProviderConfig {
    ProviderConfig {
        endpoint: endpoint.to_string(),
        api_key: Some("test_key".to_string()),
        api_key_env: None,
        models: vec![model.to_string()],
    }
}

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        convo: DefaultsConfig {
            provider: Some("test_provider".to_string()),
            model: Some("config_model".to_string()),
            translation_model: None,
            language: Some("fr".to_string()),
        },
        providers: HashMap::from([
            (
                "test_provider".to_string(),
                provider("http://test.local", "config_model"),
            ),
            (
                "other_provider".to_string(),
                provider("http://other.local", "other_model"),
            ),
        ]),
    }
}

#[test]
fn test_cli_language_overrides_config_language() {
    let options = ResolveOptions {
        language: Some("es".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.language, Language::Spanish);
}

#[test]
fn test_config_language_used_when_cli_not_specified() {
    let resolved =
        resolve_config(&ResolveOptions::default(), &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.language, Language::French);
}

#[test]
fn test_builtin_language_default_is_english() {
    let mut config = make_config_with_defaults();
    config.convo.language = None;

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.language, Language::English);
}

#[test]
fn test_cli_model_overrides_config_model() {
    let options = ResolveOptions {
        model: Some("cli_model".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.model, "cli_model");
    assert_eq!(resolved.translation_model, "cli_model");
}

#[test]
fn test_cli_provider_overrides_config_provider() {
    let options = ResolveOptions {
        provider: Some("other_provider".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.provider_name, "other_provider");
    assert_eq!(resolved.endpoint, "http://other.local");
    assert_eq!(resolved.api_key.as_deref(), Some("test_key"));
}

#[test]
fn test_all_cli_options_override_config() {
    let options = ResolveOptions {
        language: Some("zh-cn".to_string()),
        provider: Some("other_provider".to_string()),
        model: Some("other_model".to_string()),
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.language, Language::Chinese);
    assert_eq!(resolved.provider_name, "other_provider");
    assert_eq!(resolved.model, "other_model");
}
