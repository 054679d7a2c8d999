use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/clear", "Clear the conversation history"),
    ("/config", "Show current configuration"),
    ("/example", "Ask a predefined question by number"),
    ("/examples", "List predefined questions"),
    ("/export", "Export history: /export <txt|csv> [path]"),
    ("/help", "Show available commands"),
    ("/history", "Show the conversation history"),
    ("/lang", "Switch language: /lang <code|name>"),
    ("/quit", "Exit chat mode"),
];

/// Questions the user can ask without typing.
pub const EXAMPLE_QUESTIONS: &[&str] = &[
    "Tell me about the Taj Mahal.",
    "What is the capital of France?",
    "Explain the theory of relativity.",
    "What are the benefits of a healthy diet?",
    "How does a computer work?",
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Clear,
    Config,
    Example(Option<String>),
    Examples,
    Export {
        format: Option<String>,
        path: Option<String>,
    },
    Help,
    History,
    Lang(Option<String>),
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let (name, rest) = cmd
        .split_once(char::is_whitespace)
        .map_or((cmd, ""), |(name, rest)| (name, rest.trim()));
    let arg = (!rest.is_empty()).then(|| rest.to_string());

    let command = match name {
        "clear" => SlashCommand::Clear,
        "config" => SlashCommand::Config,
        "example" => SlashCommand::Example(arg),
        "examples" => SlashCommand::Examples,
        "export" => {
            let (format, path) = rest
                .split_once(char::is_whitespace)
                .map_or((rest, ""), |(format, path)| (format, path.trim()));
            SlashCommand::Export {
                format: (!format.is_empty()).then(|| format.to_string()),
                path: (!path.is_empty()).then(|| path.to_string()),
            }
        }
        "help" => SlashCommand::Help,
        "history" => SlashCommand::History,
        "lang" | "language" => SlashCommand::Lang(arg),
        "quit" | "exit" | "q" => SlashCommand::Quit,
        _ => SlashCommand::Unknown(cmd.split_whitespace().collect::<Vec<_>>().join(" ")),
    };

    Input::Command(command)
}

/// Looks up a predefined question by its 1-based menu number.
pub fn example_question(number: &str) -> Option<&'static str> {
    let index = number.trim().parse::<usize>().ok()?.checked_sub(1)?;
    EXAMPLE_QUESTIONS.get(index).copied()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn command(input: &str) -> SlashCommand {
        match parse_input(input) {
            Input::Command(cmd) => cmd,
            other => panic!("Expected Input::Command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_input(""), Input::Empty));
        assert!(matches!(parse_input("   "), Input::Empty));
    }

    #[test]
    fn test_parse_text_input() {
        match parse_input("  What is the capital of France?  ") {
            Input::Text(text) => assert_eq!(text, "What is the capital of France?"),
            _ => panic!("Expected Input::Text"),
        }
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(command("/clear"), SlashCommand::Clear);
        assert_eq!(command("/config"), SlashCommand::Config);
        assert_eq!(command("/examples"), SlashCommand::Examples);
        assert_eq!(command("/help"), SlashCommand::Help);
        assert_eq!(command("/history"), SlashCommand::History);
    }

    #[test]
    fn test_parse_quit_commands() {
        for input in ["/quit", "/exit", "/q"] {
            assert_eq!(command(input), SlashCommand::Quit);
        }
    }

    #[test]
    fn test_parse_lang_command() {
        assert_eq!(command("/lang es"), SlashCommand::Lang(Some("es".to_string())));
        assert_eq!(
            command("/language  Spanish "),
            SlashCommand::Lang(Some("Spanish".to_string()))
        );
        assert_eq!(command("/lang"), SlashCommand::Lang(None));
    }

    #[test]
    fn test_parse_example_command() {
        assert_eq!(
            command("/example 2"),
            SlashCommand::Example(Some("2".to_string()))
        );
        assert_eq!(command("/example"), SlashCommand::Example(None));
    }

    #[test]
    fn test_parse_export_command() {
        assert_eq!(
            command("/export csv /tmp/history.csv"),
            SlashCommand::Export {
                format: Some("csv".to_string()),
                path: Some("/tmp/history.csv".to_string()),
            }
        );
        assert_eq!(
            command("/export txt"),
            SlashCommand::Export {
                format: Some("txt".to_string()),
                path: None,
            }
        );
        assert_eq!(
            command("/export"),
            SlashCommand::Export {
                format: None,
                path: None,
            }
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            command("/unknown  arg"),
            SlashCommand::Unknown("unknown arg".to_string())
        );
    }

    #[test]
    fn test_example_question_lookup() {
        assert_eq!(example_question("1"), Some("Tell me about the Taj Mahal."));
        assert_eq!(example_question(" 5 "), Some("How does a computer work?"));
        assert_eq!(example_question("0"), None);
        assert_eq!(example_question("6"), None);
        assert_eq!(example_question("two"), None);
    }

    // SlashCommandCompleter tests

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter;
        assert!(completer.get_suggestions("hello").unwrap().is_empty());
    }

    #[test]
    fn test_completer_suggestions_for_slash() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), SLASH_COMMANDS.len());
    }

    #[test]
    fn test_completer_suggestions_filter_by_prefix() {
        let mut completer = SlashCommandCompleter;

        let suggestions = completer.get_suggestions("/ex").unwrap();
        assert_eq!(suggestions.len(), 3); // /example, /examples, /export

        let suggestions = completer.get_suggestions("/h").unwrap();
        assert_eq!(suggestions.len(), 2); // /help, /history

        let suggestions = completer.get_suggestions("/q").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/quit"));
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/history  Show the conversation history".to_string();
        let completion = completer.get_completion("/hi", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/history".to_string()));
    }

    #[test]
    fn test_completer_completion_none() {
        let mut completer = SlashCommandCompleter;
        assert!(completer.get_completion("/x", None).unwrap().is_none());
    }
}
