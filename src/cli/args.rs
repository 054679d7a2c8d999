use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "convo")]
#[command(about = "Chat with an LLM in your own language")]
#[command(version)]
pub struct Args {
    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Provider, model and language overrides shared by `chat` and `ask`.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Conversation language (code or name, e.g., es, French)
    #[arg(short = 'l', long = "lang")]
    pub lang: Option<String>,

    /// Provider name (e.g., ollama, openrouter)
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat session (default)
    Chat {
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Ask a single question and print the answer
    Ask {
        /// The question (reads from stdin if not provided)
        question: Option<String>,

        #[command(flatten)]
        session: SessionArgs,
    },
    /// List supported languages
    Languages,
    /// List configured providers
    Providers {
        /// Show details for a specific provider
        provider: Option<String>,
    },
    /// Edit default provider, model and language
    Configure,
}
