use anyhow::Result;
use clap::Parser;

use convo_cli::cli::commands::{ask, chat, configure, providers};
use convo_cli::cli::{Args, Command, SessionArgs};
use convo_cli::output::{self, OutputConfig};
use convo_cli::translation::print_languages;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Providers { provider }) => {
            providers::print_providers(provider.as_deref())?;
        }
        Some(Command::Configure) => {
            configure::run_configure()?;
        }
        Some(Command::Ask { question, session }) => {
            ask::run_ask(question.as_deref(), session).await?;
        }
        Some(Command::Chat { session }) => {
            chat::run_chat(session).await?;
        }
        None => {
            chat::run_chat(SessionArgs::default()).await?;
        }
    }

    Ok(())
}
