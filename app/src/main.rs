#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use assistant_config::Config;
use clap::{Parser, Subcommand};
use command::{
    BotInput, BotStrategy, CommandStrategy, FibStrategy, InfoStrategy, InitStrategy, SumStrategy,
    VersionStrategy,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "assistant")]
#[command(about = "Contact book assistant with a few number utilities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the contact assistant
    Bot {
        /// Command line to run instead of prompting (repeatable)
        #[arg(short = 'c', long = "command")]
        commands: Vec<String>,
    },
    /// Print the n-th Fibonacci number
    Fib {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Sum the whitespace-delimited numbers in a text (stdin when omitted)
    Sum { text: Option<String> },
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info,
    /// Show version
    Version,
}

impl Commands {
    /// Only the assistant session reads the config file up front; `info`
    /// loads it itself, everything else runs on defaults.
    const fn reads_config(&self) -> bool {
        matches!(self, Self::Bot { .. })
    }
}

/// Log to stderr so stdout carries only command responses.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = if cli.command.reads_config() {
        Config::load()?
    } else {
        Config::default()
    };
    init_logging(&config)?;

    match cli.command {
        Commands::Bot { commands } => {
            BotStrategy
                .execute(BotInput {
                    commands,
                    assistant: config.assistant,
                })
                .await?;
        }
        Commands::Fib { n } => FibStrategy.execute(n).await?,
        Commands::Sum { text } => SumStrategy.execute(text).await?,
        Commands::Init => InitStrategy.execute(()).await?,
        Commands::Info => InfoStrategy.execute(()).await?,
        Commands::Version => VersionStrategy.execute(()).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Cli> {
        Ok(Cli::try_parse_from(std::iter::once("assistant").chain(args.iter().copied()))?)
    }

    #[test]
    fn test_only_bot_reads_config() -> anyhow::Result<()> {
        assert!(parse(&["bot"])?.command.reads_config());
        assert!(parse(&["bot", "-c", "hello"])?.command.reads_config());

        for args in [
            &["version"][..],
            &["fib", "10"][..],
            &["sum", " 1 2 "][..],
            &["init"][..],
            &["info"][..],
        ] {
            assert!(!parse(args)?.command.reads_config(), "{args:?}");
        }
        Ok(())
    }

    #[test]
    fn test_fib_accepts_negative_index() -> anyhow::Result<()> {
        let cli = parse(&["fib", "-5"])?;
        assert!(matches!(cli.command, Commands::Fib { n: -5 }));
        Ok(())
    }
}
