mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use convlog::config::ConvlogConfig;

#[derive(Parser)]
#[command(name = "convlog", version, about = "Summarize conversations into a JSON store and a Markdown log")]
struct Cli {
    /// Config file to use instead of ~/.convlog/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log a question and its answer (prompts for missing values)
    Log {
        #[arg(short, long)]
        question: Option<String>,
        #[arg(short, long)]
        answer: Option<String>,
    },
    /// Log a whole pasted conversation
    Transcript {
        /// Read the transcript from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Capture lines until the end word, then log them as one transcript
    Session {
        #[arg(long, default_value = "结束")]
        end_word: String,
    },
    /// List logged conversations, newest first
    List {
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
    /// Show one stored conversation as JSON
    Show { id: u64 },
    /// Show conversation statistics
    Stats {
        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render a stored conversation into the log again
    Render { id: u64 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConvlogConfig::load_from(path)?,
        None => ConvlogConfig::load()?,
    };

    // Log to stderr so stdout carries only command output.
    let filter = EnvFilter::try_new(&config.general.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Log { question, answer } => cli::log::log(&config, question, answer)?,
        Command::Transcript { file } => cli::log::transcript(&config, file.as_deref())?,
        Command::Session { end_word } => cli::log::session(&config, &end_word)?,
        Command::List { limit } => cli::list::list(&config, limit)?,
        Command::Show { id } => cli::show::show(&config, id)?,
        Command::Stats { json } => cli::stats::stats(&config, json)?,
        Command::Render { id } => cli::render::render(&config, id)?,
    }

    Ok(())
}
