//! Quill CLI - Command line interface for the resolution engine

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use quill_storage::{EntityStore, MemoryStore};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{completions, exec, schema, serve};
use config::Config;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "quill")]
#[command(author, version, about = "Query and mutation resolver for authors, posts and comments")]
pub struct Cli {
    /// Config file path
    #[arg(short, long, global = true, env = "QUILL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start with an empty store instead of the demo data
    #[arg(long, global = true)]
    pub empty: bool,

    /// Output format: json, compact
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(config::default_config_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve JSON-RPC requests on stdin/stdout
    Serve,
    /// Execute a single request and print the response
    Exec(exec::ExecArgs),
    /// Print the schema
    Schema,
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the entity store
pub struct AppContext {
    pub store: Arc<MemoryStore>,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn new(cli: &Cli, config: &Config) -> anyhow::Result<Self> {
        let store = if cli.empty || !config.seed_demo_data {
            MemoryStore::new()
        } else {
            MemoryStore::seeded()
        };
        let counts = store.counts()?;
        tracing::debug!(
            "Store ready: {} authors, {} contents, {} annotations",
            counts.authors,
            counts.contents,
            counts.annotations
        );

        let format = cli
            .format
            .as_deref()
            .unwrap_or(&config.output_format)
            .into();

        Ok(Self {
            store: Arc::new(store),
            format,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // stdout carries responses, so logs go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting quill CLI");

    match &cli.command {
        Commands::Schema => return schema::run(),
        Commands::Completions(args) => return completions::run(args),
        _ => {}
    }

    let config = Config::load(&cli.config_path())?;
    let ctx = AppContext::new(&cli, &config)?;

    match &cli.command {
        Commands::Serve => serve::run(&ctx).await?,
        Commands::Exec(args) => exec::run(args, &ctx)?,
        Commands::Schema | Commands::Completions(_) => {}
    }

    Ok(())
}
