//! DigiBot CLI
//!
//! Terminal front end for the DigiBot digital literacy assistant.
//! Answers come from the remote model when configured, otherwise from the
//! built-in FAQ.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AskCommand, ChatCommand, FaqCommand};
use digibot_core::{config::AppConfig, logging, logging::LogFormat, AppResult};
use std::path::PathBuf;

/// DigiBot - learn WhatsApp, Paytm, Google Maps and more
#[derive(Parser, Debug)]
#[command(name = "digibot")]
#[command(about = "Digital literacy assistant with offline FAQ fallback", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, env = "DIGIBOT_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log format (pretty, json)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Remote provider (openai, none)
    #[arg(short, long, global = true)]
    provider: Option<String>,

    /// Model identifier
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// FAQ corpus file (YAML); defaults to the built-in corpus
    #[arg(long, global = true)]
    faq_file: Option<PathBuf>,

    /// Answer from the FAQ only, never call the remote provider
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a single question
    Ask(AskCommand),

    /// Start an interactive chat session
    Chat(ChatCommand),

    /// Inspect the FAQ corpus and the matcher
    Faq(FaqCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from file and environment
    let config = AppConfig::load_from(cli.config.as_deref())?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.provider,
        cli.model,
        cli.faq_file,
        cli.log_level,
        cli.log_format,
        cli.verbose,
        cli.no_color,
        cli.offline,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color, config.log_format)?;

    tracing::info!("DigiBot starting");
    tracing::debug!("Config file: {:?}", config.config_file);
    tracing::debug!("Provider: {}", config.provider);
    tracing::debug!("Model: {}", config.model);
    tracing::debug!("API key set: {}", config.api_key.is_some());

    config.validate()?;

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Chat(_) => "chat",
        Commands::Faq(_) => "faq",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Chat(cmd) => cmd.execute(&config).await,
        Commands::Faq(cmd) => cmd.execute(&config),
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
