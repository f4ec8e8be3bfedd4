//! REE Explorer CLI
//!
//! Main entry point for the `ree` command-line tool. Browses the rare earth
//! datasets and answers free-text questions with local TF-IDF retrieval.

mod commands;

use clap::{Parser, Subcommand};
use commands::{
    AlloysCommand, AskCommand, ElementsCommand, MineralsCommand, StatsCommand, SupplyCommand,
};
use ree_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// REE Explorer CLI - rare earth data browser with local Q&A
#[derive(Parser, Debug)]
#[command(name = "ree")]
#[command(about = "Rare earth element data browser with local TF-IDF Q&A", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the data directory (CSV tables plus documents/)
    #[arg(short, long, global = true, env = "REE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "REE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a free-text question answered from the local corpus
    Ask(AskCommand),

    /// Browse and filter the elements table
    Elements(ElementsCommand),

    /// Browse and filter the alloys table
    Alloys(AlloysCommand),

    /// List mineral deposit occurrences
    Minerals(MineralsCommand),

    /// Show production by element and country
    Supply(SupplyCommand),

    /// Show dataset and corpus statistics
    Stats(StatsCommand),
}

fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from environment, then apply CLI overrides
    let config = AppConfig::load()?.with_overrides(
        cli.data_dir,
        cli.config,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    )?;

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("REE Explorer starting");
    tracing::debug!("Data directory: {:?}", config.data_dir);

    // Emit command span
    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Elements(_) => "elements",
        Commands::Alloys(_) => "alloys",
        Commands::Minerals(_) => "minerals",
        Commands::Supply(_) => "supply",
        Commands::Stats(_) => "stats",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config),
        Commands::Elements(cmd) => cmd.execute(&config),
        Commands::Alloys(cmd) => cmd.execute(&config),
        Commands::Minerals(cmd) => cmd.execute(&config),
        Commands::Supply(cmd) => cmd.execute(&config),
        Commands::Stats(cmd) => cmd.execute(&config),
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
