//! Gridrank main entry point
//!
//! This is the command-line interface for the gridrank stat leaderboard
//! service.

use clap::Parser;
use gridrank::config::{load_config_with_hash, Config};
use gridrank::scrape::{build_http_client, scrape_leaderboard};
use gridrank::server::{AppContext, Server};
use gridrank::Registry;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Gridrank: ranked stat leaderboards from hosted HTML tables
///
/// Gridrank scrapes loosely-structured stat pages, extracts player
/// records, and serves size-bounded ranked leaderboards over a small
/// JSON query API.
#[derive(Parser, Debug)]
#[command(name = "gridrank")]
#[command(version)]
#[command(about = "Ranked stat leaderboards from hosted HTML tables", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (builtin catalog when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Override the listen address from config
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,

    /// List the registered stat categories and exit
    #[arg(long, conflicts_with = "probe")]
    list_categories: bool,

    /// Scrape one stat type, print its leaderboard, and exit
    #[arg(long, value_name = "STAT_TYPE", conflicts_with = "list_categories")]
    probe: Option<String>,

    /// Result limit for --probe
    #[arg(short = 'n', long, value_name = "LIMIT", requires = "probe")]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("No configuration file given, using builtin catalog");
            Config::default()
        }
    };

    // Handle different modes
    if cli.list_categories {
        handle_list_categories(&config)?;
    } else if let Some(stat_type) = &cli.probe {
        handle_probe(&config, stat_type, cli.limit).await?;
    } else {
        handle_serve(config, cli.bind).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("gridrank=info,warn"),
            1 => EnvFilter::new("gridrank=debug,info"),
            2 => EnvFilter::new("gridrank=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles --list-categories: prints the catalog and exits
fn handle_list_categories(config: &Config) -> anyhow::Result<()> {
    let registry = Registry::from_entries(&config.categories);

    println!("=== Gridrank Stat Categories ===\n");

    println!("Registered categories ({}):", registry.len());
    for stat_type in registry.stat_types() {
        if let Some(spec) = registry.resolve(stat_type) {
            println!("  - {} (column {})", stat_type, spec.column);
            println!("    {}", spec.url);
        }
    }

    println!("\nServer:");
    println!("  Bind address: {}", config.server.bind);
    println!("  Default limit: {}", config.server.default_limit);
    println!("  Cache max-age: {}s", config.server.cache_max_age);

    Ok(())
}

/// Handles --probe: runs the pipeline once for one stat type and prints
/// the leaderboard
async fn handle_probe(
    config: &Config,
    stat_type: &str,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let registry = Registry::from_entries(&config.categories);

    let spec = registry
        .resolve(stat_type)
        .ok_or_else(|| anyhow::anyhow!("unknown stat type '{}'", stat_type))?;

    let client = build_http_client(&config.scrape)?;
    let limit = limit.unwrap_or(config.server.default_limit);

    tracing::info!("Probing '{}' from {}", stat_type, spec.url);
    let outcome = scrape_leaderboard(&client, spec, limit, config.scrape.invalid_stat).await;
    let players = outcome.into_players();

    println!("=== {} ===\n", stat_type);
    println!("Fetched at: {}", chrono::Utc::now().to_rfc3339());
    println!("Source: {}\n", spec.url);

    if players.is_empty() {
        println!("No data.");
        return Ok(());
    }

    for (position, player) in players.iter().enumerate() {
        println!(
            "{:>3}. {:<28} {:<6} {}",
            position + 1,
            player.name,
            player.team,
            player.stat
        );
    }

    println!("\n✓ {} players ranked", players.len());

    Ok(())
}

/// Handles the main serve operation
async fn handle_serve(mut config: Config, bind_override: Option<String>) -> anyhow::Result<()> {
    if let Some(bind) = bind_override {
        tracing::info!("Overriding bind address: {}", bind);
        config.server.bind = bind;
    }

    let bind = config.server.bind.clone();
    let context = Arc::new(AppContext::new(config)?);

    tracing::info!(
        "Categories: {}, default limit: {}",
        context.registry.len(),
        context.config.server.default_limit
    );

    let server = Server::bind(&bind).await?;

    match server.run(context).await {
        Ok(()) => {
            tracing::info!("Server stopped");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Server failed: {}", e);
            Err(e.into())
        }
    }
}
