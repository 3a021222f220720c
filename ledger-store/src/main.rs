//! CLI entry point for ledger-store

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ledger_store::catalog;
use ledger_store::config::StoreConfig;

#[derive(Parser)]
#[command(name = "ledger-store")]
#[command(about = "Inspect how the ledger tables map to SQL")]
#[command(version)]
struct Cli {
    /// Path to configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Database schema (overrides config)
    #[arg(short, long)]
    schema: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the snake_case column name for each identifier
    Snake {
        /// Identifiers to convert
        #[arg(required = true)]
        identifiers: Vec<String>,
    },
    /// Show the columns and INSERT statement of every table
    Inspect,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging, so we can use config.log_level)
    let mut config = StoreConfig::load(cli.config.as_deref())?;

    // Initialize logging
    // Priority: RUST_LOG env var > config.log_level > default (debug for dev, info for release)
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let log_level = config.log_level.as_deref().unwrap_or(default_level);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    if let Some(schema) = cli.schema {
        config.database.schema = schema;
    }
    config.validate()?;
    debug!(schema = config.schema(), "configuration loaded");

    match &cli.command {
        Commands::Snake { identifiers } => {
            for identifier in identifiers {
                println!("{} -> {}", identifier, ledger_sql::to_snake_case(identifier));
            }
        }
        Commands::Inspect => inspect(&config),
    }

    Ok(())
}

fn inspect(config: &StoreConfig) {
    let tables = catalog::tables();
    info!("Inspecting {} tables", tables.len());

    println!("Schema: {}", config.schema());
    if let Some(url) = &config.database.url {
        println!("Database: {}", url);
    }
    println!();

    for table in &tables {
        println!("Table: {}.{}", config.schema(), table.table);
        println!("  Insert columns: {}", table.insert_columns.join(", "));
        println!("  Update columns: {}", table.update_columns.join(", "));
        println!("  Returning:      {}", table.returning.join(", "));
        println!("  {}", table.insert_template(config.schema()));
        println!();
    }
}
