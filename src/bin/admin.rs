//! CLI administration tool for link-analytics.
//!
//! Works directly on the data directory, without requiring the HTTP server
//! to be running.
//!
//! # Usage
//!
//! ```bash
//! # Register a destination
//! cargo run --bin admin -- register https://example.com
//!
//! # Show a link and its hits
//! cargo run --bin admin -- show 100680ad546ce6a577f42f52df33b4cfdca756859e664b8d7de329b150d09ce9
//!
//! # List all links
//! cargo run --bin admin -- list
//!
//! # Check the data directory
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! - `DATA_DIR` (optional): data directory (default: `./data`)
//! - `BASE_URL` (optional): public URL used when printing short links

use link_analytics::config::Config;
use link_analytics::domain::entities::TIMESTAMP_FORMAT;
use link_analytics::infrastructure::cache::NullCache;
use link_analytics::infrastructure::persistence::StorageDir;
use link_analytics::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing link-analytics.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a destination URL
    Register {
        /// Destination URL
        destination: String,
    },

    /// Show a link with its recorded hits
    Show {
        /// Link identifier
        identifier: String,

        /// Print the raw stored history instead of a table
        #[arg(long)]
        raw: bool,
    },

    /// List all links
    List,

    /// Check that the data directory is usable
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let storage = StorageDir::open(&config.data_dir)
        .with_context(|| format!("Failed to open data directory {}", config.data_dir))?;
    let state = AppState::new(storage, Arc::new(NullCache::new()), config.base_url);

    match cli.command {
        Commands::Register { destination } => register(&state, &destination).await?,
        Commands::Show { identifier, raw } => show(&state, &identifier, raw).await?,
        Commands::List => list(&state).await?,
        Commands::Check => check(&state).await?,
    }

    Ok(())
}

async fn register(state: &AppState, destination: &str) -> Result<()> {
    println!("{}", "🔗 Register Link".bright_blue().bold());
    println!();

    let link = state
        .link_service
        .register_destination(destination.trim())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to register link: {}", e))?;

    println!("  Destination: {}", link.destination.cyan());
    println!("  Identifier:  {}", link.identifier.bright_yellow().bold());
    println!();
    println!(
        "  Short URL:   {}",
        state.short_url(&link.identifier).bright_cyan()
    );
    println!(
        "  Analytics:   {}",
        state.analytics_url(&link.identifier).bright_cyan()
    );
    println!();

    Ok(())
}

/// Prints a link's destination followed by its hits.
///
/// # Output Format
///
/// ```text
/// 📈 Link Analytics
///
///   Destination: https://example.com
///   Hits:        2
///
///   Time (UTC)           Client
///   ──────────────────────────────────────────────────────
///   2026/10/15 09:30:00  Mozilla/5.0
///   2026/10/15 09:31:12  curl/8.5.0
/// ```
async fn show(state: &AppState, identifier: &str, raw: bool) -> Result<()> {
    let analytics = state
        .link_service
        .get_analytics(identifier)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load link: {}", e))?;

    if raw {
        print!("{}", analytics.history_text());
        return Ok(());
    }

    let hits = analytics.hits();

    println!("{}", "📈 Link Analytics".bright_blue().bold());
    println!();
    println!("  Destination: {}", analytics.link.destination.cyan());
    println!(
        "  Hits:        {}",
        hits.len().to_string().bright_green().bold()
    );
    println!();

    if hits.is_empty() {
        return Ok(());
    }

    println!(
        "  {:<20} {}",
        "Time (UTC)".bright_white().bold(),
        "Client".bright_white().bold()
    );
    println!("  {}", "─".repeat(54).bright_black());

    for hit in &hits {
        println!(
            "  {:<20} {}",
            hit.recorded_at
                .format(TIMESTAMP_FORMAT)
                .to_string()
                .bright_black(),
            hit.client_signature
        );
    }
    println!();

    Ok(())
}

async fn list(state: &AppState) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let links = state
        .link_service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin register <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    for link in &links {
        println!(
            "  {}  {}",
            link.identifier.bright_black(),
            link.destination.cyan()
        );
    }

    println!();
    println!(
        "  Total: {}",
        links.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn check(state: &AppState) -> Result<()> {
    println!("{}", "🔍 Checking data directory...".bright_blue());

    if !state.storage.health_check().await {
        anyhow::bail!(
            "Data directory {} is not writable",
            state.storage.root().display()
        );
    }

    println!(
        "{} {}",
        "✅ Data directory OK:".green().bold(),
        state.storage.root().display()
    );

    Ok(())
}
