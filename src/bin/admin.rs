//! CLI administration tool for trunc8.
//!
//! Inspects links and checks the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show a link and its click count
//! cargo run --bin admin -- link show AB12
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use trunc8::domain::repositories::LinkRepository;
use trunc8::infrastructure::persistence::PgLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing trunc8.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link inspection subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Show a link without counting a visit
    Show {
        /// Short code, e.g. AB12
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;
    let repo = PgLinkRepository::new(Arc::new(pool));

    match cli.command {
        Commands::Link { action } => match action {
            LinkAction::Show { code } => show_link(&repo, &code).await?,
        },
        Commands::Stats => show_stats(&repo).await?,
        Commands::Db { action } => match action {
            DbAction::Check => check_db(&repo).await?,
        },
    }

    Ok(())
}

/// Prints a single link.
///
/// ```text
/// Link AB12
///
///   ID:       1
///   URL:      https://example.com
///   Clicks:   42
///   Created:  2025-01-15 10:30
/// ```
async fn show_link(repo: &PgLinkRepository, code: &str) -> Result<()> {
    let link = repo
        .find_by_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    let Some(link) = link else {
        println!("{}", format!("No link with code {}", code).yellow());
        return Ok(());
    };

    println!("{} {}", "Link".bright_blue().bold(), link.code.cyan().bold());
    println!();
    println!("  ID:       {}", link.id.to_string().bright_black());
    println!("  URL:      {}", link.original_url.bright_white());
    println!(
        "  Clicks:   {}",
        link.click_count.to_string().bright_yellow().bold()
    );
    println!(
        "  Created:  {}",
        link.created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Displays the number of links and the total number of clicks.
async fn show_stats(repo: &PgLinkRepository) -> Result<()> {
    let totals = repo
        .totals()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!("{}", "Statistics".bright_blue().bold());
    println!();
    println!(
        "  Links:   {}",
        totals.links.to_string().bright_white().bold()
    );
    println!(
        "  Clicks:  {}",
        totals.clicks.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn check_db(repo: &PgLinkRepository) -> Result<()> {
    match repo.ping().await {
        Ok(()) => {
            println!("{}", "Database connection OK".green().bold());
            Ok(())
        }
        Err(e) => {
            println!("{}", "Database connection failed".red().bold());
            Err(anyhow::anyhow!("{}", e))
        }
    }
}
