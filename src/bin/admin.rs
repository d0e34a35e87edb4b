//! CLI administration tool for url-directory.
//!
//! Creates and resolves short URLs directly against the database, without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create (or fetch) the short URL for a long URL
//! cargo run --bin admin -- shorten https://www.google.com
//!
//! # Resolve a short URL
//! cargo run --bin admin -- resolve https://myservicedomain.de/rGu2ae
//!
//! # Count stored mappings
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`url_directory::config`].

use url_directory::config::{self, Config};
use url_directory::error::AppError;
use url_directory::server::{build_url_service, connect_pool};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing url-directory.
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
    /// Create or fetch the short URL for an original URL
    Shorten {
        /// Original URL, stored exactly as given
        url: String,
    },

    /// Resolve a short URL to its original URL
    Resolve {
        /// Full short URL including the base URL
        short_url: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Shorten { url } => shorten(&pool, &config, &url).await?,
        Commands::Resolve { short_url } => resolve(&pool, &config, &short_url).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn shorten(pool: &PgPool, config: &Config, url: &str) -> Result<()> {
    let service = build_url_service(Arc::new(pool.clone()), config);

    let short_url = service
        .ensure_short_url(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "✅ Short URL ready".green().bold());
    println!();
    println!("  Original: {}", url.cyan());
    println!("  Short:    {}", short_url.bright_yellow().bold());
    println!();

    Ok(())
}

async fn resolve(pool: &PgPool, config: &Config, short_url: &str) -> Result<()> {
    let service = build_url_service(Arc::new(pool.clone()), config);

    match service.resolve_original_url(short_url).await {
        Ok(original_url) => {
            println!("  Short:    {}", short_url.cyan());
            println!("  Original: {}", original_url.bright_yellow().bold());
            Ok(())
        }
        Err(err @ AppError::NotFound { .. }) => {
            println!("{} {}", "❌".red(), err.to_string().red());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to resolve URL: {}", e)),
    }
}

/// Displays the number of stored mappings.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let mappings_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await?;

    println!(
        "  Mappings: {}",
        mappings_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
