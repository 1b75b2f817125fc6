//! CLI administration tool for tiny-shortener.
//!
//! Works directly against the SQLite database, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts when --url is omitted)
//! cargo run --bin admin -- shorten --url https://example.com/a
//!
//! # Print the long URL behind a short id
//! cargo run --bin admin -- resolve 1
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
//! Same as the server; see [`tiny_shortener::config`]. `DATABASE_PATH` and
//! `BASE_URL` are the ones that matter here.

use tiny_shortener::config::{self, Config};
use tiny_shortener::infrastructure::database;
use tiny_shortener::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing tiny-shortener.
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
    /// Shorten a URL
    Shorten {
        /// URL to shorten (prompted for when omitted)
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Print the long URL stored under a short id
    Resolve {
        /// Short identifier, as in /r/{id}
        id: i64,
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

    let pool = database::connect(&config)
        .await
        .context("Failed to open database")?;

    let result = match cli.command {
        Commands::Shorten { url } => shorten(&pool, &config, url).await,
        Commands::Resolve { id } => resolve(&pool, &config, id).await,
        Commands::Stats => handle_stats(&pool, &config).await,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await,
    };

    pool.close().await;

    result
}

fn app_state(pool: &SqlitePool, config: &Config) -> AppState {
    AppState::new(Arc::new(pool.clone()), config.base_url.clone())
}

/// Stores a URL and prints its short link.
async fn shorten(pool: &SqlitePool, config: &Config, url: Option<String>) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let long_url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("Long URL").interact_text()?,
    };

    let state = app_state(pool, config);
    let entry = state
        .url_service
        .shorten(&long_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("  Long URL:  {}", entry.url.cyan());
    println!(
        "  Short URL: {}",
        state.url_service.short_url(&entry).bright_yellow().bold()
    );
    println!();

    Ok(())
}

/// Prints the long URL behind a short id.
async fn resolve(pool: &SqlitePool, config: &Config, id: i64) -> Result<()> {
    let state = app_state(pool, config);

    match state.url_service.resolve(id).await {
        Ok(long_url) => {
            println!("  {} → {}", format!("/r/{}", id).bright_black(), long_url.cyan());
            Ok(())
        }
        Err(tiny_shortener::AppError::NotFound { .. }) => {
            println!("{}", format!("  No URL stored under id {}", id).yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Database error: {}", e)),
    }
}

/// Displays system statistics.
async fn handle_stats(pool: &SqlitePool, config: &Config) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count = app_state(pool, config)
        .url_service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!(
        "  Links:    {}",
        links_count.to_string().bright_green().bold()
    );
    println!("  Database: {}", config.database_path.bright_white());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("  SQLite: {}", version.bright_white());
            println!("  File:   {}", config.database_path.bright_white());
            println!();
        }
    }

    Ok(())
}
