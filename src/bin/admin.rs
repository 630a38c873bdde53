//! CLI administration tool for shortlinks.
//!
//! Manages links directly against PostgreSQL through the same service the
//! HTTP API uses, so validation and short name rules are identical.
//!
//! # Usage
//!
//! ```bash
//! # List the first ten links
//! cargo run --bin admin -- links list
//!
//! # List links 11 through 20
//! cargo run --bin admin -- links list --range "[11,20]"
//!
//! # Create a link with a generated or chosen short name
//! cargo run --bin admin -- links create https://example.com
//! cargo run --bin admin -- links create https://example.com --short-name docs
//!
//! # Show or delete a link
//! cargo run --bin admin -- links get 42
//! cargo run --bin admin -- links delete 42
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components (required)
//! - `BASE_PATH` (required for `links` commands): prefix for short URLs

use shortlinks::application::services::LinkService;
use shortlinks::config::{Config, mask_connection_string};
use shortlinks::domain::context::OpContext;
use shortlinks::domain::entities::Link;
use shortlinks::infrastructure::persistence::PgLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shortlinks.
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
    /// Manage links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List links in a range
    List {
        /// Inclusive 1-based range as a JSON pair
        #[arg(short, long, default_value = "[1,10]")]
        range: String,
    },

    /// Show a single link
    Get {
        /// Link ID
        id: i64,
    },

    /// Create a link
    Create {
        /// Destination URL
        original_url: String,

        /// Short name (generated if not provided)
        #[arg(short, long)]
        short_name: Option<String>,
    },

    /// Delete a link
    Delete {
        /// Link ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: PgPool) -> Result<()> {
    let base_path = std::env::var("BASE_PATH").context("BASE_PATH must be set")?;
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    let service = LinkService::new(repo, base_path);
    let ctx = OpContext::new();

    match action {
        LinkAction::List { range } => list_links(&service, &ctx, &range).await?,
        LinkAction::Get { id } => {
            let link = service.get(&ctx, id).await?;
            print_link(&link);
        }
        LinkAction::Create {
            original_url,
            short_name,
        } => {
            let link = service.create(&ctx, original_url, short_name).await?;
            println!("{}", "✅ Link created".green().bold());
            println!();
            print_link(&link);
        }
        LinkAction::Delete { id, yes } => delete_link(&service, &ctx, id, yes).await?,
    }

    Ok(())
}

/// Lists links in a tabular format.
///
/// # Output Format
///
/// ```text
/// 📋 Links 1-10 of 42
///
///   ID    Short name   Original URL
///   ──────────────────────────────────────────────────────
///   1     docs         https://example.com/docs
/// ```
async fn list_links(
    service: &LinkService<PgLinkRepository>,
    ctx: &OpContext,
    range: &str,
) -> Result<()> {
    let (from, to): (i64, i64) = serde_json::from_str(range)
        .with_context(|| format!("Range must be a JSON pair like [1,10], got '{}'", range))?;

    let page = service.list(ctx, from, to).await?;

    println!(
        "{}",
        format!("📋 Links {}-{} of {}", page.from, page.to, page.total)
            .bright_blue()
            .bold()
    );
    println!();

    if page.links.is_empty() {
        println!("{}", "  No links in this range".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<12} {}",
        "ID".bright_white().bold(),
        "Short name".bright_white().bold(),
        "Original URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &page.links {
        println!(
            "  {:<5} {:<12} {}",
            link.id.to_string().bright_black(),
            link.short_name.cyan(),
            link.original_url
        );
    }

    println!();

    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(
    service: &LinkService<PgLinkRepository>,
    ctx: &OpContext,
    id: i64,
    skip_confirm: bool,
) -> Result<()> {
    let link = service.get(ctx, id).await?;
    print_link(&link);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.delete(ctx, id).await?;

    println!("{}", "✅ Link deleted".green().bold());

    Ok(())
}

fn print_link(link: &Link) {
    println!("  ID:           {}", link.id.to_string().bright_black());
    println!("  Short name:   {}", link.short_name.cyan());
    println!("  Short URL:    {}", link.short_url.bright_yellow());
    println!("  Original URL: {}", link.original_url);
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await
                .context("Database reachable but the links table is missing")?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Links: {}", links.to_string().bright_green().bold());
        }
    }

    Ok(())
}
