//! CLI administration tool for order-intake.
//!
//! Provides commands for inspecting the menu, stored orders and the database
//! without going through the HTTP form.
//!
//! # Usage
//!
//! ```bash
//! # Print the menu, or one item
//! cargo run --bin admin -- menu
//! cargo run --bin admin -- menu Dosa
//!
//! # Show customer and order totals
//! cargo run --bin admin -- stats
//!
//! # List the 20 most recent order lines
//! cargo run --bin admin -- orders --limit 20
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required for everything except `menu`): PostgreSQL connection string

use order_intake::domain::menu::{MenuCatalog, MenuItem};
use order_intake::domain::repositories::OrderRepository;
use order_intake::infrastructure::persistence::PgOrderRepository;
use order_intake::utils::money::format_amount;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing order-intake.
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
    /// Print the menu with unit prices
    Menu {
        /// Show only this item (exact, case-sensitive name)
        item: Option<String>,
    },

    /// Show customer, order and revenue totals
    Stats,

    /// List recent order lines
    Orders {
        /// Number of lines to show
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },

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

    match cli.command {
        Commands::Menu { item } => print_menu(item.as_deref())?,
        Commands::Stats => handle_stats(&connect().await?).await?,
        Commands::Orders { limit } => {
            check_limit(limit)?;
            list_orders(&connect().await?, limit).await?
        }
        Commands::Db { action } => handle_db_action(action, &connect().await?).await?,
    }

    Ok(())
}

/// Connects to the database named by `DATABASE_URL`.
async fn connect() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

fn check_limit(limit: i64) -> Result<()> {
    if limit <= 0 {
        anyhow::bail!("--limit must be positive, got {}", limit);
    }
    Ok(())
}

/// Prints the catalog in the order lines are built, or a single item.
fn print_menu(only: Option<&str>) -> Result<()> {
    let catalog = MenuCatalog::standard();

    let items: Vec<&MenuItem> = match only {
        Some(name) => vec![
            catalog
                .find(name)
                .with_context(|| format!("No menu item named '{}'", name))?,
        ],
        None => catalog.items().iter().collect(),
    };

    println!("{}", "🍽  Menu".bright_blue().bold());
    println!();

    for item in items {
        println!(
            "  {:<10} {}",
            item.name.cyan(),
            format!("${}", format_amount(item.unit_price)).bright_green()
        );
    }
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of customers
/// - Total number of order lines
/// - Revenue across all lines
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let customers_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(pool)
        .await?;

    let lines_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_lines")
        .fetch_one(pool)
        .await?;

    let revenue: Decimal =
        sqlx::query_scalar("SELECT COALESCE(SUM(total_price), 0) FROM order_lines")
            .fetch_one(pool)
            .await?;

    println!(
        "  Customers:   {}",
        customers_count.to_string().bright_green().bold()
    );
    println!(
        "  Order lines: {}",
        lines_count.to_string().bright_green().bold()
    );
    println!(
        "  Revenue:     {}",
        format!("${}", format_amount(revenue)).bright_green().bold()
    );
    println!();

    Ok(())
}

/// Lists the most recent order lines.
///
/// # Output Format
///
/// ```text
/// 🧾 Recent Orders
///
///   ID    Customer  Item       Qty    Total        Created
///   ─────────────────────────────────────────────────────────────────
///   12    7         Dosa       2      $61.98       2024-06-01 12:30
/// ```
async fn list_orders(pool: &PgPool, limit: i64) -> Result<()> {
    let repo = PgOrderRepository::new(Arc::new(pool.clone()));
    let lines = repo
        .recent(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list orders: {}", e))?;

    println!("{}", "🧾 Recent Orders".bright_blue().bold());
    println!();

    if lines.is_empty() {
        println!("{}", "  No orders yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<9} {:<10} {:<6} {:<12} {}",
        "ID".bright_white().bold(),
        "Customer".bright_white().bold(),
        "Item".bright_white().bold(),
        "Qty".bright_white().bold(),
        "Total".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(65).bright_black());

    for line in &lines {
        println!(
            "  {:<5} {:<9} {:<10} {:<6} {:<12} {}",
            line.id.to_string().bright_black(),
            line.customer_id,
            line.name.cyan(),
            line.quantity,
            format!("${}", format_amount(line.total_price)),
            line.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Shown: {}", lines.len().to_string().bright_white().bold());
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
