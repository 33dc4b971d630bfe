//! Monsoon CLI - Storefront browsing and simulation tools.
//!
//! # Usage
//!
//! ```bash
//! # List the loaded categories
//! monsoon categories
//!
//! # Browse the catalog with filters
//! monsoon catalog -c Electronics --sort price-asc
//! monsoon catalog -s headphones --min-rating 4
//!
//! # Run a scripted shopping session and print the analytics report
//! monsoon simulate
//! ```
//!
//! # Commands
//!
//! - `categories` - List loaded categories
//! - `catalog` - Filter and sort the product grid
//! - `simulate` - Full session: login, cart, checkout, analytics
//!
//! # Environment Variables
//!
//! - `MONSOON_DATA_PATH` - Reference data document (default: `data/catalog.json`)
//! - `MONSOON_PRICE_CEILING` - Default price-filter ceiling in minor units

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use monsoon_store::SortMode;
use monsoon_store::config::StoreConfig;

mod commands;

#[derive(Parser)]
#[command(name = "monsoon")]
#[command(author, version, about = "Monsoon storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List loaded categories
    Categories,
    /// Filter and sort the product grid
    Catalog {
        /// Filter by category display name (e.g., Electronics)
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive search over name and description
        #[arg(short, long)]
        search: Option<String>,

        /// Maximum price in minor units (paise)
        #[arg(long)]
        max_price: Option<i64>,

        /// Minimum rating, 0-5
        #[arg(long)]
        min_rating: Option<f64>,

        /// Sort mode: featured, price-asc, price-desc, rating
        #[arg(long, default_value = "featured")]
        sort: SortMode,
    },
    /// Run a scripted shopping session and print the analytics report
    Simulate,
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "monsoon=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;

    match cli.command {
        Commands::Categories => commands::categories(&config)?,
        Commands::Catalog {
            category,
            search,
            max_price,
            min_rating,
            sort,
        } => commands::catalog(&config, category, search, max_price, min_rating, sort)?,
        Commands::Simulate => commands::simulate(&config)?,
    }
    Ok(())
}
