//! Minishop CLI - storefront and admin panel in one binary.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! minishop catalog list --sort price-asc
//! minishop catalog search headphones
//! minishop catalog filter --min 100 --max 500
//!
//! # Work the cart
//! minishop cart add <PRODUCT_ID>
//! minishop cart set-quantity <PRODUCT_ID> 3
//! minishop cart show
//! minishop checkout --name "Ada Lovelace" --email ada@example.com
//!
//! # Administer the store
//! minishop admin add-product --name ... --description ... --price 19.99 --image URL --stock 5
//! minishop admin sales
//! minishop admin stats
//! minishop admin export sales --output sales.json
//! ```
//!
//! The backend (remote database or local files) is selected once at startup
//! from `MINISHOP_DATABASE_URL`; see the store crate's configuration docs.
//! On first use with an empty store, the sample catalog is seeded.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use minishop_store::{Store, StoreConfig};

mod commands;

#[derive(Parser)]
#[command(name = "minishop")]
#[command(author, version, about = "Minishop storefront and admin CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
    /// Inspect and mutate the shopping cart
    Cart {
        #[command(subcommand)]
        action: commands::cart::CartAction,
    },
    /// Purchase the current cart contents
    Checkout {
        /// Customer name
        #[arg(long)]
        name: String,

        /// Customer email
        #[arg(long)]
        email: String,
    },
    /// Administer products and review sales
    Admin {
        #[command(subcommand)]
        action: commands::admin::AdminAction,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing; default to info for our crates
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "minishop=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    let store = Store::connect(&config).await?;
    tracing::debug!(backend = store.backend_name(), "store ready");

    // First run against an empty store gets the sample catalog.
    store.seed_if_empty().await?;

    match cli.command {
        Commands::Catalog { action } => commands::catalog::run(&store, action).await?,
        Commands::Cart { action } => commands::cart::run(&store, &config, action).await?,
        Commands::Checkout { name, email } => {
            commands::cart::run_checkout(&store, &config, name, email).await?;
        }
        Commands::Admin { action } => commands::admin::run(&store, action).await?,
    }
    Ok(())
}
