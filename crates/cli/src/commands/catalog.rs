//! Catalog browsing commands.

use clap::Subcommand;
use minishop_core::Product;
use minishop_store::Store;
use minishop_storefront::catalog::{self, SortKey};
use rust_decimal::Decimal;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List all products
    List {
        /// Sort order: price-asc, price-desc, name, stock-desc
        #[arg(long)]
        sort: Option<String>,
    },
    /// Case-insensitive search over name and description
    Search {
        /// Substring to look for
        query: String,
    },
    /// Products within an inclusive price range
    Filter {
        #[arg(long)]
        min: Decimal,
        #[arg(long)]
        max: Decimal,
    },
}

pub async fn run(store: &Store, action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    let products = match action {
        CatalogAction::List { sort } => match sort {
            Some(raw) => {
                let key: SortKey = raw.parse()?;
                catalog::sorted(store, key).await?
            }
            None => store.list_products().await?,
        },
        CatalogAction::Search { query } => catalog::search(store, &query).await?,
        CatalogAction::Filter { min, max } => catalog::price_range(store, min, max).await?,
    };

    if products.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    for product in &products {
        print_product(product);
    }
    Ok(())
}

fn print_product(product: &Product) {
    let availability = if product.stock == 0 {
        " [OUT OF STOCK]".to_string()
    } else {
        format!("  (stock: {})", product.stock)
    };
    println!(
        "{}  {}  ${}{}",
        product.id, product.name, product.price, availability
    );
    println!("    {}", product.description);
}
