//! Admin panel commands: product management, sales review, stats, export.

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};
use minishop_core::{NewProduct, ProductId, ProductPatch};
use minishop_store::Store;
use minishop_storefront::stats;
use rust_decimal::Decimal;

#[derive(Subcommand)]
pub enum AdminAction {
    /// List products as the admin table shows them
    Products,
    /// Create a product
    AddProduct {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        price: Decimal,
        /// Image URL
        #[arg(long)]
        image: String,
        #[arg(long)]
        stock: u32,
    },
    /// Update fields of an existing product
    EditProduct {
        product_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<Decimal>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        stock: Option<u32>,
    },
    /// Delete a product
    DeleteProduct { product_id: String },
    /// List sales, newest first
    Sales,
    /// Dashboard figures plus top products and monthly volumes
    Stats,
    /// Export a collection as pretty-printed JSON
    Export {
        #[arg(value_enum)]
        target: ExportTarget,

        /// Output file path
        #[arg(long)]
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportTarget {
    Products,
    Sales,
}

pub async fn run(store: &Store, action: AdminAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AdminAction::Products => {
            let products = store.list_products().await?;
            if products.is_empty() {
                println!("No products registered.");
                return Ok(());
            }
            for p in &products {
                println!("{}  {}  ${}  stock {}", p.id, p.name, p.price, p.stock);
            }
        }
        AdminAction::AddProduct {
            name,
            description,
            price,
            image,
            stock,
        } => {
            let fields = NewProduct {
                name,
                description,
                price,
                image,
                stock,
            };
            // The store re-validates; checking here gives the admin a clear
            // message before anything is sent.
            fields.validate()?;
            let product = store.create_product(fields).await?;
            println!("Created product {} ({})", product.id, product.name);
        }
        AdminAction::EditProduct {
            product_id,
            name,
            description,
            price,
            image,
            stock,
        } => {
            let patch = ProductPatch {
                name,
                description,
                price,
                image,
                stock,
            };
            if patch.is_noop() {
                return Err("nothing to update: pass at least one field flag".into());
            }
            let id = ProductId::new(product_id);
            store.update_product(&id, &patch).await?;
            println!("Updated product {id}");
        }
        AdminAction::DeleteProduct { product_id } => {
            let id = ProductId::new(product_id);
            store.delete_product(&id).await?;
            println!("Deleted product {id}");
        }
        AdminAction::Sales => {
            let sales = stats::newest_first(store.list_sales().await?);
            if sales.is_empty() {
                println!("No sales recorded.");
                return Ok(());
            }
            for sale in &sales {
                println!(
                    "{}  {}  {}  {} item(s)  ${}  [{}]",
                    sale.date.format("%Y-%m-%d"),
                    sale.id,
                    sale.customer.name,
                    sale.items.len(),
                    sale.total,
                    sale.status
                );
            }
        }
        AdminAction::Stats => {
            let figures = stats::dashboard(store).await?;
            println!("Products: {}", figures.total_products);
            println!("Sales:    {}", figures.total_sales);
            println!("Revenue:  ${}", figures.total_revenue);

            let sales = store.list_sales().await?;
            let top = stats::top_products(&sales, 5);
            if !top.is_empty() {
                println!("\nTop products:");
                for entry in &top {
                    println!(
                        "  {}  x{}  ${}",
                        entry.name, entry.quantity, entry.revenue
                    );
                }
            }

            let monthly = stats::sales_by_month(&sales);
            if !monthly.is_empty() {
                println!("\nSales by month:");
                for bucket in &monthly {
                    println!(
                        "  {}  {} sale(s)  ${}",
                        bucket.month, bucket.count, bucket.revenue
                    );
                }
            }
        }
        AdminAction::Export { target, output } => {
            let json = match target {
                ExportTarget::Products => {
                    serde_json::to_string_pretty(&store.list_products().await?)?
                }
                ExportTarget::Sales => serde_json::to_string_pretty(&store.list_sales().await?)?,
            };
            std::fs::write(&output, json)?;
            println!("Exported to {}", output.display());
        }
    }
    Ok(())
}
