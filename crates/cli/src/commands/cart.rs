//! Cart and checkout commands.

use clap::Subcommand;
use minishop_core::{Customer, ProductId};
use minishop_store::{Store, StoreConfig};
use minishop_storefront::{Cart, checkout::checkout};

#[derive(Subcommand)]
pub enum CartAction {
    /// Show the cart contents and total
    Show,
    /// Add one unit of a product
    Add {
        /// Product id from `catalog list`
        product_id: String,
    },
    /// Remove a product's line entirely
    Remove { product_id: String },
    /// Set a line's quantity directly (0 removes the line)
    SetQuantity { product_id: String, quantity: i64 },
    /// Empty the cart
    Clear,
}

pub async fn run(
    store: &Store,
    config: &StoreConfig,
    action: CartAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = Cart::load(config.cart_path())?;

    match action {
        CartAction::Show => {
            if cart.is_empty() {
                println!("Your cart is empty.");
                return Ok(());
            }
            for line in cart.lines() {
                println!(
                    "{}  {} x{}  ${}",
                    line.product_id,
                    line.name,
                    line.quantity,
                    line.line_total()
                );
            }
            println!("Total: ${}  ({} items)", cart.total(), cart.count());
        }
        CartAction::Add { product_id } => {
            let id = ProductId::new(product_id);
            let Some(product) = store.get_product(&id).await? else {
                return Err(format!("No product with id {id}").into());
            };
            if product.stock == 0 {
                return Err(format!("{} is out of stock", product.name).into());
            }
            cart.add_item(&product)?;
            println!("{} added to cart ({} items)", product.name, cart.count());
        }
        CartAction::Remove { product_id } => {
            cart.remove_item(&ProductId::new(product_id))?;
            println!("Removed. Cart now holds {} items.", cart.count());
        }
        CartAction::SetQuantity {
            product_id,
            quantity,
        } => {
            cart.update_quantity(&ProductId::new(product_id), quantity)?;
            println!("Cart now holds {} items.", cart.count());
        }
        CartAction::Clear => {
            cart.clear()?;
            println!("Cart cleared.");
        }
    }
    Ok(())
}

pub async fn run_checkout(
    store: &Store,
    config: &StoreConfig,
    name: String,
    email: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = Cart::load(config.cart_path())?;
    let sale = checkout(store, &mut cart, Customer { name, email }).await?;

    println!(
        "Purchase complete: sale {} for ${} ({} line{})",
        sale.id,
        sale.total,
        sale.items.len(),
        if sale.items.len() == 1 { "" } else { "s" }
    );
    Ok(())
}
