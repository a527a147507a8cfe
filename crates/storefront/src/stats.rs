//! Admin dashboard figures and sales analytics.
//!
//! Read-only projections for the admin surface. Like the catalog views,
//! everything is computed from a fresh fetch; nothing is cached.

use std::collections::BTreeMap;

use minishop_core::{ProductId, Sale};
use minishop_store::{Result, Store};
use rust_decimal::Decimal;

/// Headline figures for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_products: usize,
    pub total_sales: usize,
    /// Sum of stored sale totals (not recomputed from items).
    pub total_revenue: Decimal,
}

/// Aggregated sales figures for one product across all recorded sales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSales {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u64,
    pub revenue: Decimal,
}

/// Sales volume for one `YYYY-MM` month bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySales {
    pub month: String,
    pub count: usize,
    pub revenue: Decimal,
}

/// Compute the dashboard headline figures.
///
/// # Errors
///
/// Propagates store failures.
pub async fn dashboard(store: &Store) -> Result<DashboardStats> {
    let products = store.list_products().await?;
    let sales = store.list_sales().await?;
    Ok(DashboardStats {
        total_products: products.len(),
        total_sales: sales.len(),
        total_revenue: sales.iter().map(|s| s.total).sum(),
    })
}

/// Sales newest-first, the order the admin sales table displays.
#[must_use]
pub fn newest_first(mut sales: Vec<Sale>) -> Vec<Sale> {
    sales.sort_by(|a, b| b.date.cmp(&a.date));
    sales
}

/// The best-selling products by purchased quantity, at most `limit` entries.
///
/// Quantity and revenue are aggregated per product over every item of every
/// sale; the snapshot name from the most recent occurrence is displayed.
#[must_use]
pub fn top_products(sales: &[Sale], limit: usize) -> Vec<ProductSales> {
    let mut per_product: BTreeMap<ProductId, ProductSales> = BTreeMap::new();

    for sale in sales {
        for item in &sale.items {
            let entry = per_product
                .entry(item.product_id.clone())
                .or_insert_with(|| ProductSales {
                    product_id: item.product_id.clone(),
                    name: item.name.clone(),
                    quantity: 0,
                    revenue: Decimal::ZERO,
                });
            entry.name.clone_from(&item.name);
            entry.quantity += u64::from(item.quantity);
            entry.revenue += item.line_total();
        }
    }

    let mut ranked: Vec<ProductSales> = per_product.into_values().collect();
    ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    ranked.truncate(limit);
    ranked
}

/// Sale count and revenue per month, in chronological month order.
#[must_use]
pub fn sales_by_month(sales: &[Sale]) -> Vec<MonthlySales> {
    let mut per_month: BTreeMap<String, MonthlySales> = BTreeMap::new();

    for sale in sales {
        let month = sale.month();
        let entry = per_month
            .entry(month.clone())
            .or_insert_with(|| MonthlySales {
                month,
                count: 0,
                revenue: Decimal::ZERO,
            });
        entry.count += 1;
        entry.revenue += sale.total;
    }

    per_month.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use minishop_core::{CartLine, Customer, SaleId, SaleStatus};

    fn line(product_id: &str, name: &str, price: Decimal, quantity: u32) -> CartLine {
        CartLine {
            product_id: ProductId::new(product_id),
            name: name.to_string(),
            price,
            image: String::new(),
            quantity,
        }
    }

    fn sale(id: &str, items: Vec<CartLine>, total: Decimal, ymd: (i32, u32, u32)) -> Sale {
        Sale {
            id: SaleId::new(id),
            customer: Customer {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            },
            items,
            total,
            status: SaleStatus::Completed,
            date: Utc
                .with_ymd_and_hms(ymd.0, ymd.1, ymd.2, 12, 0, 0)
                .single()
                .expect("valid date"),
        }
    }

    fn fixture() -> Vec<Sale> {
        vec![
            sale(
                "s1",
                vec![
                    line("laptop", "Laptop", Decimal::new(3_499_99, 2), 1),
                    line("phones", "Headphones", Decimal::new(299_99, 2), 2),
                ],
                Decimal::new(4_099_97, 2),
                (2024, 1, 10),
            ),
            sale(
                "s2",
                vec![line("phones", "Headphones", Decimal::new(299_99, 2), 3)],
                Decimal::new(899_97, 2),
                (2024, 2, 5),
            ),
        ]
    }

    #[test]
    fn test_newest_first() {
        let ordered = newest_first(fixture());
        assert_eq!(ordered[0].id, SaleId::new("s2"));
        assert_eq!(ordered[1].id, SaleId::new("s1"));
    }

    #[test]
    fn test_top_products_aggregates_across_sales() {
        let top = top_products(&fixture(), 5);
        assert_eq!(top.len(), 2);

        assert_eq!(top[0].name, "Headphones");
        assert_eq!(top[0].quantity, 5);
        assert_eq!(top[0].revenue, Decimal::new(1_499_95, 2));

        assert_eq!(top[1].name, "Laptop");
        assert_eq!(top[1].quantity, 1);
    }

    #[test]
    fn test_top_products_respects_limit() {
        let top = top_products(&fixture(), 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "Headphones");
    }

    #[test]
    fn test_sales_by_month_buckets() {
        let monthly = sales_by_month(&fixture());
        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[0].month, "2024-01");
        assert_eq!(monthly[0].count, 1);
        assert_eq!(monthly[0].revenue, Decimal::new(4_099_97, 2));
        assert_eq!(monthly[1].month, "2024-02");
    }

    #[test]
    fn test_empty_sales() {
        assert!(top_products(&[], 5).is_empty());
        assert!(sales_by_month(&[]).is_empty());
    }
}
