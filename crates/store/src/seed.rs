//! Fixed sample catalog for first-run seeding.

use minishop_core::NewProduct;
use rust_decimal::Decimal;

/// The six-product sample catalog written when the store starts empty.
#[must_use]
pub fn sample_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "Galaxy Pro Smartphone".to_string(),
            description: "Latest-generation smartphone with a 108MP camera and a 6.7\" OLED \
                          display. For anyone who wants technology and build quality."
                .to_string(),
            price: Decimal::new(1_299_99, 2),
            image: "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=400&h=300&fit=crop&crop=center".to_string(),
            stock: 15,
        },
        NewProduct {
            name: "Ultra Gaming Laptop".to_string(),
            description: "Gaming laptop with an RTX 4060 GPU, Intel i7 processor, and 16GB of \
                          RAM. Built for games and heavy workloads."
                .to_string(),
            price: Decimal::new(3_499_99, 2),
            image: "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=400&h=300&fit=crop&crop=center".to_string(),
            stock: 8,
        },
        NewProduct {
            name: "Premium Bluetooth Headphones".to_string(),
            description: "Wireless headphones with active noise cancellation and 30 hours of \
                          battery life. Crystal-clear sound in an elegant design."
                .to_string(),
            price: Decimal::new(299_99, 2),
            image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=300&fit=crop&crop=center".to_string(),
            stock: 25,
        },
        NewProduct {
            name: "Fitness Smartwatch".to_string(),
            description: "Smart watch with a heart-rate monitor, built-in GPS, and water \
                          resistance. Track your health around the clock."
                .to_string(),
            price: Decimal::new(899_99, 2),
            image: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400&h=300&fit=crop&crop=center".to_string(),
            stock: 12,
        },
        NewProduct {
            name: "Tablet Pro 12.9".to_string(),
            description: "Professional tablet with a Liquid Retina display, M2 processor, and \
                          stylus support. Made for creative work."
                .to_string(),
            price: Decimal::new(2_199_99, 2),
            image: "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=400&h=300&fit=crop&crop=center".to_string(),
            stock: 6,
        },
        NewProduct {
            name: "4K DSLR Camera".to_string(),
            description: "Professional camera with 4K recording, an 18-55mm kit lens, and an \
                          APS-C sensor. Capture every moment in exceptional quality."
                .to_string(),
            price: Decimal::new(1_899_99, 2),
            image: "https://images.unsplash.com/photo-1502920917128-1aa500764cbd?w=400&h=300&fit=crop&crop=center".to_string(),
            stock: 4,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_is_valid() {
        let products = sample_products();
        assert_eq!(products.len(), 6);
        for product in &products {
            assert_eq!(product.validate(), Ok(()));
        }
    }
}
