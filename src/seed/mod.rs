use uuid::Uuid;

use crate::models::Product;

/// The two fixed products every fresh store starts with. Ids are generated
/// per process start; nothing outlives a restart.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: Uuid::new_v4(),
            name: "Blue T-Shirt".to_string(),
            description: "Comfortable cotton t-shirt".to_string(),
            price: 19.99,
            category: "clothing".to_string(),
            in_stock: true,
        },
        Product {
            id: Uuid::new_v4(),
            name: "Running Shoes".to_string(),
            description: "Lightweight running shoes".to_string(),
            price: 79.5,
            category: "footwear".to_string(),
            in_stock: true,
        },
    ]
}
