use indexmap::IndexMap;
use uuid::Uuid;

use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::seed;

/// In-memory product collection. Exclusive owner of all records; iteration
/// order is insertion order, and deletion never reorders the rest
/// (`shift_remove`, not `swap_remove`).
#[derive(Debug, Default)]
pub struct ProductStore {
    products: IndexMap<Uuid, Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the fixed startup samples.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for product in seed::sample_products() {
            store.products.insert(product.id, product);
        }
        store
    }

    pub fn list(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Product> {
        self.products.get(id)
    }

    /// Generates a fresh id, appends a record built from the payload, and
    /// returns it.
    pub fn create(&mut self, payload: CreateProduct) -> Product {
        let product = Product {
            id: Uuid::new_v4(),
            name: payload.name,
            description: payload.description,
            price: payload.price,
            category: payload.category,
            in_stock: payload.in_stock,
        };
        self.products.insert(product.id, product.clone());
        product
    }

    /// Merges the present fields of `payload` onto the stored record.
    /// `id` is not part of the payload and can never change.
    pub fn update(&mut self, id: &Uuid, payload: UpdateProduct) -> Option<Product> {
        let product = self.products.get_mut(id)?;
        if let Some(name) = payload.name {
            product.name = name;
        }
        if let Some(description) = payload.description {
            product.description = description;
        }
        if let Some(price) = payload.price {
            product.price = price;
        }
        if let Some(category) = payload.category {
            product.category = category;
        }
        if let Some(in_stock) = payload.in_stock {
            product.in_stock = in_stock;
        }
        Some(product.clone())
    }

    pub fn delete(&mut self, id: &Uuid) -> Option<Product> {
        self.products.shift_remove(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
