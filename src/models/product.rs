use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Core product entity. `id` is server-generated and never taken from
/// client input; everything else is client-supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Create body. All fields required; a wrong JSON type (string price,
/// non-boolean inStock) fails deserialization and surfaces as 400.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl CreateProduct {
    /// Presence checks the type system cannot express: the string fields
    /// must be non-empty after trimming.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.description.trim().is_empty()
            && !self.category.trim().is_empty()
    }
}

/// Partial update body. Absent fields leave the stored value untouched.
/// Deliberately has no `id` field so a client body can never overwrite it.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}
