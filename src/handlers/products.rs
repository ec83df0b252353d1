use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{CreateProduct, Product, UpdateProduct},
    AppState,
};

/// Ids arrive as opaque path strings; one that does not parse as a UUID
/// cannot match any stored record, so it reports not-found rather than a
/// syntax error.
fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound)
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products = state.store.read().await.list();
    info!(count = products.len(), "Listed products");
    Json(products)
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let id = parse_id(&id)?;
    let product = state
        .store
        .read()
        .await
        .get(&id)
        .cloned()
        .ok_or(AppError::NotFound)?;

    info!(id = %id, "Fetched product");
    Ok(Json(product))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProduct>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Product>)> {
    // Wrong field types and malformed JSON both land here.
    let Json(payload) = payload.map_err(|_| AppError::InvalidProductData)?;
    if !payload.is_valid() {
        return Err(AppError::InvalidProductData);
    }

    let product = state.store.write().await.create(payload);
    info!(id = %product.id, name = %product.name, "Created product");

    Ok((StatusCode::CREATED, Json(product)))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateProduct>, JsonRejection>,
) -> AppResult<Json<Product>> {
    let id = parse_id(&id)?;
    let Json(payload) = payload.map_err(|_| AppError::InvalidProductData)?;

    let product = state
        .store
        .write()
        .await
        .update(&id, payload)
        .ok_or(AppError::NotFound)?;

    info!(id = %id, "Updated product");
    Ok(Json(product))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let id = parse_id(&id)?;
    let product = state
        .store
        .write()
        .await
        .delete(&id)
        .ok_or(AppError::NotFound)?;

    info!(id = %id, name = %product.name, "Deleted product");
    Ok(Json(serde_json::json!({ "deleted": [product] })))
}
