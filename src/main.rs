use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod access_log;
mod auth;
mod config;
mod error;
mod handlers;
mod models;
mod seed;
mod store;

use crate::config::Config;
use crate::store::ProductStore;

/// Shared application state — cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<ProductStore>>,
    pub api_key: Arc<str>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,product_service=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let state = AppState {
        store: Arc::new(RwLock::new(ProductStore::seeded())),
        api_key: config.api_key.clone().into(),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Product service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    // list and get are open; create, update and delete sit behind the
    // API-key guard.
    let public = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/products", get(handlers::products::list_products))
        .route("/api/products/:id", get(handlers::products::get_product));

    let protected = Router::new()
        .route("/api/products", post(handlers::products::create_product))
        .route(
            "/api/products/:id",
            put(handlers::products::update_product).delete(handlers::products::delete_product),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(middleware::from_fn(access_log::access_log))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
