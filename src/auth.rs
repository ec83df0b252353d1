use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Guard for mutating routes: the `x-api-key` header must match the
/// configured secret exactly, otherwise the request never reaches the
/// handler or the store.
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let key = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if key != Some(state.api_key.as_ref()) {
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(req).await)
}
