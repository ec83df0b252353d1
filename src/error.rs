use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Request-level failures. Every variant maps to a fixed status code and
/// JSON error body; none is fatal to the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid or missing API key")]
    Unauthorized,
    #[error("Invalid product data")]
    InvalidProductData,
    #[error("Product not found")]
    NotFound,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::InvalidProductData => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
