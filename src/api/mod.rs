//! API handlers for Eventmap REST endpoints

pub mod events;
pub mod health;
pub mod openapi;

use axum::http::Uri;

use crate::error::AppError;

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("Route {} not found", uri.path()))
}
