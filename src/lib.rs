//! Eventmap event discovery server
//!
//! Clients create geo-tagged events and query them by text, location name,
//! or proximity to their own coordinates through a REST JSON API.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: AppConfig, services: services::Services) -> Self {
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route(
            "/events",
            get(api::events::list_events).post(api::events::create_event),
        )
        .route("/events/:id", get(api::events::get_event))
        .with_state(state);

    Router::new()
        .route("/health", get(api::health::health_check))
        .nest("/api", api)
        .merge(api::openapi::create_openapi_router())
        .fallback(api::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
