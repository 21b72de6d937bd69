//! HTTP API Layer
//!
//! This crate provides the web surface for the insurance search portal using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for the catalog, profile, and quote
//!   endpoints plus the server-rendered pages
//! - **Middleware**: Audit logging for API requests
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig};
//!
//! let app = create_router(pool, ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use core_kernel::ExchangeRate;
use domain_quote::QuoteTable;
use infra_db::DatabasePool;

use crate::config::ApiConfig;
use crate::handlers::{catalog, health, pages, profile, quote};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: DatabasePool,
    pub rate: ExchangeRate,
    pub quote_table: QuoteTable,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(pool: DatabasePool, config: ApiConfig) -> Router {
    let state = AppState {
        pool,
        rate: ExchangeRate::new(config.usd_to_inr_rate),
        quote_table: QuoteTable::default(),
    };

    // Health and server-rendered pages
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/", get(pages::index))
        .route("/search/:country", get(pages::search_page));

    // Catalog JSON endpoints
    let catalog_routes = Router::new()
        .route("/types/:country", get(catalog::list_types))
        .route("/search/:country", get(catalog::search))
        .route("/exchange-rate", get(catalog::exchange_rate));

    // Profile registration and premium estimation
    let quote_routes = Router::new()
        .route("/upload", post(profile::upload))
        .route("/insurance", post(quote::estimate));

    let api_routes = Router::new()
        .nest("/api", catalog_routes)
        .merge(quote_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            audit_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
