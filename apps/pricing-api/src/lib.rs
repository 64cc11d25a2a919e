//! # Timberline Pricing API
//!
//! HTTP service exposing the GST pricing engine to the storefront and the
//! back office variant forms.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Pricing API Routes                              │
//! │                                                                         │
//! │  ┌────────────────────────┐  ┌────────────────────────┐                │
//! │  │  Pricing               │  │  Cart                  │                │
//! │  │                        │  │                        │                │
//! │  │ • POST pricing/quote   │  │ • POST cart/totals     │                │
//! │  │ • POST pricing/discount│  │                        │                │
//! │  │ • POST variants/pricing│  │                        │                │
//! │  └────────────────────────┘  └────────────────────────┘                │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Middleware: TraceLayer (tower-http) → CorsLayer (permissive)    │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `PRICING_API_HOST` - Bind address (default: 0.0.0.0)
//! - `PRICING_API_PORT` - HTTP port (default: 8083)
//! - `DEFAULT_GST_RATE` - Rate for quotes without one (default: 18)
//! - `RUST_LOG` - Log filter (default: info)

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// Re-exports
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult, ErrorCode};

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        AppState {
            config: Arc::new(config),
        }
    }
}

/// Builds the service router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/v1/pricing/quote", post(routes::quote))
        .route("/api/v1/pricing/discount", post(routes::discount))
        .route("/api/v1/variants/pricing", post(routes::variant_pricing))
        .route("/api/v1/cart/totals", post(routes::cart_totals))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
