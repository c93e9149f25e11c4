//! # lift-api: HTTP Pricing Service
//!
//! Exposes the lift pass pricing engine over HTTP.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Client ──► axum Router ──► handlers::prices ──► lift_core::pricing    │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                              AppState                                   │
//! │                     ┌────────────┴────────────┐                        │
//! │                     ▼                         ▼                        │
//! │          Arc<dyn PriceCatalog>    Arc<dyn HolidayCalendar>             │
//! │                     │                         │                        │
//! │                     └──── lift_db (SQLite) ───┘                        │
//! │                           or InMemoryCatalog                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use lift_core::{HolidayCalendar, PriceCatalog};
use lift_db::Database;

pub mod config;
pub mod error;
pub mod handlers;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult, ErrorCode};

/// Shared handler state: the two collaborators of the pricing engine.
#[derive(Clone)]
pub struct AppState {
    pub prices: Arc<dyn PriceCatalog>,
    pub holidays: Arc<dyn HolidayCalendar>,
}

impl AppState {
    /// Creates state from any catalog and calendar implementation.
    pub fn new(prices: Arc<dyn PriceCatalog>, holidays: Arc<dyn HolidayCalendar>) -> Self {
        AppState { prices, holidays }
    }

    /// Creates state backed by the SQLite repositories of `db`.
    pub fn from_database(db: &Database) -> Self {
        AppState::new(Arc::new(db.prices()), Arc::new(db.holidays()))
    }
}

/// Builds the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/prices",
            get(handlers::get_price).put(handlers::set_base_price),
        )
        .route("/health", get(handlers::health_handler))
        .with_state(state)
}
