//! # lift-db: Database Layer for Lift Pass Pricing
//!
//! This crate provides persistent storage for the price catalog and the
//! holiday calendar. It uses SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Lift Pass Data Flow                              │
//! │                                                                         │
//! │  HTTP handler (GET /prices)                                            │
//! │       │                                                                 │
//! │       ▼  via PriceCatalog / HolidayCalendar traits                      │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     lift-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐   ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories  │   │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │                │   │  (embedded)  │  │   │
//! │  │   │               │    │ PriceRepo      │   │              │  │   │
//! │  │   │ SqlitePool    │◄───│ HolidayRepo    │   │ 001_init.sql │  │   │
//! │  │   └───────────────┘    └────────────────┘   └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   base_price(type, cost)      holidays(holiday, description)    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (prices, holidays)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lift_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/lift.db")).await?;
//!
//! db.prices().upsert(&TicketType::Night, Price::from_units(19)).await?;
//! let holidays = db.holidays().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::holiday::HolidayRepository;
pub use repository::price::PriceRepository;
