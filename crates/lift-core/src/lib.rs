//! # lift-core: Pure Pricing Logic for Lift Passes
//!
//! This crate is the **heart** of the lift pass service. It contains the
//! pricing rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Lift Pass Pricing Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP Service (lift-api)                      │   │
//! │  │          PUT /prices  ──►  GET /prices  ──►  {"cost": 35}       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lift-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │TicketType │  │   Price   │  │   quote   │  │  parse_*  │  │   │
//! │  │   │HolidaySet │  │Multiplier │  │compute_.. │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   catalog: PriceCatalog / HolidayCalendar capability traits     │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    lift-db (Database Layer)                     │   │
//! │  │          SQLite base prices, holidays, migrations               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (TicketType, Age, HolidaySet, PriceQuote)
//! - [`money`] - Integer price type with ceiling-rounded multipliers
//! - [`pricing`] - The pricing rule engine
//! - [`catalog`] - Price catalog / holiday calendar capability traits
//! - [`validation`] - Query string parsing policy
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, no hidden clock
//! 2. **No I/O**: storage is reached only through the [`catalog`] traits
//! 3. **Integer Money**: prices are whole currency units, never floats
//! 4. **Round Up**: every fractional cost is rounded up (ceiling)
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use lift_core::{pricing, Age, HolidaySet, Price, TicketType};
//!
//! let monday = NaiveDate::from_ymd_opt(2019, 2, 11).unwrap();
//! let cost = pricing::compute_cost(
//!     &TicketType::Day,
//!     Some(Age::new(70)),
//!     Some(monday),
//!     Price::from_units(100),
//!     &HolidaySet::default(),
//! );
//!
//! // 100 × 0.75 × 0.65 = 48.75 → 49
//! assert_eq!(cost.units(), 49);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{HolidayCalendar, InMemoryCatalog, PriceCatalog};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Multiplier, Price};
pub use types::*;

// =============================================================================
// Pricing Constants
// =============================================================================

/// Riders younger than this ride for free on every ticket type.
pub const FREE_ADMISSION_AGE_LIMIT: u32 = 6;

/// Day-ticket riders younger than this (and at least 6) pay the youth rate.
pub const YOUTH_AGE_LIMIT: u32 = 15;

/// Riders strictly older than this pay the senior rate.
pub const SENIOR_AGE_THRESHOLD: u32 = 64;

/// Percentage taken off day tickets on non-holiday Mondays.
pub const MONDAY_REDUCTION_PERCENT: u8 = 35;

/// Share of the base price a senior pays for a night ticket.
pub const NIGHT_SENIOR_PERCENT: u32 = 40;

/// Share of the base price a youth pays for a day ticket.
///
/// ## Business Reason
/// The youth rate is flat: the Monday reduction is never stacked on top of it.
pub const DAY_YOUTH_PERCENT: u32 = 70;

/// Share of the base price a senior pays for a day ticket (before any
/// Monday reduction).
pub const DAY_SENIOR_PERCENT: u32 = 75;
