//! # Catalog Capabilities
//!
//! The two collaborators the pricing engine needs, expressed as traits so
//! storage can be swapped without touching the rules.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET /prices?type=night&age=70                                          │
//! │       │                                                                 │
//! │       ├──► PriceCatalog::base_price(&Night)   ──► Some(19)             │
//! │       │                                                                 │
//! │       ├──► HolidayCalendar::holidays()        ──► {2019-02-18, ...}    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  pricing::quote(..)  ← pure, no I/O                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  {"cost": 8}                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Implementations:
//! - `lift_db::PriceRepository` / `lift_db::HolidayRepository` (SQLite)
//! - [`InMemoryCatalog`] (process-local, used by tests)

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::money::Price;
use crate::types::{CalendarDate, HolidaySet, TicketType};

/// Stores and retrieves the base price of each ticket type.
#[async_trait]
pub trait PriceCatalog: Send + Sync {
    /// Returns the base price for `ticket_type`, or `None` if never set.
    async fn base_price(&self, ticket_type: &TicketType) -> CoreResult<Option<Price>>;

    /// Stores `price` for `ticket_type`, replacing any previous value.
    async fn set_base_price(&self, ticket_type: &TicketType, price: Price) -> CoreResult<()>;
}

/// Enumerates the configured holidays.
#[async_trait]
pub trait HolidayCalendar: Send + Sync {
    /// Returns every configured holiday.
    async fn holidays(&self) -> CoreResult<HolidaySet>;
}

// =============================================================================
// In-Memory Implementation
// =============================================================================

/// A process-local price catalog and holiday calendar.
///
/// ## Thread Safety
/// Both maps sit behind `RwLock`s; a reader sees either the value before or
/// after a concurrent `set_base_price`, never a partial one.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    prices: RwLock<HashMap<String, Price>>,
    holidays: RwLock<HolidaySet>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-loaded with prices and holidays.
    pub fn with_data<P, H>(prices: P, holidays: H) -> Self
    where
        P: IntoIterator<Item = (TicketType, Price)>,
        H: IntoIterator<Item = CalendarDate>,
    {
        InMemoryCatalog {
            prices: RwLock::new(
                prices
                    .into_iter()
                    .map(|(ticket_type, price)| (String::from(ticket_type), price))
                    .collect(),
            ),
            holidays: RwLock::new(holidays.into_iter().collect()),
        }
    }

    /// Adds a holiday.
    pub fn add_holiday(&self, date: CalendarDate) -> CoreResult<()> {
        self.holidays
            .write()
            .map_err(|_| poisoned("holidays"))?
            .insert(date);
        Ok(())
    }
}

fn poisoned(what: &str) -> CoreError {
    CoreError::Storage(format!("{} lock poisoned", what))
}

#[async_trait]
impl PriceCatalog for InMemoryCatalog {
    async fn base_price(&self, ticket_type: &TicketType) -> CoreResult<Option<Price>> {
        let prices = self.prices.read().map_err(|_| poisoned("prices"))?;
        Ok(prices.get(ticket_type.as_str()).copied())
    }

    async fn set_base_price(&self, ticket_type: &TicketType, price: Price) -> CoreResult<()> {
        let mut prices = self.prices.write().map_err(|_| poisoned("prices"))?;
        prices.insert(ticket_type.as_str().to_string(), price);
        Ok(())
    }
}

#[async_trait]
impl HolidayCalendar for InMemoryCatalog {
    async fn holidays(&self) -> CoreResult<HolidaySet> {
        let holidays = self.holidays.read().map_err(|_| poisoned("holidays"))?;
        Ok(holidays.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
