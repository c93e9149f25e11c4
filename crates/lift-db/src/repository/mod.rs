//! # Repository Module
//!
//! Database repository implementations for the lift pass service.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  catalog.base_price(&TicketType::Night)                         │
//! │       ▼                                                                 │
//! │  PriceRepository (impl PriceCatalog)                                   │
//! │  ├── get(&self, ticket_type)                                           │
//! │  ├── upsert(&self, ticket_type, price)                                 │
//! │  └── list(&self)                                                       │
//! │                                                                         │
//! │  HolidayRepository (impl HolidayCalendar)                              │
//! │  ├── list(&self)                                                       │
//! │  ├── insert(&self, date, description)                                  │
//! │  └── remove(&self, date)                                               │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`PriceRepository`](price::PriceRepository) - Base price per ticket type
//! - [`HolidayRepository`](holiday::HolidayRepository) - Holiday calendar

pub mod holiday;
pub mod price;
