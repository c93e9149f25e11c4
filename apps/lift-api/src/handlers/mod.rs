//! # HTTP Handlers
//!
//! ## Routes
//! ```text
//! ┌────────┬──────────┬──────────────────────────────┬─────────────────────┐
//! │ Method │ Path     │ Query                        │ Response            │
//! ├────────┼──────────┼──────────────────────────────┼─────────────────────┤
//! │ GET    │ /prices  │ type, age?, date?            │ 200 {"cost": n}     │
//! │ PUT    │ /prices  │ type, cost                   │ 200 (empty body)    │
//! │ GET    │ /health  │                              │ 200 "OK"            │
//! └────────┴──────────┴──────────────────────────────┴─────────────────────┘
//! ```

pub mod health;
pub mod prices;

pub use health::health_handler;
pub use prices::{get_price, set_base_price};
