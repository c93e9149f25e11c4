//! # Error Types
//!
//! Domain-specific error types for lift-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lift-core errors (this file)                                          │
//! │  ├── CoreError        - Catalog / storage failures seen by callers     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  lift-db errors (separate crate)                                       │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  HTTP errors (in app)                                                  │
//! │  └── ApiError         - What clients see (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ← DbError;  CoreError → ApiError    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pricing engine itself never fails: it is total over its inputs.
//! Every error here comes from parsing input or from a collaborator.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors surfaced through the catalog capability traits.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No base price has been configured for the ticket type.
    ///
    /// ## When This Occurs
    /// - `GET /prices?type=week` before anyone ran `PUT /prices?type=week`
    #[error("Base price not found for ticket type: {0}")]
    BasePriceNotFound(String),

    /// The backing store failed (connection lost, query error, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Only inputs the catalog would otherwise store or key on are rejected.
/// Noisy pricing inputs (age, date) degrade to "absent" instead.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., non-numeric cost).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
