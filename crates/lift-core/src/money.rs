//! # Money Module
//!
//! Provides the `Price` type for base prices and computed costs, and the
//! `Multiplier` used to discount them.
//!
//! ## Why Integer Prices?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ a ceiling turns noise into 1   │
//! │    3 × 0.7 = 2.0999999999999996     ❌ only correct by luck           │
//! │                                                                         │
//! │  OUR SOLUTION: Exact rationals, one ceiling                             │
//! │    35 × 40/100 = 1400/100 = 14 exactly                                 │
//! │    100 × 75/100 × 65/100 = 487500/10000 → ceil = 49                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lift_core::money::{Multiplier, Price};
//!
//! let base = Price::from_units(101);
//! let monday = Multiplier::reduction(35); // pay 65%
//!
//! // 101 × 0.65 = 65.65 → always rounded UP
//! assert_eq!(base.scale_ceil(monday).units(), 66);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Price Type
// =============================================================================

/// A non-negative amount in whole currency units.
///
/// Used both for the base price stored in the catalog and for the cost
/// returned to the rider. Serializes as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Price(u32);

impl Price {
    /// Creates a price from whole currency units.
    #[inline]
    pub const fn from_units(units: u32) -> Self {
        Price(units)
    }

    /// Returns the price in whole currency units.
    #[inline]
    pub const fn units(&self) -> u32 {
        self.0
    }

    /// Returns a zero price (free admission).
    #[inline]
    pub const fn zero() -> Self {
        Price(0)
    }

    /// Checks if the price is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Scales the price by `multiplier` and rounds the result **up**.
    ///
    /// ## Rounding Policy
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  CEILING ROUNDING                                                   │
    /// │                                                                     │
    /// │  65.00 → 65     65.01 → 66     65.65 → 66     65.99 → 66           │
    /// │                                                                     │
    /// │  The seller never under-charges because of a fractional unit.      │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Implementation
    /// `(units × num + den − 1) / den` in u128, so the product of any
    /// number of composed percentages is rounded exactly once.
    pub fn scale_ceil(&self, multiplier: Multiplier) -> Price {
        let numerator = self.0 as u128 * multiplier.numerator as u128;
        let denominator = multiplier.denominator as u128;
        let scaled = numerator.div_ceil(denominator);
        Price(u32::try_from(scaled).unwrap_or(u32::MAX))
    }
}

/// Display shows the bare unit count; currency formatting is a client concern.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default price is zero.
impl Default for Price {
    fn default() -> Self {
        Price::zero()
    }
}

impl From<u32> for Price {
    fn from(units: u32) -> Self {
        Price(units)
    }
}

// =============================================================================
// Multiplier
// =============================================================================

/// An exact rational factor applied to a [`Price`].
///
/// Factors compose by multiplying numerators and denominators, so
/// "75% then 35% off" stays the exact 4875/10000 until the final ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Multiplier {
    numerator: u64,
    denominator: u64,
}

impl Multiplier {
    /// The identity factor (pay the full price).
    pub const ONE: Multiplier = Multiplier {
        numerator: 1,
        denominator: 1,
    };

    /// Pay `percent`% of the price.
    #[inline]
    pub const fn percent(percent: u32) -> Self {
        Multiplier {
            numerator: percent as u64,
            denominator: 100,
        }
    }

    /// Take `percent`% off the price. Values above 100 saturate to free.
    #[inline]
    pub const fn reduction(percent: u8) -> Self {
        let kept = if percent >= 100 { 0 } else { 100 - percent as u64 };
        Multiplier {
            numerator: kept,
            denominator: 100,
        }
    }

    /// Applies `other` after `self`.
    #[inline]
    pub const fn then(self, other: Multiplier) -> Self {
        Multiplier {
            numerator: self.numerator * other.numerator,
            denominator: self.denominator * other.denominator,
        }
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Multiplier::ONE
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
