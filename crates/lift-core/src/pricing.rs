//! # Pricing Engine
//!
//! Derives the cost of a lift ticket from fully-resolved inputs.
//!
//! ## Rule Tables
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NIGHT TICKET                                                           │
//! │  ─────────────                                                          │
//! │  age absent or < 6   → 0                                               │
//! │  age > 64            → ceil(base × 0.40)                               │
//! │  otherwise           → base                                            │
//! │                                                                         │
//! │  DAY TICKET (and every other type)                                     │
//! │  ───────────────────────────────                                       │
//! │  r = 35 on a Monday that is not a holiday, else 0                      │
//! │                                                                         │
//! │  age absent          → ceil(base × (1 − r/100))                        │
//! │  age < 6             → 0                                               │
//! │  age < 15            → ceil(base × 0.70)       (r never applies)       │
//! │  age > 64            → ceil(base × 0.75 × (1 − r/100))                 │
//! │  otherwise           → ceil(base × (1 − r/100))                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure: no clock, no storage, no shared state.
//! The caller resolves the base price and holidays first.

use chrono::{Datelike, Weekday};

use crate::money::{Multiplier, Price};
use crate::types::{Age, AgeBracket, CalendarDate, HolidaySet, PriceQuote, PricingRule, TicketType};
use crate::{
    DAY_SENIOR_PERCENT, DAY_YOUTH_PERCENT, FREE_ADMISSION_AGE_LIMIT, MONDAY_REDUCTION_PERCENT,
    NIGHT_SENIOR_PERCENT, SENIOR_AGE_THRESHOLD, YOUTH_AGE_LIMIT,
};

/// Computes the cost of a ticket.
///
/// ## Arguments
/// * `ticket_type` - Night tickets use the night table, all others the day table
/// * `age` - `None` selects the no-age branch of the table
/// * `date` - `None` means no Monday reduction is evaluated
/// * `base_price` - Resolved from the price catalog by the caller
/// * `holidays` - Resolved from the holiday calendar by the caller
///
/// ## Example
/// ```rust
/// use lift_core::{pricing, Age, HolidaySet, Price, TicketType};
///
/// let cost = pricing::compute_cost(
///     &TicketType::Night,
///     Some(Age::new(70)),
///     None,
///     Price::from_units(50),
///     &HolidaySet::default(),
/// );
/// assert_eq!(cost.units(), 20);
/// ```
pub fn compute_cost(
    ticket_type: &TicketType,
    age: Option<Age>,
    date: Option<CalendarDate>,
    base_price: Price,
    holidays: &HolidaySet,
) -> Price {
    quote(ticket_type, age, date, base_price, holidays).cost
}

/// Prices a ticket and reports which bracket and reduction produced the cost.
pub fn quote(
    ticket_type: &TicketType,
    age: Option<Age>,
    date: Option<CalendarDate>,
    base_price: Price,
    holidays: &HolidaySet,
) -> PriceQuote {
    match ticket_type.pricing_rule() {
        PricingRule::Night => night_quote(age, base_price),
        PricingRule::Day => day_quote(age, date, base_price, holidays),
    }
}

/// Returns the Monday reduction in percent for `date`: 35 on a non-holiday
/// Monday, 0 otherwise (including when no date is given).
pub fn monday_reduction(date: Option<CalendarDate>, holidays: &HolidaySet) -> u8 {
    match date {
        Some(date) if date.weekday() == Weekday::Mon && !holidays.contains(&date) => {
            MONDAY_REDUCTION_PERCENT
        }
        _ => 0,
    }
}

/// Maps an age onto the bracket boundaries shared by both tables.
fn bracket_for(age: Option<Age>) -> AgeBracket {
    match age.map(|a| a.years()) {
        None => AgeBracket::Unspecified,
        Some(years) if years < FREE_ADMISSION_AGE_LIMIT => AgeBracket::Child,
        Some(years) if years < YOUTH_AGE_LIMIT => AgeBracket::Youth,
        Some(years) if years > SENIOR_AGE_THRESHOLD => AgeBracket::Senior,
        Some(_) => AgeBracket::Adult,
    }
}

fn night_quote(age: Option<Age>, base_price: Price) -> PriceQuote {
    let bracket = bracket_for(age);

    let cost = match bracket {
        // Night tickets without an age are free, same as young children
        AgeBracket::Unspecified | AgeBracket::Child => Price::zero(),
        AgeBracket::Senior => base_price.scale_ceil(Multiplier::percent(NIGHT_SENIOR_PERCENT)),
        // Youth has no separate night rate
        AgeBracket::Youth | AgeBracket::Adult => base_price,
    };

    PriceQuote {
        cost,
        rule: PricingRule::Night,
        bracket,
        reduction_percent: 0,
    }
}

fn day_quote(
    age: Option<Age>,
    date: Option<CalendarDate>,
    base_price: Price,
    holidays: &HolidaySet,
) -> PriceQuote {
    let bracket = bracket_for(age);
    let reduction = monday_reduction(date, holidays);
    let monday = Multiplier::reduction(reduction);

    let (cost, applied) = match bracket {
        AgeBracket::Child => (Price::zero(), 0),
        AgeBracket::Youth => (
            base_price.scale_ceil(Multiplier::percent(DAY_YOUTH_PERCENT)),
            0,
        ),
        AgeBracket::Senior => (
            base_price.scale_ceil(Multiplier::percent(DAY_SENIOR_PERCENT).then(monday)),
            reduction,
        ),
        AgeBracket::Unspecified | AgeBracket::Adult => (base_price.scale_ceil(monday), reduction),
    };

    PriceQuote {
        cost,
        rule: PricingRule::Day,
        bracket,
        reduction_percent: applied,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
