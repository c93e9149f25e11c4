//! # Domain Types
//!
//! Core domain types used throughout the lift pass service.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   TicketType    │   │       Age       │   │   HolidaySet    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Day            │   │  u32 (years)    │   │  {NaiveDate}    │       │
//! │  │  Night          │   │  Option = none  │   │  exact y/m/d    │       │
//! │  │  Other("1jour") │   │  given          │   │  match          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  PricingRule    │   │   AgeBracket    │   │   PriceQuote    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Day            │   │  Unspecified    │   │  cost           │       │
//! │  │  Night          │   │  Child / Youth  │   │  bracket        │       │
//! │  └─────────────────┘   │  Adult / Senior │   │  reduction %    │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are value types built per request; none is long-lived.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use ts_rs::TS;

use crate::money::Price;

/// A visit date: year, month, day with a derivable weekday.
pub type CalendarDate = NaiveDate;

// =============================================================================
// Ticket Type
// =============================================================================

/// The kind of lift ticket being priced.
///
/// The tag doubles as the price catalog key, so unrecognised tags are kept
/// verbatim in [`TicketType::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketType {
    /// Daytime ticket (`"day"`).
    Day,
    /// Evening ticket (`"night"`).
    Night,
    /// Any other category, e.g. `"1jour"`. Priced with the day rules.
    Other(String),
}

impl TicketType {
    /// Returns the wire tag / catalog key.
    pub fn as_str(&self) -> &str {
        match self {
            TicketType::Day => "day",
            TicketType::Night => "night",
            TicketType::Other(tag) => tag,
        }
    }

    /// Selects the rule table used to price this ticket.
    ///
    /// Night is the only special case; everything else falls back to the
    /// day rules.
    pub fn pricing_rule(&self) -> PricingRule {
        match self {
            TicketType::Night => PricingRule::Night,
            TicketType::Day | TicketType::Other(_) => PricingRule::Day,
        }
    }
}

impl From<&str> for TicketType {
    fn from(tag: &str) -> Self {
        match tag {
            "day" => TicketType::Day,
            "night" => TicketType::Night,
            other => TicketType::Other(other.to_string()),
        }
    }
}

impl From<String> for TicketType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "day" => TicketType::Day,
            "night" => TicketType::Night,
            _ => TicketType::Other(tag),
        }
    }
}

impl From<TicketType> for String {
    fn from(ticket_type: TicketType) -> Self {
        match ticket_type {
            TicketType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Pricing Rule
// =============================================================================

/// The rule table applied to a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PricingRule {
    /// Age brackets plus the Monday reduction.
    Day,
    /// Age brackets only; no age means free.
    Night,
}

// =============================================================================
// Age
// =============================================================================

/// A rider's age in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Age(u32);

impl Age {
    /// Creates an age from whole years.
    #[inline]
    pub const fn new(years: u32) -> Self {
        Age(years)
    }

    /// Returns the age in whole years.
    #[inline]
    pub const fn years(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Age {
    fn from(years: u32) -> Self {
        Age(years)
    }
}

// =============================================================================
// Holiday Set
// =============================================================================

/// The configured holidays: dates on which the Monday reduction is withheld.
///
/// Read-only from the engine's point of view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: HashSet<CalendarDate>,
}

impl HolidaySet {
    /// Creates an empty holiday set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `date` is a holiday (exact year/month/day match).
    #[inline]
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.dates.contains(date)
    }

    /// Adds a holiday. Returns false if it was already present.
    pub fn insert(&mut self, date: CalendarDate) -> bool {
        self.dates.insert(date)
    }

    /// Removes a holiday. Returns false if it was not present.
    pub fn remove(&mut self, date: &CalendarDate) -> bool {
        self.dates.remove(date)
    }

    /// Number of holidays.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Checks if no holidays are configured.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates over the holidays in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &CalendarDate> {
        self.dates.iter()
    }
}

impl FromIterator<CalendarDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = CalendarDate>>(iter: I) -> Self {
        HolidaySet {
            dates: iter.into_iter().collect(),
        }
    }
}

impl Extend<CalendarDate> for HolidaySet {
    fn extend<I: IntoIterator<Item = CalendarDate>>(&mut self, iter: I) {
        self.dates.extend(iter);
    }
}

// =============================================================================
// Quote
// =============================================================================

/// The age bracket the rule table settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    /// No age given.
    Unspecified,
    /// Under 6: always free.
    Child,
    /// 6 to 14 on a day ticket.
    Youth,
    /// Everyone not in another bracket.
    Adult,
    /// Over 64.
    Senior,
}

/// The engine's full answer for one pricing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceQuote {
    /// The final cost charged to the rider.
    pub cost: Price,
    /// Rule table used (day or night).
    pub rule: PricingRule,
    /// Age bracket selected.
    pub bracket: AgeBracket,
    /// Monday reduction that applied to this cost (0 or 35).
    pub reduction_percent: u8,
}

/// Response body of `GET /prices`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceResponse {
    pub cost: Price,
}

impl From<PriceQuote> for PriceResponse {
    fn from(quote: PriceQuote) -> Self {
        PriceResponse { cost: quote.cost }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ticket_type_parsing() {
        assert_eq!(TicketType::from("day"), TicketType::Day);
        assert_eq!(TicketType::from("night"), TicketType::Night);
        assert_eq!(
            TicketType::from("1jour"),
            TicketType::Other("1jour".to_string())
        );
        // Tags are case-sensitive catalog keys
        assert_eq!(
            TicketType::from("Night"),
            TicketType::Other("Night".to_string())
        );
    }

    #[test]
    fn test_unknown_ticket_types_use_day_rules() {
        assert_eq!(TicketType::Night.pricing_rule(), PricingRule::Night);
        assert_eq!(TicketType::Day.pricing_rule(), PricingRule::Day);
        assert_eq!(TicketType::from("1jour").pricing_rule(), PricingRule::Day);
    }

    #[test]
    fn test_ticket_type_round_trips_its_tag() {
        for tag in ["day", "night", "1jour"] {
            let ticket_type = TicketType::from(tag);
            assert_eq!(ticket_type.as_str(), tag);
            assert_eq!(String::from(ticket_type), tag);
        }
    }

    #[test]
    fn test_ticket_type_serializes_as_tag() {
        let json = serde_json::to_string(&TicketType::Night).unwrap();
        assert_eq!(json, "\"night\"");

        let parsed: TicketType = serde_json::from_str("\"1jour\"").unwrap();
        assert_eq!(parsed, TicketType::Other("1jour".to_string()));
    }

    #[test]
    fn test_holiday_set_exact_match() {
        let holidays: HolidaySet = [date(2019, 2, 18), date(2019, 2, 25)]
            .into_iter()
            .collect();

        assert_eq!(holidays.len(), 2);
        assert!(holidays.contains(&date(2019, 2, 18)));
        assert!(!holidays.contains(&date(2020, 2, 18)));
        assert!(!holidays.contains(&date(2019, 3, 18)));
    }

    #[test]
    fn test_holiday_set_insert_remove() {
        let mut holidays = HolidaySet::new();
        assert!(holidays.is_empty());
        assert!(holidays.insert(date(2019, 3, 4)));
        assert!(!holidays.insert(date(2019, 3, 4)));
        assert!(holidays.remove(&date(2019, 3, 4)));
        assert!(holidays.is_empty());
    }

    #[test]
    fn test_price_response_shape() {
        let body = PriceResponse {
            cost: Price::from_units(35),
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"cost":35}"#);
    }
}
