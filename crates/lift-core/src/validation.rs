//! # Validation Module
//!
//! Turns raw query-string values into domain types.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Policies                                       │
//! │                                                                         │
//! │  STRICT (rejected with ValidationError)                                │
//! │  ├── type  - it is the catalog key; no key, no price                   │
//! │  └── cost  - the catalog never stores a malformed base price           │
//! │                                                                         │
//! │  LENIENT (degrades to None)                                            │
//! │  ├── age   - "abc", "-3", ""       → no age given ("12.5" → 12)        │
//! │  └── date  - "2019/02/11", "2019-02" → no date given                   │
//! │                                                                         │
//! │  Pricing stays available on noisy input; storage stays clean.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lift_core::validation::{parse_age, parse_ticket_type, parse_visit_date};
//! use lift_core::TicketType;
//!
//! assert_eq!(parse_ticket_type(Some("night")).unwrap(), TicketType::Night);
//! assert!(parse_age(Some("abc")).is_none());
//! assert!(parse_visit_date(Some("2019-02-11")).is_some());
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Price;
use crate::types::{Age, CalendarDate, TicketType};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Strict Parsers
// =============================================================================

/// Parses the `type` query parameter.
///
/// ## Rules
/// - Must be present and not blank
/// - Any other tag is accepted; unknown tags are priced as day tickets
pub fn parse_ticket_type(raw: Option<&str>) -> ValidationResult<TicketType> {
    match raw.map(str::trim) {
        Some(tag) if !tag.is_empty() => Ok(TicketType::from(tag)),
        _ => Err(ValidationError::Required {
            field: "type".to_string(),
        }),
    }
}

/// Parses the `cost` query parameter of `PUT /prices`.
///
/// ## Rules
/// - Must be present and a whole number
/// - Must be between 0 and `u32::MAX`
///
/// ## Example
/// ```rust
/// use lift_core::validation::parse_base_price;
///
/// assert_eq!(parse_base_price(Some("35")).unwrap().units(), 35);
/// assert!(parse_base_price(Some("-1")).is_err());
/// assert!(parse_base_price(Some("12.5")).is_err());
/// assert!(parse_base_price(None).is_err());
/// ```
pub fn parse_base_price(raw: Option<&str>) -> ValidationResult<Price> {
    let raw = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => {
            return Err(ValidationError::Required {
                field: "cost".to_string(),
            })
        }
    };

    let value: i64 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "cost".to_string(),
        reason: "must be a whole number".to_string(),
    })?;

    let units = u32::try_from(value).map_err(|_| ValidationError::OutOfRange {
        field: "cost".to_string(),
        min: 0,
        max: u32::MAX as i64,
    })?;

    Ok(Price::from_units(units))
}

// =============================================================================
// Lenient Parsers
// =============================================================================

/// Parses the `age` query parameter, degrading to `None` on bad input.
///
/// ## Rules
/// - Surrounding whitespace and a leading `+` are ignored
/// - The leading run of digits is the age: `"12.5"` → 12, `"30y"` → 30
/// - No leading digit (`"abc"`, `".5"`, `""`) or a negative value → `None`
/// - Values past `u32::MAX` saturate to `u32::MAX`
///
/// ## Example
/// ```rust
/// use lift_core::validation::parse_age;
/// use lift_core::Age;
///
/// assert_eq!(parse_age(Some("12.5")), Some(Age::new(12)));
/// assert_eq!(parse_age(Some("-3")), None);
/// ```
pub fn parse_age(raw: Option<&str>) -> Option<Age> {
    let raw = raw?.trim();
    let unsigned = raw.strip_prefix('+').unwrap_or(raw);

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return None;
    }

    // Only digits remain, so the sole failure is overflow
    let years = digits.parse::<u32>().unwrap_or(u32::MAX);
    Some(Age::new(years))
}

/// Parses the `date` query parameter (`YYYY-MM-DD`), degrading to `None` on
/// bad input.
///
/// ## Rules
/// - Split on `-`: exactly three components, each an integer
/// - Month and day must be at least 1
/// - Month above 12 is constrained to 12; a day past the end of the month
///   is constrained to the month's last day (`2019-02-30` → `2019-02-28`)
pub fn parse_visit_date(raw: Option<&str>) -> Option<CalendarDate> {
    let raw = raw.map(str::trim).filter(|value| !value.is_empty())?;

    let parts: Vec<&str> = raw.split('-').collect();
    if parts.len() != 3 {
        return None;
    }

    let year: i32 = parts[0].trim().parse().ok()?;
    let month: u32 = parts[1].trim().parse().ok()?;
    let day: u32 = parts[2].trim().parse().ok()?;

    constrained_date(year, month, day)
}

/// Builds a date, clamping month and day into range.
fn constrained_date(year: i32, month: u32, day: u32) -> Option<CalendarDate> {
    if month == 0 || day == 0 {
        return None;
    }

    let month = month.min(12);
    let mut day = day.min(31);

    // At most three steps back: 31 → 28
    loop {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
        if day <= 28 {
            // Year out of chrono's range
            return None;
        }
        day -= 1;
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
    fn test_parse_ticket_type() {
        assert_eq!(parse_ticket_type(Some("day")).unwrap(), TicketType::Day);
        assert_eq!(parse_ticket_type(Some(" night ")).unwrap(), TicketType::Night);
        assert_eq!(
            parse_ticket_type(Some("1jour")).unwrap(),
            TicketType::Other("1jour".to_string())
        );

        assert!(parse_ticket_type(None).is_err());
        assert!(parse_ticket_type(Some("")).is_err());
        assert!(parse_ticket_type(Some("   ")).is_err());
    }

    #[test]
    fn test_parse_base_price() {
        assert_eq!(parse_base_price(Some("0")).unwrap(), Price::zero());
        assert_eq!(parse_base_price(Some("35")).unwrap().units(), 35);

        assert!(matches!(
            parse_base_price(None),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_base_price(Some("abc")),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_base_price(Some("-5")),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_base_price(Some("99999999999")),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age(Some("70")), Some(Age::new(70)));
        assert_eq!(parse_age(Some(" 5 ")), Some(Age::new(5)));
        assert_eq!(parse_age(Some("0")), Some(Age::new(0)));

        assert_eq!(parse_age(None), None);
        assert_eq!(parse_age(Some("")), None);
        assert_eq!(parse_age(Some("abc")), None);
        assert_eq!(parse_age(Some("-3")), None);
        assert_eq!(parse_age(Some(".5")), None);
        assert_eq!(parse_age(Some("+")), None);
    }

    #[test]
    fn test_parse_age_takes_leading_integer() {
        assert_eq!(parse_age(Some("12.5")), Some(Age::new(12)));
        assert_eq!(parse_age(Some("30years")), Some(Age::new(30)));
        assert_eq!(parse_age(Some("+70")), Some(Age::new(70)));
        assert_eq!(parse_age(Some("007")), Some(Age::new(7)));
    }

    #[test]
    fn test_parse_age_saturates_on_overflow() {
        assert_eq!(parse_age(Some("4294967295")), Some(Age::new(u32::MAX)));
        assert_eq!(parse_age(Some("4294967296")), Some(Age::new(u32::MAX)));
        assert_eq!(
            parse_age(Some("99999999999999999999999")),
            Some(Age::new(u32::MAX))
        );
    }

    #[test]
    fn test_parsed_age_drives_pricing() {
        use crate::pricing::compute_cost;
        use crate::types::HolidaySet;

        let holidays = HolidaySet::new();

        // A fractional youth age keeps the youth rate
        let day = compute_cost(
            &TicketType::Day,
            parse_age(Some("12.5")),
            None,
            Price::from_units(100),
            &holidays,
        );
        assert_eq!(day.units(), 70);

        // A huge age is still a senior, not "no age"
        let night = compute_cost(
            &TicketType::Night,
            parse_age(Some("4294967296")),
            None,
            Price::from_units(50),
            &holidays,
        );
        assert_eq!(night.units(), 20);
    }

    #[test]
    fn test_parse_visit_date() {
        assert_eq!(parse_visit_date(Some("2019-02-11")), Some(date(2019, 2, 11)));
        assert_eq!(parse_visit_date(Some("2019-2-5")), Some(date(2019, 2, 5)));

        assert_eq!(parse_visit_date(None), None);
        assert_eq!(parse_visit_date(Some("")), None);
        assert_eq!(parse_visit_date(Some("2019-02")), None);
        assert_eq!(parse_visit_date(Some("2019-02-11-01")), None);
        assert_eq!(parse_visit_date(Some("2019/02/11")), None);
        assert_eq!(parse_visit_date(Some("2019-aa-11")), None);
    }

    #[test]
    fn test_parse_visit_date_constrains_out_of_range() {
        assert_eq!(parse_visit_date(Some("2019-02-30")), Some(date(2019, 2, 28)));
        assert_eq!(parse_visit_date(Some("2020-02-31")), Some(date(2020, 2, 29)));
        assert_eq!(parse_visit_date(Some("2019-13-05")), Some(date(2019, 12, 5)));
        assert_eq!(parse_visit_date(Some("2019-04-99")), Some(date(2019, 4, 30)));

        assert_eq!(parse_visit_date(Some("2019-00-05")), None);
        assert_eq!(parse_visit_date(Some("2019-02-00")), None);
    }
}
