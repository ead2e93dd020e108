//! Conversions from raw text fields into the numeric values the evaluator
//! works with. Every format assumption about the input tables lives here.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::fmt::Formatter;

/// Stored running costs are quoted per 100 distance units.
pub const RUNNING_COST_SCALE: f64 = 100.0;

/// Symbols accepted in front of a monetary amount.
pub const CURRENCY_SYMBOLS: [char; 3] = ['£', '$', '€'];

/// A text field that does not hold the kind of number it should.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidNumber {
    raw: String,
    expected: &'static str,
}

impl InvalidNumber {
    fn new(raw: &str, expected: &'static str) -> Self {
        Self {
            raw: raw.to_string(),
            expected,
        }
    }
}

impl fmt::Display for InvalidNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} is not {}", self.raw, self.expected)
    }
}

impl Error for InvalidNumber {}

/// Parses a monetary literal such as `£7`, `£1,899.50` or `399`.
///
/// At most one currency symbol may precede the digits, and thousands
/// separators are ignored. A minus sign may appear before or after the
/// symbol. Anything else, including `NaN` and infinities, is rejected.
pub fn parse_currency(raw: &str) -> Result<f64, InvalidNumber> {
    let invalid = || InvalidNumber::new(raw, "a monetary amount");

    let text = raw.trim();
    let (mut negative, text) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let text = text.strip_prefix(&CURRENCY_SYMBOLS[..]).unwrap_or(text);
    let text = match text.strip_prefix('-') {
        Some(rest) if !negative => {
            negative = true;
            rest
        }
        _ => text,
    };

    let digits: String = text.chars().filter(|c| *c != ',').collect();
    if !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Err(invalid());
    }

    let value: f64 = digits.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }

    Ok(if negative { -value } else { value })
}

/// Parses a stored running cost and normalises it to cost per seat per
/// single distance unit.
pub fn parse_running_cost(raw: &str) -> Result<f64, InvalidNumber> {
    Ok(parse_currency(raw)? / RUNNING_COST_SCALE)
}

/// Parses a distance or range. Must be finite and not negative.
pub fn parse_distance(raw: &str) -> Result<f64, InvalidNumber> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(InvalidNumber::new(raw, "a non-negative distance")),
    }
}

/// serde adapter for currency-prefixed fields.
pub fn currency<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_currency(&raw).map_err(de::Error::custom)
}

/// serde adapter for running-cost fields; see [`parse_running_cost`].
pub fn running_cost<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_running_cost(&raw).map_err(de::Error::custom)
}

/// serde adapter for distance and range fields.
pub fn distance<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_distance(&raw).map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_strip_currency_symbol() {
        assert_eq!(parse_currency("£7").unwrap(), 7.0);
        assert_eq!(parse_currency("$12.50").unwrap(), 12.5);
        assert_eq!(parse_currency("€.5").unwrap(), 0.5);
        assert_eq!(parse_currency(" £1,899 ").unwrap(), 1899.0);
    }

    #[test]
    fn should_parse_plain_numbers() {
        assert_eq!(parse_currency("399").unwrap(), 399.0);
        assert_eq!(parse_currency("0.5").unwrap(), 0.5);
    }

    #[test]
    fn should_parse_negative_amounts() {
        assert_eq!(parse_currency("-£3").unwrap(), -3.0);
        assert_eq!(parse_currency("£-3").unwrap(), -3.0);
        assert!(parse_currency("-£-3").is_err());
    }

    #[test]
    fn should_reject_non_numeric_amounts() {
        assert!(parse_currency("£").is_err());
        assert!(parse_currency("seven").is_err());
        assert!(parse_currency("").is_err());

        // Only a single currency symbol may be dropped; any other leading
        // text makes the amount invalid.
        assert!(parse_currency("N/A399").is_err());
        assert!(parse_currency("abc999").is_err());
        assert!(parse_currency("x1899").is_err());
        assert!(parse_currency("££5").is_err());
        assert!(parse_currency("£NaN").is_err());
        assert!(parse_currency("inf").is_err());
    }

    #[test]
    fn should_name_the_bad_value_in_errors() {
        let err = parse_currency("N/A399").unwrap_err();
        assert_eq!(err.to_string(), "\"N/A399\" is not a monetary amount");
    }

    #[test]
    fn should_scale_running_cost_per_hundred_units() {
        // A stored figure of £7 is the cost per seat for 100 units of
        // distance, so a single unit costs 7p.
        let cost = parse_running_cost("£7").unwrap();
        assert!((cost - 0.07).abs() < 1e-12);
    }

    #[test]
    fn should_parse_distances() {
        assert_eq!(parse_distance("5376").unwrap(), 5376.0);
        assert_eq!(parse_distance(" 0 ").unwrap(), 0.0);
        assert_eq!(parse_distance("2650.5").unwrap(), 2650.5);
    }

    #[test]
    fn should_reject_invalid_distances() {
        assert!(parse_distance("NaN").is_err());
        assert!(parse_distance("inf").is_err());
        assert!(parse_distance("-10").is_err());
        assert!(parse_distance("far").is_err());
        assert!(parse_distance("").is_err());
    }
}
