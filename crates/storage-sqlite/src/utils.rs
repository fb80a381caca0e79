//! Column conversion helpers shared by the repositories.
//!
//! Decimals are stored as TEXT and counts as BIGINT, so every model converts
//! through these functions.

use std::str::FromStr;

use propvest_core::errors::{Error, Result};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// Parses a stored decimal. Values written by older tools as floats are
/// accepted too; anything unreadable becomes zero and is logged.
pub fn parse_decimal_tolerant(value: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value) {
        Ok(d) => d,
        Err(decimal_err) => match f64::from_str(value).ok().and_then(Decimal::from_f64) {
            Some(d) => d,
            None => {
                log::error!(
                    "Failed to parse {} '{}' as decimal ({}). Falling back to ZERO.",
                    field_name,
                    value,
                    decimal_err
                );
                Decimal::ZERO
            }
        },
    }
}

pub fn parse_optional_decimal(value: Option<&str>, field_name: &str) -> Option<Decimal> {
    value.map(|v| parse_decimal_tolerant(v, field_name))
}

/// Share counts are `u64` in the domain and `BIGINT` in SQLite.
pub fn count_to_db(value: u64, field_name: &str) -> Result<i64> {
    i64::try_from(value)
        .map_err(|_| Error::invalid_input(format!("{} is too large: {}", field_name, value)))
}

pub fn count_from_db(value: i64, field_name: &str) -> u64 {
    u64::try_from(value).unwrap_or_else(|_| {
        log::error!("Negative {} '{}' in database, using 0", field_name, value);
        0
    })
}

pub fn small_count_to_db(value: Option<u32>, field_name: &str) -> Result<Option<i32>> {
    value
        .map(|v| {
            i32::try_from(v)
                .map_err(|_| Error::invalid_input(format!("{} is too large: {}", field_name, v)))
        })
        .transpose()
}

pub fn small_count_from_db(value: Option<i32>) -> Option<u32> {
    value.and_then(|v| u32::try_from(v).ok())
}
