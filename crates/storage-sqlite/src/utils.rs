//! Conversion helpers shared by the storage models.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a decimal column stored as TEXT.
///
/// Rows are only ever written from `Decimal` values, so a parse failure
/// means the column was edited out-of-band; log it and fall back to zero
/// rather than poisoning the whole query.
pub fn parse_decimal(value: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value) {
        Ok(decimal) => decimal,
        Err(err) => {
            log::error!("Failed to parse {} '{}': {}", field_name, value, err);
            Decimal::ZERO
        }
    }
}

/// Same as [`parse_decimal`] for nullable columns.
pub fn parse_optional_decimal(value: Option<&str>, field_name: &str) -> Option<Decimal> {
    value.map(|v| parse_decimal(v, field_name))
}
