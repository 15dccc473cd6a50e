//! Exact decimal-string parsing and display formatting for token amounts.
//!
//! User input crosses into the engine exactly once, here, as a
//! `rust_decimal::Decimal`; everything downstream works on raw `u128`
//! units. Floating point is never involved, so a 6-decimal and an
//! 18-decimal token get the same exactness guarantees.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing a user-supplied amount string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    /// Empty or whitespace-only input.
    #[error("amount is empty")]
    Empty,

    /// Not a decimal number.
    #[error("invalid decimal amount: '{0}'")]
    Invalid(String),

    /// Zero or negative amounts can never be quoted.
    #[error("amount must be positive: '{0}'")]
    NotPositive(String),

    /// More fractional digits than the token's precision can represent.
    #[error("amount has {actual} fractional digits but the token supports {max}")]
    ExcessPrecision { actual: u32, max: u8 },

    /// Raw value does not fit the engine's integer range.
    #[error("amount out of range: '{0}'")]
    OutOfRange(String),
}

/// Parses a decimal string into raw integer units at the given precision.
///
/// `"1.5"` at 6 decimals becomes `1_500_000`. Input with more fractional
/// digits than `decimals` is rejected rather than silently truncated.
pub fn parse_amount(input: &str, decimals: u8) -> Result<u128, ParseAmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let value = Decimal::from_str(trimmed)
        .map_err(|_| ParseAmountError::Invalid(trimmed.to_string()))?
        .normalize();

    if value <= Decimal::ZERO {
        return Err(ParseAmountError::NotPositive(trimmed.to_string()));
    }
    if value.scale() > u32::from(decimals) {
        return Err(ParseAmountError::ExcessPrecision {
            actual: value.scale(),
            max: decimals,
        });
    }

    let scale = Decimal::from(10u64.pow(u32::from(decimals)));
    let raw = value
        .checked_mul(scale)
        .ok_or_else(|| ParseAmountError::OutOfRange(trimmed.to_string()))?;

    raw.to_u128()
        .ok_or_else(|| ParseAmountError::OutOfRange(trimmed.to_string()))
}

/// Parses a decimal string that may be zero, e.g. an LP balance.
///
/// Same rules as [`parse_amount`] except that `"0"` is accepted.
pub fn parse_balance(input: &str, decimals: u8) -> Result<u128, ParseAmountError> {
    let trimmed = input.trim();
    match parse_amount(trimmed, decimals) {
        Err(ParseAmountError::NotPositive(_)) => {
            let value = Decimal::from_str(trimmed)
                .map_err(|_| ParseAmountError::Invalid(trimmed.to_string()))?;
            if value.is_zero() {
                Ok(0)
            } else {
                Err(ParseAmountError::NotPositive(trimmed.to_string()))
            }
        }
        other => other,
    }
}

/// Formats raw integer units as a decimal string, trimming trailing zeros.
pub fn format_amount(raw: u128, decimals: u8) -> String {
    if decimals == 0 {
        return raw.to_string();
    }
    let scale = 10u128.pow(u32::from(decimals));
    let whole = raw / scale;
    let frac = raw % scale;
    if frac == 0 {
        return whole.to_string();
    }
    let frac_str = format!("{:0width$}", frac, width = decimals as usize);
    format!("{}.{}", whole, frac_str.trim_end_matches('0'))
}

/// Converts a raw amount to a `Decimal` scaled by the token's precision.
///
/// Display-grade only: used for rates and percentages, never for the
/// integer swap math itself.
pub fn to_decimal(raw: u128, decimals: u8) -> Result<Decimal, ParseAmountError> {
    let mantissa =
        i128::try_from(raw).map_err(|_| ParseAmountError::OutOfRange(raw.to_string()))?;
    Decimal::try_from_i128_with_scale(mantissa, u32::from(decimals))
        .map_err(|_| ParseAmountError::OutOfRange(raw.to_string()))
}
