//! Constant-product swap pricing with exact integer arithmetic.
//!
//! The invariant is `reserve_in * reserve_out = k`. Fees are deducted from
//! the input amount before the pricing formula is applied and rounded up,
//! in favor of the pool:
//!
//! 1. `fee = ceil(amount_in * fee_bps / 10_000)`
//! 2. `net_in = amount_in - fee`
//! 3. `amount_out = floor(net_in * reserve_out / (reserve_in + net_in))`
//!
//! Because the fee stays in the pool and the output is floored,
//! `(reserve_in + net_in) * (reserve_out - amount_out) >= k` after every
//! quote.

use crate::error::AmmError;
use crate::BPS_DENOMINATOR;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The raw-unit breakdown of one priced swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapBreakdown {
    /// Gross input, as supplied by the trader.
    pub amount_in: u128,
    /// Input remaining after the fee.
    pub net_in: u128,
    /// Fee retained by the pool, in input-token units.
    pub fee: u128,
    /// Output paid from the opposite reserve.
    pub amount_out: u128,
}

fn check_fee(fee_bps: u32) -> Result<u128, AmmError> {
    let fee = u128::from(fee_bps);
    if fee >= BPS_DENOMINATOR {
        return Err(AmmError::InvalidFee(fee_bps));
    }
    Ok(fee)
}

/// Prices an exact-in swap against the given oriented reserves.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] for a zero input or one fully consumed by
///   the fee.
/// - [`AmmError::InsufficientLiquidity`] for an empty pool or an output
///   that would reach or exceed `reserve_out`.
/// - [`AmmError::Overflow`] if an intermediate product exceeds `u128`.
pub fn swap_exact_in(
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
    fee_bps: u32,
) -> Result<SwapBreakdown, AmmError> {
    let fee_rate = check_fee(fee_bps)?;
    if amount_in == 0 {
        return Err(AmmError::InvalidAmount("input amount is zero"));
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(AmmError::InsufficientLiquidity);
    }

    // Fee rounds up so the pool never undercollects.
    let fee = amount_in
        .checked_mul(fee_rate)
        .ok_or(AmmError::Overflow("fee numerator"))?
        .div_ceil(BPS_DENOMINATOR);
    let net_in = amount_in - fee;
    if net_in == 0 {
        return Err(AmmError::InvalidAmount("input fully consumed by fee"));
    }

    let numerator = net_in
        .checked_mul(reserve_out)
        .ok_or(AmmError::Overflow("output numerator"))?;
    let denominator = reserve_in
        .checked_add(net_in)
        .ok_or(AmmError::Overflow("output denominator"))?;
    let amount_out = numerator / denominator;

    if amount_out == 0 || amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    Ok(SwapBreakdown {
        amount_in,
        net_in,
        fee,
        amount_out,
    })
}

/// Prices the input required for an exact output, rounded up so the input
/// always suffices.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] for a zero output.
/// - [`AmmError::InsufficientLiquidity`] if `amount_out >= reserve_out` or
///   the pool is empty.
/// - [`AmmError::Overflow`] if an intermediate product exceeds `u128`.
pub fn amount_in_for_exact_out(
    amount_out: u128,
    reserve_in: u128,
    reserve_out: u128,
    fee_bps: u32,
) -> Result<SwapBreakdown, AmmError> {
    let fee_rate = check_fee(fee_bps)?;
    if amount_out == 0 {
        return Err(AmmError::InvalidAmount("output amount is zero"));
    }
    if reserve_in == 0 || reserve_out == 0 || amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    let numerator = reserve_in
        .checked_mul(amount_out)
        .ok_or(AmmError::Overflow("input numerator"))?;
    let net_in = numerator.div_ceil(reserve_out - amount_out);

    // Gross up by the fee, again rounding against the trader.
    let amount_in = net_in
        .checked_mul(BPS_DENOMINATOR)
        .ok_or(AmmError::Overflow("fee gross-up"))?
        .div_ceil(BPS_DENOMINATOR - fee_rate);

    Ok(SwapBreakdown {
        amount_in,
        net_in,
        fee: amount_in - net_in,
        amount_out,
    })
}

fn raw_decimal(value: u128, context: &'static str) -> Result<Decimal, AmmError> {
    let mantissa = i128::try_from(value).map_err(|_| AmmError::Overflow(context))?;
    Decimal::try_from_i128_with_scale(mantissa, 0).map_err(|_| AmmError::Overflow(context))
}

/// Price impact of a quoted swap, as a percentage.
///
/// Defined as the deviation of the effective rate from the pre-trade
/// marginal rate: `(1 - (amount_out / amount_in) / (reserve_out /
/// reserve_in)) * 100`. The quoted output already carries the fee, so the
/// fee contributes to the impact. Raw units cancel, so no decimal shifting
/// is needed here.
pub fn price_impact_pct(
    amount_in: u128,
    amount_out: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<Decimal, AmmError> {
    if amount_in == 0 || reserve_in == 0 || reserve_out == 0 {
        return Err(AmmError::InvalidAmount("price impact inputs must be positive"));
    }

    let effective = raw_decimal(amount_out, "impact effective rate")?
        / raw_decimal(amount_in, "impact effective rate")?;
    let spot = raw_decimal(reserve_out, "impact spot rate")?
        / raw_decimal(reserve_in, "impact spot rate")?;

    let impact = (dec!(1) - effective / spot) * dec!(100);
    // Decimal division rounds; never report a negative impact.
    Ok(impact.max(Decimal::ZERO))
}
