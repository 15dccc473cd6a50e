//! Quote values returned to the presentation layer.
//!
//! All three are transient: computed against one reserve snapshot,
//! returned by value, never stored. Raw fields carry exact integer units;
//! `*_display` strings are decimal-shifted per token precision for direct
//! rendering.

use rust_decimal::Decimal;
use serde::Serialize;

/// Result of pricing one swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapQuote {
    /// Gross input in raw units of the input token.
    pub amount_in: u128,
    /// Output in raw units of the output token.
    pub amount_out: u128,
    /// Fee retained by the pool, in raw input-token units.
    pub fee: u128,
    /// Guaranteed minimum output after the slippage tolerance.
    pub minimum_received: u128,
    /// Slippage tolerance the minimum was computed with, basis points.
    pub slippage_bps: u32,
    /// Effective exchange rate of this quote (output per input, decimal
    /// shifted per token precision).
    pub effective_rate: Decimal,
    /// Pre-trade marginal rate of the pool, same units as
    /// `effective_rate`.
    pub spot_rate: Decimal,
    /// Percentage degradation of the effective rate versus the spot rate.
    pub price_impact_pct: Decimal,
    /// `amount_out` formatted for display.
    pub amount_out_display: String,
    /// `minimum_received` formatted for display.
    pub minimum_received_display: String,
}

/// Result of quoting a liquidity deposit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepositQuote {
    /// Deposit amount for the pair's canonical `token0`, raw units.
    pub amount0: u128,
    /// Deposit amount for the pair's canonical `token1`, raw units.
    pub amount1: u128,
    /// LP tokens that would be minted.
    pub lp_minted: u128,
    /// Share of the post-deposit pool, as a percentage.
    pub pool_share_pct: Decimal,
    /// True if this deposit initializes an empty pool and sets its rate.
    pub initializes_pool: bool,
}

/// Result of quoting a liquidity withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WithdrawalQuote {
    /// LP tokens that would be burned.
    pub lp_burned: u128,
    /// Amount returned in the pair's canonical `token0`, raw units.
    pub amount0: u128,
    /// Amount returned in the pair's canonical `token1`, raw units.
    pub amount1: u128,
    /// `amount0` formatted for display.
    pub amount0_display: String,
    /// `amount1` formatted for display.
    pub amount1_display: String,
}
