//! # TeaDEX AMM Library - Precise Constant-Product Mathematics
//!
//! ## Purpose
//!
//! The mathematical core of the quoting engine: exact constant-product swap
//! pricing, price-impact measurement, and liquidity-provider share
//! accounting. Every function is pure, deterministic, and side-effect free,
//! so concurrent quotes need no synchronization.
//!
//! ## Integration Points
//!
//! - **Input Sources**: reserve snapshots from `teadex-state`, validated raw
//!   amounts from `teadex-quoter`
//! - **Output Destinations**: the quote facade, which decimal-shifts raw
//!   results for display
//! - **Precision**: all amount math in checked `u128` on raw token units;
//!   `rust_decimal` only for display-grade rates and percentages
//! - **Validation**: overflow is a typed error, never a wrap or panic
//!
//! ## Architecture Role
//!
//! Sits below the quote facade and above nothing: this crate owns the
//! formulas, the facade owns input validation and orientation, the store
//! owns state. Swap math keeps the pool invariant `x * y = k`
//! non-decreasing across the fee, and LP accounting floors every payout so
//! reserves are never overpaid.

pub mod error;
pub mod liquidity;
pub mod swap;

pub use error::AmmError;
pub use liquidity::{
    initial_lp_minted, isqrt, lp_minted, pool_share_pct, proportional_lp_minted,
    ratio_deviation_bps, withdrawal_amounts,
};
pub use swap::{amount_in_for_exact_out, price_impact_pct, swap_exact_in, SwapBreakdown};

/// Basis-point denominator (10 000 = 100%).
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Default proportional swap fee in basis points (0.3%).
pub const DEFAULT_FEE_BPS: u32 = 30;

#[cfg(test)]
mod proptests;
