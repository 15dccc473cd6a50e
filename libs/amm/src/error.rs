//! Error types for AMM math operations.
//!
//! Every fallible function in this crate returns [`AmmError`]; callers map
//! these onto their own caller-facing taxonomy.

use thiserror::Error;

/// Errors raised by swap pricing and liquidity accounting.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AmmError {
    /// Input amount is zero, or too small to produce any effect.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// Pool is empty, or the trade would drain the output reserve.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// Fee rate at or above 100% makes pricing undefined.
    #[error("invalid fee rate: {0} bps")]
    InvalidFee(u32),

    /// Intermediate product exceeds the 128-bit range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),
}
