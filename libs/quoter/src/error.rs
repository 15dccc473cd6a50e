//! The caller-facing error taxonomy.
//!
//! Every quote operation returns one of these kinds; all are plain values,
//! and all but `Math` are recoverable by the caller correcting input or
//! waiting for reserves to change.

use teadex_amm::AmmError;
use teadex_types::{PairError, PairKey, ParseAmountError};
use thiserror::Error;

/// Typed errors returned by the quote facade.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// Non-positive, non-numeric, or precision-mismatched amount input.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// The two tokens do not form a valid pair.
    #[error(transparent)]
    Pair(#[from] PairError),

    /// The pair has never been initialized.
    #[error("pair not found: {0}")]
    PairNotFound(PairKey),

    /// Pool is empty, or the trade exceeds available reserves.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// Withdrawal exceeds the holder's LP balance.
    #[error("insufficient LP balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: u128, available: u128 },

    /// Deposit amounts deviate from the pool ratio beyond the configured
    /// tolerance.
    #[error("deposit ratio off by {deviation_bps} bps, tolerance is {tolerance_bps} bps")]
    RatioMismatch {
        deviation_bps: u128,
        tolerance_bps: u32,
    },

    /// Caller-supplied slippage tolerance outside the configured bounds.
    #[error("slippage tolerance {0} bps is out of range")]
    InvalidSlippage(u32),

    /// Internal arithmetic failure (overflow); not caller-recoverable.
    #[error("math error: {0}")]
    Math(AmmError),
}

impl From<ParseAmountError> for QuoteError {
    fn from(err: ParseAmountError) -> Self {
        Self::InvalidAmount(err.to_string())
    }
}

impl From<AmmError> for QuoteError {
    fn from(err: AmmError) -> Self {
        match err {
            AmmError::InvalidAmount(reason) => Self::InvalidAmount(reason.to_string()),
            AmmError::InsufficientLiquidity => Self::InsufficientLiquidity,
            other => Self::Math(other),
        }
    }
}
