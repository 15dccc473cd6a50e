//! Per-pair reserve balances and LP supply.
//!
//! Quantities are raw integer units in the pair's canonical token order.
//! The empty-pool invariant is enforced at construction: a pool with zero
//! LP supply holds zero reserves, and vice versa.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while constructing reserves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReservesError {
    /// LP supply and reserves disagree about the pool being empty.
    #[error(
        "empty-pool invariant violated: reserve0={reserve0}, reserve1={reserve1}, \
         total_supply={total_supply}"
    )]
    EmptyPoolInvariant {
        reserve0: u128,
        reserve1: u128,
        total_supply: u128,
    },
}

/// Reserve balances and outstanding LP supply for one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reserves {
    reserve0: u128,
    reserve1: u128,
    total_supply: u128,
}

impl Reserves {
    /// An uninitialized pool.
    pub const EMPTY: Self = Self {
        reserve0: 0,
        reserve1: 0,
        total_supply: 0,
    };

    /// Creates reserves, enforcing the empty-pool invariant.
    pub fn new(reserve0: u128, reserve1: u128, total_supply: u128) -> Result<Self, ReservesError> {
        let pool_empty = reserve0 == 0 && reserve1 == 0;
        if pool_empty != (total_supply == 0) {
            return Err(ReservesError::EmptyPoolInvariant {
                reserve0,
                reserve1,
                total_supply,
            });
        }
        Ok(Self {
            reserve0,
            reserve1,
            total_supply,
        })
    }

    pub const fn reserve0(&self) -> u128 {
        self.reserve0
    }

    pub const fn reserve1(&self) -> u128 {
        self.reserve1
    }

    pub const fn total_supply(&self) -> u128 {
        self.total_supply
    }

    /// True for a pool that has never been seeded with liquidity.
    pub const fn is_empty(&self) -> bool {
        self.total_supply == 0
    }

    /// Orients the reserves for a swap.
    ///
    /// Returns `(reserve_in, reserve_out)` given whether the input token is
    /// the canonical `token0` side.
    pub const fn oriented(&self, input_is_token0: bool) -> (u128, u128) {
        if input_is_token0 {
            (self.reserve0, self.reserve1)
        } else {
            (self.reserve1, self.reserve0)
        }
    }
}
