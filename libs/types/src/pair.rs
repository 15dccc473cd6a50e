//! Canonical trading pairs.
//!
//! A pair is unordered at the API boundary but stored in one stable
//! orientation: the token with the lower address becomes `token0`. Reserve
//! snapshots are keyed by [`PairKey`], so (A,B) and (B,A) always resolve to
//! the same entry.

use crate::token::{Token, TokenAddress};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while constructing a pair.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PairError {
    /// Both sides resolve to the same address.
    #[error("pair requires two distinct tokens, got {0} twice")]
    IdenticalTokens(TokenAddress),
}

/// Address-only pair identity, usable as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairKey {
    token0: TokenAddress,
    token1: TokenAddress,
}

impl PairKey {
    /// Builds the canonical key for two addresses.
    ///
    /// # Errors
    ///
    /// [`PairError::IdenticalTokens`] if the addresses are equal.
    pub fn new(a: TokenAddress, b: TokenAddress) -> Result<Self, PairError> {
        if a == b {
            return Err(PairError::IdenticalTokens(a));
        }
        let (token0, token1) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { token0, token1 })
    }

    pub const fn token0(&self) -> TokenAddress {
        self.token0
    }

    pub const fn token1(&self) -> TokenAddress {
        self.token1
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.token0, self.token1)
    }
}

/// An unordered pair of two distinct tokens, canonically oriented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    token0: Token,
    token1: Token,
}

impl Pair {
    /// Creates a pair, reordering the tokens into canonical orientation.
    ///
    /// # Errors
    ///
    /// [`PairError::IdenticalTokens`] if both tokens share an address.
    pub fn new(a: Token, b: Token) -> Result<Self, PairError> {
        if a.address() == b.address() {
            return Err(PairError::IdenticalTokens(a.address()));
        }
        let (token0, token1) = if a.address() < b.address() {
            (a, b)
        } else {
            (b, a)
        };
        Ok(Self { token0, token1 })
    }

    pub const fn token0(&self) -> &Token {
        &self.token0
    }

    pub const fn token1(&self) -> &Token {
        &self.token1
    }

    /// Address-only identity for snapshot lookups.
    pub fn key(&self) -> PairKey {
        PairKey {
            token0: self.token0.address(),
            token1: self.token1.address(),
        }
    }

    /// True if the given address is one of the pair's two tokens.
    pub fn contains(&self, address: TokenAddress) -> bool {
        self.token0.address() == address || self.token1.address() == address
    }

    /// True if `address` is the canonical `token0` side.
    pub fn is_token0(&self, address: TokenAddress) -> bool {
        self.token0.address() == address
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.token0.symbol(), self.token1.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sep() -> Token {
        Token::native("SEP", 18).unwrap()
    }

    fn usdc() -> Token {
        Token::new(
            "tUSDC",
            "0x1111111111111111111111111111111111111112".parse().unwrap(),
            6,
        )
        .unwrap()
    }

    #[test]
    fn orientation_is_stable() {
        let ab = Pair::new(sep(), usdc()).unwrap();
        let ba = Pair::new(usdc(), sep()).unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab.key(), ba.key());
        // Native sorts first.
        assert_eq!(ab.token0().symbol(), "SEP");
    }

    #[test]
    fn rejects_identical_tokens() {
        let err = Pair::new(sep(), sep()).unwrap_err();
        assert_eq!(err, PairError::IdenticalTokens(TokenAddress::Native));
    }

    #[test]
    fn key_is_order_independent() {
        let a = usdc().address();
        let b = sep().address();
        assert_eq!(PairKey::new(a, b).unwrap(), PairKey::new(b, a).unwrap());
        assert!(PairKey::new(a, a).is_err());
    }
}
