//! Token identity: symbol, on-chain address, and decimal precision.
//!
//! Addresses distinguish the chain's native currency from ERC-20 style
//! contract addresses. The native marker matches the `"native"` sentinel
//! used by upstream token lists.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Highest decimal precision a token may declare.
///
/// Covers the full 6..=18 range seen on EVM chains; anything above 18
/// cannot be decimal-shifted without overflowing intermediate products.
pub const MAX_DECIMALS: u8 = 18;

/// Errors raised while constructing or parsing token identities.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Symbol must be a non-empty string.
    #[error("token symbol cannot be empty")]
    EmptySymbol,

    /// Decimal precision outside the supported range.
    #[error("token decimals {0} exceed the supported maximum of {MAX_DECIMALS}")]
    DecimalsOutOfRange(u8),

    /// Address string is neither `native` nor a 20-byte `0x` hex address.
    #[error("invalid token address: '{0}'")]
    InvalidAddress(String),
}

/// Canonical address of a tradable asset.
///
/// `Native` sorts before every contract address, and contract addresses
/// sort lexicographically by their bytes; [`crate::Pair`] relies on this
/// ordering for canonicalization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum TokenAddress {
    /// The chain's native currency (no contract address).
    Native,
    /// A token contract address (20 bytes).
    Contract([u8; 20]),
}

impl TokenAddress {
    /// Builds a contract address from raw bytes.
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self::Contract(bytes)
    }

    /// True for the native-currency marker.
    pub const fn is_native(&self) -> bool {
        matches!(self, Self::Native)
    }
}

impl FromStr for TokenAddress {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("native") {
            return Ok(Self::Native);
        }
        let hex_part = s
            .strip_prefix("0x")
            .ok_or_else(|| TokenError::InvalidAddress(s.to_string()))?;
        let bytes = hex::decode(hex_part).map_err(|_| TokenError::InvalidAddress(s.to_string()))?;
        let bytes: [u8; 20] = bytes
            .try_into()
            .map_err(|_| TokenError::InvalidAddress(s.to_string()))?;
        Ok(Self::Contract(bytes))
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Contract(bytes) => write!(f, "0x{}", hex::encode(bytes)),
        }
    }
}

impl TryFrom<String> for TokenAddress {
    type Error = TokenError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TokenAddress> for String {
    fn from(addr: TokenAddress) -> Self {
        addr.to_string()
    }
}

/// A tradable asset: symbol, address, and decimal precision.
///
/// Immutable once constructed; all fields are validated by [`Token::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    symbol: String,
    address: TokenAddress,
    decimals: u8,
}

impl Token {
    /// Creates a token, validating symbol and decimal precision.
    pub fn new(
        symbol: impl Into<String>,
        address: TokenAddress,
        decimals: u8,
    ) -> Result<Self, TokenError> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(TokenError::EmptySymbol);
        }
        if decimals > MAX_DECIMALS {
            return Err(TokenError::DecimalsOutOfRange(decimals));
        }
        Ok(Self {
            symbol,
            address,
            decimals,
        })
    }

    /// Creates the chain's native currency token.
    pub fn native(symbol: impl Into<String>, decimals: u8) -> Result<Self, TokenError> {
        Self::new(symbol, TokenAddress::Native, decimals)
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub const fn address(&self) -> TokenAddress {
        self.address
    }

    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Raw units per whole token (`10^decimals`).
    pub fn unit_scale(&self) -> u128 {
        10u128.pow(u32::from(self.decimals))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.address)
    }
}
