//! # TeaDEX Quote Facade
//!
//! The single entry point the presentation layer calls. A [`Quoter`] wraps
//! a reserve store and an [`QuoterConfig`] and exposes three synchronous
//! operations:
//!
//! - [`Quoter::quote_swap`] — constant-product swap output, price impact,
//!   and a slippage-bounded minimum received
//! - [`Quoter::quote_deposit`] — LP tokens minted and resulting pool share
//! - [`Quoter::quote_withdrawal`] — token amounts returned for burning LP
//!
//! All user amounts arrive as decimal strings and are parsed exactly;
//! every failure is a typed [`QuoteError`]. Quotes are point-in-time
//! values computed against one reserve snapshot; the facade never retries,
//! and callers re-quote when reserves may have moved.
//!
//! The `Quoter` is an explicit context object: construct one per engine
//! instance and share it by reference, instead of reaching for process
//! globals.
//!
//! ```rust
//! use std::sync::Arc;
//! use teadex_quoter::{Quoter, QuoterConfig};
//! use teadex_state::ReserveStore;
//! use teadex_types::{Pair, Reserves, Token};
//!
//! let sep = Token::native("SEP", 18).unwrap();
//! let usdc = Token::new(
//!     "tUSDC",
//!     "0x1111111111111111111111111111111111111112".parse().unwrap(),
//!     6,
//! )
//! .unwrap();
//! let pair = Pair::new(sep.clone(), usdc.clone()).unwrap();
//!
//! let store = Arc::new(ReserveStore::new());
//! store
//!     .upsert(
//!         pair.key(),
//!         Reserves::new(1_000_000_000_000_000_000_000, 2_000_000_000, 44_721_359_549).unwrap(),
//!     )
//!     .unwrap();
//!
//! let quoter = Quoter::new(store, QuoterConfig::default()).unwrap();
//! let quote = quoter.quote_swap(&sep, &usdc, "1.5", None).unwrap();
//! assert!(quote.amount_out > 0);
//! ```

pub mod config;
pub mod error;
pub mod facade;
pub mod quotes;

pub use config::{ConfigError, QuoterConfig};
pub use error::QuoteError;
pub use facade::Quoter;
pub use quotes::{DepositQuote, SwapQuote, WithdrawalQuote};

/// Decimal precision of LP tokens, matching the V2 pair-token convention.
pub const LP_TOKEN_DECIMALS: u8 = 18;
