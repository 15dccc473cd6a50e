//! # TeaDEX Core Types
//!
//! Domain types shared by every crate in the quoting engine.
//!
//! ## Design Philosophy
//!
//! - **No Precision Loss**: all token quantities are raw integer units
//!   (`u128`); decimal strings cross the boundary exactly once, through
//!   [`amount::parse_amount`], never through `f64`.
//! - **Canonical Identity**: a [`Pair`] is the same value regardless of the
//!   order its two tokens were supplied in, so every layer above agrees on
//!   which reserve is which.
//! - **Validated Construction**: [`Token`], [`Pair`] and [`Reserves`] can
//!   only be built through constructors that enforce their invariants;
//!   malformed values are rejected with typed errors at the edge.
//!
//! ## Quick Start
//!
//! ```rust
//! use teadex_types::{Pair, Reserves, Token, TokenAddress};
//!
//! let sep = Token::native("SEP", 18).unwrap();
//! let usdc = Token::new(
//!     "tUSDC",
//!     "0x1111111111111111111111111111111111111112".parse().unwrap(),
//!     6,
//! )
//! .unwrap();
//!
//! let pair = Pair::new(sep, usdc).unwrap();
//! let reserves = Reserves::new(1_000, 1_500, 1_225).unwrap();
//! assert!(!reserves.is_empty());
//! ```

pub mod amount;
pub mod pair;
pub mod reserves;
pub mod token;

pub use amount::{format_amount, parse_amount, parse_balance, to_decimal, ParseAmountError};
pub use pair::{Pair, PairError, PairKey};
pub use reserves::{Reserves, ReservesError};
pub use token::{Token, TokenAddress, TokenError, MAX_DECIMALS};
