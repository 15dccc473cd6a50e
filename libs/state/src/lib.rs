//! # TeaDEX Reserve Store
//!
//! In-memory reserve snapshots with single-writer, many-readers access.
//!
//! The store holds one immutable [`ReserveSnapshot`] behind an
//! atomically-swapped `Arc`. Readers clone the `Arc` under a brief read
//! lock and then compute against a frozen view; a refresh builds a new
//! snapshot off to the side and swaps it in whole, so no reader ever
//! observes a partially updated map.
//!
//! How the snapshot is kept fresh (chain sync, fixtures, tests) is the
//! caller's concern; this crate only guarantees consistent reads.

pub mod store;

pub use store::{ReserveSnapshot, ReserveStore, StateError};
