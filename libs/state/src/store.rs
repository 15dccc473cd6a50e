//! Reserve snapshot storage.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use teadex_types::{PairKey, Reserves};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised by reserve lookups and updates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The pair has never been initialized in the snapshot.
    #[error("pair not found: {0}")]
    PairNotFound(PairKey),

    /// An update violated the reserves invariant and was rejected.
    #[error("invalid reserves for {pair}: {source}")]
    InvalidReserves {
        pair: PairKey,
        #[source]
        source: teadex_types::ReservesError,
    },
}

/// One immutable view of every known pair's reserves.
pub type ReserveSnapshot = HashMap<PairKey, Reserves>;

/// Reserve balances per pair, read through atomically-swapped snapshots.
///
/// Reads never block on a refresh in progress: they clone the current
/// `Arc` and drop the lock before touching the map. Writers build the next
/// snapshot outside the lock and swap it in with a single store.
#[derive(Debug, Default)]
pub struct ReserveStore {
    current: RwLock<Arc<ReserveSnapshot>>,
}

impl ReserveStore {
    /// Creates an empty store with no known pairs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded from `(pair, reserves)` entries.
    pub fn with_entries(
        entries: impl IntoIterator<Item = (PairKey, Reserves)>,
    ) -> Self {
        let store = Self::new();
        store.replace_all(entries);
        store
    }

    /// Returns the current snapshot for multi-lookup consistency.
    ///
    /// A quote that needs several reads should take one snapshot and do
    /// all of them against it.
    pub fn snapshot(&self) -> Arc<ReserveSnapshot> {
        Arc::clone(&self.current.read())
    }

    /// Looks up reserves for one pair in the current snapshot.
    pub fn get(&self, pair: &PairKey) -> Result<Reserves, StateError> {
        self.snapshot()
            .get(pair)
            .copied()
            .ok_or(StateError::PairNotFound(*pair))
    }

    /// Replaces the whole snapshot, e.g. after a full sync cycle.
    pub fn replace_all(&self, entries: impl IntoIterator<Item = (PairKey, Reserves)>) {
        let next: ReserveSnapshot = entries.into_iter().collect();
        debug!(pairs = next.len(), "reserve snapshot replaced");
        *self.current.write() = Arc::new(next);
    }

    /// Updates one pair, building and swapping in a fresh snapshot.
    ///
    /// Rejects reserves that violate the empty-pool invariant rather than
    /// publishing an inconsistent entry.
    pub fn upsert(&self, pair: PairKey, reserves: Reserves) -> Result<(), StateError> {
        // Re-validate: Reserves is constructed validated, but an update
        // crossing a serialization boundary may not be.
        Reserves::new(
            reserves.reserve0(),
            reserves.reserve1(),
            reserves.total_supply(),
        )
        .map_err(|source| {
            warn!(%pair, %source, "rejecting reserve update");
            StateError::InvalidReserves { pair, source }
        })?;

        let mut next: ReserveSnapshot = (*self.snapshot()).clone();
        next.insert(pair, reserves);
        debug!(
            %pair,
            reserve0 = reserves.reserve0(),
            reserve1 = reserves.reserve1(),
            total_supply = reserves.total_supply(),
            "reserve entry updated"
        );
        *self.current.write() = Arc::new(next);
        Ok(())
    }

    /// Number of pairs in the current snapshot.
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teadex_types::TokenAddress;

    fn pair_key() -> PairKey {
        let a = TokenAddress::Native;
        let b: TokenAddress = "0x1111111111111111111111111111111111111112"
            .parse()
            .unwrap();
        PairKey::new(a, b).unwrap()
    }

    #[test]
    fn missing_pair_is_not_found() {
        let store = ReserveStore::new();
        assert_eq!(store.get(&pair_key()), Err(StateError::PairNotFound(pair_key())));
    }

    #[test]
    fn upsert_then_get() {
        let store = ReserveStore::new();
        let reserves = Reserves::new(1_000, 1_500, 1_225).unwrap();
        store.upsert(pair_key(), reserves).unwrap();
        assert_eq!(store.get(&pair_key()), Ok(reserves));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn snapshots_are_isolated_from_later_writes() {
        let store = ReserveStore::new();
        store
            .upsert(pair_key(), Reserves::new(1_000, 1_500, 1_225).unwrap())
            .unwrap();

        let before = store.snapshot();
        store
            .upsert(pair_key(), Reserves::new(9_000, 9_500, 9_225).unwrap())
            .unwrap();

        // The old snapshot still sees the old reserves.
        assert_eq!(
            before.get(&pair_key()).unwrap().reserve0(),
            1_000
        );
        assert_eq!(store.get(&pair_key()).unwrap().reserve0(), 9_000);
    }

    #[test]
    fn replace_all_swaps_the_whole_view() {
        let store = ReserveStore::with_entries([(
            pair_key(),
            Reserves::new(1_000, 1_500, 1_225).unwrap(),
        )]);
        assert_eq!(store.len(), 1);

        store.replace_all([]);
        assert!(store.is_empty());
        assert!(store.get(&pair_key()).is_err());
    }
}
