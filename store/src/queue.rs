//! Ordered proposal-queue storage trait.

use crate::StoreError;

/// The two time-ordered proposal queues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueueId {
    /// Proposals in their deposit period, keyed by deposit end time.
    Inactive,
    /// Proposals in their voting period, keyed by voting end time.
    Active,
}

/// Trait for the two named ordered queues of raw composite keys.
///
/// Keys are opaque byte strings whose lexicographic order is the queue
/// order; the typed key layout lives with the queue manager, not here.
/// All iteration is strictly ascending, which is the only
/// replay-deterministic sequencing the driver has.
pub trait QueueStore {
    /// Insert a key. Inserting an existing key is a no-op (idempotent).
    fn insert(&self, queue: QueueId, key: &[u8]) -> Result<(), StoreError>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, queue: QueueId, key: &[u8]) -> Result<(), StoreError>;

    /// All keys `<= cutoff`, ascending.
    fn range_to_inclusive(&self, queue: QueueId, cutoff: &[u8]) -> Result<Vec<Vec<u8>>, StoreError>;

    /// All keys, ascending (snapshot export and invariant checks).
    fn iter_keys(&self, queue: QueueId) -> Result<Vec<Vec<u8>>, StoreError>;

    /// Whether a key is present.
    fn contains(&self, queue: QueueId, key: &[u8]) -> Result<bool, StoreError>;
}
