//! Deferred-action FIFO storage trait.

use crate::StoreError;

/// Trait for the FIFO of queued deferred actions.
///
/// Payloads are opaque bytes (the action crate owns the encoding). Each
/// enqueue assigns the next sequence number; iteration is in ascending
/// sequence order. An entry is exclusively owned by the queue until the
/// processor deletes it.
pub trait ActionStore {
    /// Append an action, returning its assigned sequence number.
    fn enqueue_action(&self, data: &[u8]) -> Result<u64, StoreError>;

    /// All queued actions in FIFO order.
    fn iter_actions(&self) -> Result<Vec<(u64, Vec<u8>)>, StoreError>;

    /// Delete one action by sequence number. Missing entries are not an error.
    fn delete_action(&self, seq: u64) -> Result<(), StoreError>;

    /// Number of queued actions.
    fn action_count(&self) -> Result<u64, StoreError>;
}
