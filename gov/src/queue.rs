//! Time-ordered proposal queue manager.
//!
//! Queue entries are 16-byte composite keys, big-endian expiry seconds
//! followed by big-endian proposal id, so lexicographic byte order equals
//! ascending `(time, id)` order. That ordering is load-bearing: it is the
//! only replay-deterministic sequencing available to the driver, since real
//! wall-clock arrival order is not observable identically on every node.

use agora_store::{QueueId, QueueStore, StoreError};
use agora_types::{ProposalId, Timestamp};

use crate::error::GovError;

/// Typed form of one queue entry key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct QueueKey {
    pub expires_at: Timestamp,
    pub proposal_id: ProposalId,
}

impl QueueKey {
    pub const ENCODED_LEN: usize = 16;

    pub fn new(expires_at: Timestamp, proposal_id: ProposalId) -> Self {
        Self {
            expires_at,
            proposal_id,
        }
    }

    /// Encode as `[8B BE seconds][8B BE proposal id]`.
    pub fn encode(&self) -> [u8; Self::ENCODED_LEN] {
        let mut key = [0u8; Self::ENCODED_LEN];
        key[..8].copy_from_slice(&self.expires_at.as_secs().to_be_bytes());
        key[8..].copy_from_slice(&self.proposal_id.to_be_bytes());
        key
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, GovError> {
        if bytes.len() != Self::ENCODED_LEN {
            return Err(GovError::MalformedQueueKey(bytes.len()));
        }
        let mut secs = [0u8; 8];
        secs.copy_from_slice(&bytes[..8]);
        let mut id = [0u8; 8];
        id.copy_from_slice(&bytes[8..]);
        Ok(Self {
            expires_at: Timestamp::new(u64::from_be_bytes(secs)),
            proposal_id: u64::from_be_bytes(id),
        })
    }

    /// The greatest key with expiry `<= block_time`: used as the inclusive
    /// upper bound when snapshotting expired entries.
    fn cutoff(block_time: Timestamp) -> [u8; Self::ENCODED_LEN] {
        Self::new(block_time, u64::MAX).encode()
    }
}

/// Typed wrapper over the raw [`QueueStore`].
pub struct ProposalQueues<'a, Q: QueueStore + ?Sized> {
    store: &'a Q,
}

impl<'a, Q: QueueStore + ?Sized> ProposalQueues<'a, Q> {
    pub fn new(store: &'a Q) -> Self {
        Self { store }
    }

    /// Insert an entry. Idempotent: re-inserting an existing key is a no-op.
    pub fn insert(&self, queue: QueueId, key: QueueKey) -> Result<(), StoreError> {
        self.store.insert(queue, &key.encode())
    }

    /// Remove one entry.
    pub fn remove(&self, queue: QueueId, key: QueueKey) -> Result<(), StoreError> {
        self.store.remove(queue, &key.encode())
    }

    /// Whether an entry is present.
    pub fn contains(&self, queue: QueueId, key: QueueKey) -> Result<bool, StoreError> {
        self.store.contains(queue, &key.encode())
    }

    /// Snapshot of every entry with expiry `<= block_time`, ascending.
    ///
    /// The driver mutates the queue only after this snapshot is collected,
    /// never mid-traversal of the underlying structure.
    pub fn expired(&self, queue: QueueId, block_time: Timestamp) -> Result<Vec<QueueKey>, GovError> {
        self.store
            .range_to_inclusive(queue, &QueueKey::cutoff(block_time))?
            .iter()
            .map(|raw| QueueKey::decode(raw))
            .collect()
    }

    /// Snapshot of the whole queue, ascending.
    pub fn entries(&self, queue: QueueId) -> Result<Vec<QueueKey>, GovError> {
        self.store
            .iter_keys(queue)?
            .iter()
            .map(|raw| QueueKey::decode(raw))
            .collect()
    }
}
