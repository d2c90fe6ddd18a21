//! Per-block execution context.

use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// The block being processed: the only clock the core ever observes.
///
/// All queue drains and deferred actions are driven by this pair; nothing in
/// the core reads system time, so re-executing the same block on another
/// node yields byte-identical results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContext {
    /// Height of the block being processed.
    pub height: u64,
    /// Consensus timestamp of the block being processed.
    pub time: Timestamp,
}

impl BlockContext {
    pub fn new(height: u64, time: Timestamp) -> Self {
        Self { height, time }
    }
}
