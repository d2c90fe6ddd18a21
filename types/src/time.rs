//! Timestamp type used throughout the governance core.
//!
//! Timestamps are Unix epoch seconds (UTC). The core never reads a wall
//! clock: every expiry decision compares a stored timestamp against the
//! block time carried in [`crate::BlockContext`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Whether this deadline has passed relative to the given block time.
    pub fn is_expired_at(&self, block_time: Timestamp) -> bool {
        self.0 <= block_time.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
