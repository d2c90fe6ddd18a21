//! Governance parameters.
//!
//! All ratios are basis points (1/10_000) and all amounts raw u128 units, so
//! every tally computation stays in deterministic integer math.

use crate::amount::{Amount, UNIT};
use serde::{Deserialize, Serialize};

/// Parameter set consulted by the block driver and the tally engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovParams {
    // ── Deposits ─────────────────────────────────────────────────────────
    /// Minimum total deposit for a proposal to enter its voting period.
    pub min_deposit: Amount,

    /// Maximum time (seconds) a proposal may sit in the deposit period
    /// before it is dropped and its deposits burned.
    pub max_deposit_period_secs: u64,

    // ── Voting ───────────────────────────────────────────────────────────
    /// Length (seconds) of a proposal's voting period.
    pub voting_period_secs: u64,

    /// Minimum participation ratio of total bonded power (basis points).
    pub quorum_bps: u32,

    /// Yes ratio over non-abstaining, non-veto votes required to pass
    /// (basis points).
    pub pass_threshold_bps: u32,

    /// Maximum tolerated veto ratio over non-abstaining votes before forced
    /// rejection (basis points).
    pub veto_threshold_bps: u32,

    // ── Deferred actions ─────────────────────────────────────────────────
    /// Blocks between a validator set update and its activation; slashes
    /// target `height - validator_update_delay - 1`.
    pub validator_update_delay: u64,
}

impl GovParams {
    /// Agora defaults: the intended configuration for the live network.
    pub fn agora_defaults() -> Self {
        Self {
            min_deposit: Amount::new(512 * UNIT),
            max_deposit_period_secs: 14 * 24 * 3600, // 2 weeks
            voting_period_secs: 14 * 24 * 3600,      // 2 weeks
            quorum_bps: 3340,                        // 33.4%
            pass_threshold_bps: 5000,                // 50%
            veto_threshold_bps: 3340,                // 33.4%
            validator_update_delay: 1,
        }
    }
}

/// Default is the Agora live configuration.
impl Default for GovParams {
    fn default() -> Self {
        Self::agora_defaults()
    }
}
