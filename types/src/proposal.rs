//! Governance proposals and their lifecycle.

use crate::address::Address;
use crate::amount::Amount;
use crate::payload::ProposalPayload;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// Monotonic proposal identifier, allocated by the store counter.
pub type ProposalId = u64;

/// Lifecycle states of a proposal. Transitions are strictly forward:
/// `DepositPeriod → VotingPeriod → {Passed, Rejected, Failed}`, or
/// `DepositPeriod → Dropped` when the deposit period lapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    /// Collecting deposits; member of the inactive queue.
    DepositPeriod,
    /// Minimum deposit met, votes being cast; member of the active queue.
    VotingPeriod,
    /// Tally passed and the payload executed successfully.
    Passed,
    /// Tally did not pass.
    Rejected,
    /// Tally passed but the payload failed on execution.
    Failed,
    /// Deposit period lapsed without reaching the minimum deposit.
    Dropped,
}

impl ProposalStatus {
    /// Whether this status is terminal (member of neither queue).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::DepositPeriod | Self::VotingPeriod)
    }
}

/// A governance proposal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ProposalId,
    /// What this proposal executes if it passes.
    pub payload: ProposalPayload,
    pub status: ProposalStatus,
    /// When the deposit period lapses (inactive queue key time).
    pub deposit_end_time: Timestamp,
    /// When the voting period lapses (active queue key time).
    pub voting_end_time: Timestamp,
    /// Sum of all deposits locked against this proposal.
    pub total_deposit: Amount,
    /// Recorded once the proposal is tallied; `None` until then.
    pub final_tally: Option<TallyResult>,
}

/// Stake locked against a proposal; refunded or burned based on outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
    pub proposal_id: ProposalId,
    pub depositor: Address,
    pub amount: Amount,
}

/// Weighted voting power totals per option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyResult {
    pub yes: u128,
    pub abstain: u128,
    pub no: u128,
    pub veto: u128,
}

impl TallyResult {
    /// Total power that voted, across all options.
    pub fn turnout(&self) -> u128 {
        self.yes + self.abstain + self.no + self.veto
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses() {
        assert!(!ProposalStatus::DepositPeriod.is_terminal());
        assert!(!ProposalStatus::VotingPeriod.is_terminal());
        assert!(ProposalStatus::Passed.is_terminal());
        assert!(ProposalStatus::Rejected.is_terminal());
        assert!(ProposalStatus::Failed.is_terminal());
        assert!(ProposalStatus::Dropped.is_terminal());
    }

    #[test]
    fn turnout_sums_all_options() {
        let tally = TallyResult {
            yes: 10,
            abstain: 20,
            no: 30,
            veto: 40,
        };
        assert_eq!(tally.turnout(), 100);
    }
}
