//! Votes and weighted vote options.

use crate::address::Address;
use crate::proposal::ProposalId;
use serde::{Deserialize, Serialize};

/// The four vote options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteOption {
    Yes,
    Abstain,
    No,
    /// A no vote that also counts toward the veto threshold.
    Veto,
}

/// A fraction of a voter's power assigned to one option.
///
/// A voter may split power across options; the weights of one vote are
/// expected to sum to 10_000 bps, but the tally does not enforce it and
/// simply counts whatever fractions are present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedVoteOption {
    pub option: VoteOption,
    pub weight_bps: u32,
}

impl WeightedVoteOption {
    /// A full-weight (100%) option.
    pub fn full(option: VoteOption) -> Self {
        Self {
            option,
            weight_bps: 10_000,
        }
    }
}

/// One voter's weighted option set on one proposal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub proposal_id: ProposalId,
    pub voter: Address,
    pub options: Vec<WeightedVoteOption>,
}

impl Vote {
    /// A simple, single-option, full-weight vote.
    pub fn simple(proposal_id: ProposalId, voter: Address, option: VoteOption) -> Self {
        Self {
            proposal_id,
            voter,
            options: vec![WeightedVoteOption::full(option)],
        }
    }
}
