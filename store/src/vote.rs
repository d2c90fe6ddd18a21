//! Vote storage trait.

use crate::StoreError;
use agora_types::{ProposalId, Vote};

/// Trait for storing votes cast on proposals.
///
/// Keys are `(proposal_id, voter)` pairs; re-voting overwrites. Listings are
/// in ascending voter order so tally input order is replay-deterministic.
pub trait VoteStore {
    /// Store (or overwrite) one vote.
    fn put_vote(&self, vote: &Vote) -> Result<(), StoreError>;

    /// All votes on a proposal, ascending by voter.
    fn get_votes(&self, proposal_id: ProposalId) -> Result<Vec<Vote>, StoreError>;

    /// Delete every vote on a proposal (after its tally is final).
    fn delete_votes(&self, proposal_id: ProposalId) -> Result<(), StoreError>;
}
