//! Proposal storage trait.

use crate::StoreError;
use agora_types::{Proposal, ProposalId};

/// Trait for storing proposals and the monotonic proposal-id counter.
pub trait ProposalStore {
    /// Store (or overwrite) a proposal keyed by its id.
    fn put_proposal(&self, proposal: &Proposal) -> Result<(), StoreError>;

    /// Get a proposal by id.
    fn get_proposal(&self, id: ProposalId) -> Result<Proposal, StoreError>;

    /// Delete a proposal. Deleting a missing proposal is not an error.
    fn delete_proposal(&self, id: ProposalId) -> Result<(), StoreError>;

    /// All proposals in ascending id order.
    fn iter_proposals(&self) -> Result<Vec<Proposal>, StoreError>;

    /// Reserve and return the next proposal id, advancing the counter.
    fn reserve_proposal_id(&self) -> Result<ProposalId, StoreError>;

    /// Read the counter without advancing it (snapshot export).
    fn peek_next_proposal_id(&self) -> Result<ProposalId, StoreError>;

    /// Set the counter (snapshot import).
    fn set_next_proposal_id(&self, id: ProposalId) -> Result<(), StoreError>;
}
