//! Deposit storage trait.

use crate::StoreError;
use agora_types::{Deposit, ProposalId};

/// Trait for storing the deposits locked against proposals.
///
/// Keys are `(proposal_id, depositor)` pairs; a second put for the same pair
/// overwrites. Listings are in ascending depositor order so refund order is
/// replay-deterministic.
pub trait DepositStore {
    /// Store (or overwrite) one deposit.
    fn put_deposit(&self, deposit: &Deposit) -> Result<(), StoreError>;

    /// All deposits for a proposal, ascending by depositor.
    fn get_deposits(&self, proposal_id: ProposalId) -> Result<Vec<Deposit>, StoreError>;

    /// Delete every deposit of a proposal (after burn or refund).
    fn delete_deposits(&self, proposal_id: ProposalId) -> Result<(), StoreError>;
}
