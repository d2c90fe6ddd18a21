//! Genesis state import and export.
//!
//! A genesis snapshot carries the full governance state. Import rebuilds
//! queue membership purely from each proposal's status and cross-checks the
//! deposit module account balance against the imported deposit sum; a
//! mismatch means a corrupted or incompatible snapshot and aborts startup.

use serde::{Deserialize, Serialize};

use agora_store::{
    DepositStore, ParamsStore, ProposalStore, QueueId, StateAccess, StoreError, VoteStore,
};
use agora_types::{Amount, Deposit, GovParams, Proposal, ProposalId, ProposalStatus, Vote};

use crate::bank::DepositBank;
use crate::error::GovError;
use crate::queue::{ProposalQueues, QueueKey};

/// A full governance state snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    pub next_proposal_id: ProposalId,
    pub params: GovParams,
    pub proposals: Vec<Proposal>,
    pub deposits: Vec<Deposit>,
    pub votes: Vec<Vote>,
}

impl GenesisState {
    /// Serialize the snapshot to bytes (bincode).
    pub fn to_bytes(&self) -> Vec<u8> {
        bincode::serialize(self).expect("genesis serialization should not fail")
    }

    /// Deserialize a snapshot from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GovError> {
        bincode::deserialize(bytes)
            .map_err(|e| GovError::Store(StoreError::Serialization(e.to_string())))
    }
}

impl Default for GenesisState {
    fn default() -> Self {
        Self {
            next_proposal_id: 1,
            params: GovParams::default(),
            proposals: Vec::new(),
            deposits: Vec::new(),
            votes: Vec::new(),
        }
    }
}

/// Load a genesis snapshot into an empty state.
///
/// Non-terminal proposals are inserted into exactly the queue matching their
/// status; terminal proposals join neither.
///
/// # Panics
/// Panics when the deposit module account is missing, or when its balance
/// does not equal the sum of imported deposits. Both signal a corrupted or
/// incompatible snapshot and abort startup; they are not recoverable errors.
pub fn import_genesis<S: StateAccess>(
    state: &S,
    bank: &mut dyn DepositBank,
    genesis: &GenesisState,
) -> Result<(), GovError> {
    state
        .proposals()
        .set_next_proposal_id(genesis.next_proposal_id)?;
    state.params().set_params(&genesis.params)?;

    let balance = bank
        .module_balance()
        .expect("deposit module account has not been set");

    let mut total_deposits = Amount::ZERO;
    for deposit in &genesis.deposits {
        state.deposits().put_deposit(deposit)?;
        total_deposits = total_deposits
            .checked_add(deposit.amount)
            .expect("imported deposit amounts overflow");
    }

    for vote in &genesis.votes {
        state.votes().put_vote(vote)?;
    }

    let queues = ProposalQueues::new(state.queues());
    for proposal in &genesis.proposals {
        match proposal.status {
            ProposalStatus::DepositPeriod => queues.insert(
                QueueId::Inactive,
                QueueKey::new(proposal.deposit_end_time, proposal.id),
            )?,
            ProposalStatus::VotingPeriod => queues.insert(
                QueueId::Active,
                QueueKey::new(proposal.voting_end_time, proposal.id),
            )?,
            // Terminal proposals join neither queue.
            status => debug_assert!(status.is_terminal()),
        }
        state.proposals().put_proposal(proposal)?;
    }

    // A zero balance usually means the account was never materialized.
    if balance.is_zero() {
        bank.ensure_module_account();
    }

    if balance != total_deposits {
        panic!("expected module account balance {balance} but imported deposits sum to {total_deposits}");
    }

    Ok(())
}

/// Export the full governance state as a snapshot.
///
/// Deposits and votes are collected per proposal, in ascending proposal
/// order, so exports are replay-deterministic.
pub fn export_genesis<S: StateAccess>(state: &S) -> Result<GenesisState, GovError> {
    let proposals = state.proposals().iter_proposals()?;

    let mut deposits = Vec::new();
    let mut votes = Vec::new();
    for proposal in &proposals {
        deposits.extend(state.deposits().get_deposits(proposal.id)?);
        votes.extend(state.votes().get_votes(proposal.id)?);
    }

    Ok(GenesisState {
        next_proposal_id: state.proposals().peek_next_proposal_id()?,
        params: state.params().get_params()?,
        proposals,
        deposits,
        votes,
    })
}
