//! Nullable governance store: every storage trait over ordered maps.

use agora_store::{
    ActionStore, DepositStore, ParamsStore, ProposalStore, QueueId, QueueStore, StateAccess,
    StoreError, VoteStore,
};
use agora_types::{Deposit, GovParams, Proposal, ProposalId, Vote};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

/// An in-memory implementation of the whole state access layer.
///
/// Thread-safe for use across test helpers; every internal collection is a
/// BTree so listings come back in deterministic key order.
pub struct NullState {
    proposals: Mutex<BTreeMap<ProposalId, Proposal>>,
    next_proposal_id: Mutex<ProposalId>,
    /// Keyed by `(proposal_id, depositor)`.
    deposits: Mutex<BTreeMap<(ProposalId, String), Deposit>>,
    /// Keyed by `(proposal_id, voter)`.
    votes: Mutex<BTreeMap<(ProposalId, String), Vote>>,
    inactive_queue: Mutex<BTreeSet<Vec<u8>>>,
    active_queue: Mutex<BTreeSet<Vec<u8>>>,
    params: Mutex<GovParams>,
    actions: Mutex<BTreeMap<u64, Vec<u8>>>,
    next_action_seq: Mutex<u64>,
}

impl NullState {
    pub fn new() -> Self {
        Self {
            proposals: Mutex::new(BTreeMap::new()),
            next_proposal_id: Mutex::new(1),
            deposits: Mutex::new(BTreeMap::new()),
            votes: Mutex::new(BTreeMap::new()),
            inactive_queue: Mutex::new(BTreeSet::new()),
            active_queue: Mutex::new(BTreeSet::new()),
            params: Mutex::new(GovParams::default()),
            actions: Mutex::new(BTreeMap::new()),
            next_action_seq: Mutex::new(0),
        }
    }

    fn queue(&self, queue: QueueId) -> &Mutex<BTreeSet<Vec<u8>>> {
        match queue {
            QueueId::Inactive => &self.inactive_queue,
            QueueId::Active => &self.active_queue,
        }
    }
}

impl Default for NullState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProposalStore for NullState {
    fn put_proposal(&self, proposal: &Proposal) -> Result<(), StoreError> {
        self.proposals
            .lock()
            .unwrap()
            .insert(proposal.id, proposal.clone());
        Ok(())
    }

    fn get_proposal(&self, id: ProposalId) -> Result<Proposal, StoreError> {
        self.proposals
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("proposal {id}")))
    }

    fn delete_proposal(&self, id: ProposalId) -> Result<(), StoreError> {
        self.proposals.lock().unwrap().remove(&id);
        Ok(())
    }

    fn iter_proposals(&self) -> Result<Vec<Proposal>, StoreError> {
        Ok(self.proposals.lock().unwrap().values().cloned().collect())
    }

    fn reserve_proposal_id(&self) -> Result<ProposalId, StoreError> {
        let mut next = self.next_proposal_id.lock().unwrap();
        let id = *next;
        *next += 1;
        Ok(id)
    }

    fn peek_next_proposal_id(&self) -> Result<ProposalId, StoreError> {
        Ok(*self.next_proposal_id.lock().unwrap())
    }

    fn set_next_proposal_id(&self, id: ProposalId) -> Result<(), StoreError> {
        *self.next_proposal_id.lock().unwrap() = id;
        Ok(())
    }
}

impl DepositStore for NullState {
    fn put_deposit(&self, deposit: &Deposit) -> Result<(), StoreError> {
        let key = (deposit.proposal_id, deposit.depositor.to_string());
        self.deposits.lock().unwrap().insert(key, deposit.clone());
        Ok(())
    }

    fn get_deposits(&self, proposal_id: ProposalId) -> Result<Vec<Deposit>, StoreError> {
        Ok(self
            .deposits
            .lock()
            .unwrap()
            .range((proposal_id, String::new())..)
            .take_while(|((id, _), _)| *id == proposal_id)
            .map(|(_, d)| d.clone())
            .collect())
    }

    fn delete_deposits(&self, proposal_id: ProposalId) -> Result<(), StoreError> {
        self.deposits
            .lock()
            .unwrap()
            .retain(|(id, _), _| *id != proposal_id);
        Ok(())
    }
}

impl VoteStore for NullState {
    fn put_vote(&self, vote: &Vote) -> Result<(), StoreError> {
        let key = (vote.proposal_id, vote.voter.to_string());
        self.votes.lock().unwrap().insert(key, vote.clone());
        Ok(())
    }

    fn get_votes(&self, proposal_id: ProposalId) -> Result<Vec<Vote>, StoreError> {
        Ok(self
            .votes
            .lock()
            .unwrap()
            .range((proposal_id, String::new())..)
            .take_while(|((id, _), _)| *id == proposal_id)
            .map(|(_, v)| v.clone())
            .collect())
    }

    fn delete_votes(&self, proposal_id: ProposalId) -> Result<(), StoreError> {
        self.votes
            .lock()
            .unwrap()
            .retain(|(id, _), _| *id != proposal_id);
        Ok(())
    }
}

impl QueueStore for NullState {
    fn insert(&self, queue: QueueId, key: &[u8]) -> Result<(), StoreError> {
        self.queue(queue).lock().unwrap().insert(key.to_vec());
        Ok(())
    }

    fn remove(&self, queue: QueueId, key: &[u8]) -> Result<(), StoreError> {
        self.queue(queue).lock().unwrap().remove(key);
        Ok(())
    }

    fn range_to_inclusive(
        &self,
        queue: QueueId,
        cutoff: &[u8],
    ) -> Result<Vec<Vec<u8>>, StoreError> {
        Ok(self
            .queue(queue)
            .lock()
            .unwrap()
            .iter()
            .take_while(|key| key.as_slice() <= cutoff)
            .cloned()
            .collect())
    }

    fn iter_keys(&self, queue: QueueId) -> Result<Vec<Vec<u8>>, StoreError> {
        Ok(self.queue(queue).lock().unwrap().iter().cloned().collect())
    }

    fn contains(&self, queue: QueueId, key: &[u8]) -> Result<bool, StoreError> {
        Ok(self.queue(queue).lock().unwrap().contains(key))
    }
}

impl ParamsStore for NullState {
    fn get_params(&self) -> Result<GovParams, StoreError> {
        Ok(self.params.lock().unwrap().clone())
    }

    fn set_params(&self, params: &GovParams) -> Result<(), StoreError> {
        *self.params.lock().unwrap() = params.clone();
        Ok(())
    }
}

impl ActionStore for NullState {
    fn enqueue_action(&self, data: &[u8]) -> Result<u64, StoreError> {
        let mut next = self.next_action_seq.lock().unwrap();
        let seq = *next;
        *next += 1;
        self.actions.lock().unwrap().insert(seq, data.to_vec());
        Ok(seq)
    }

    fn iter_actions(&self) -> Result<Vec<(u64, Vec<u8>)>, StoreError> {
        Ok(self
            .actions
            .lock()
            .unwrap()
            .iter()
            .map(|(seq, data)| (*seq, data.clone()))
            .collect())
    }

    fn delete_action(&self, seq: u64) -> Result<(), StoreError> {
        self.actions.lock().unwrap().remove(&seq);
        Ok(())
    }

    fn action_count(&self) -> Result<u64, StoreError> {
        Ok(self.actions.lock().unwrap().len() as u64)
    }
}

impl StateAccess for NullState {
    type Proposals = Self;
    type Deposits = Self;
    type Votes = Self;
    type Queues = Self;
    type Params = Self;
    type Actions = Self;

    fn proposals(&self) -> &Self {
        self
    }
    fn deposits(&self) -> &Self {
        self
    }
    fn votes(&self) -> &Self {
        self
    }
    fn queues(&self) -> &Self {
        self
    }
    fn params(&self) -> &Self {
        self
    }
    fn actions(&self) -> &Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_types::{Address, Amount, ProposalPayload, ProposalStatus, Timestamp, VoteOption};

    fn sample_proposal(id: ProposalId) -> Proposal {
        Proposal {
            id,
            payload: ProposalPayload::Messages(Vec::new()),
            status: ProposalStatus::DepositPeriod,
            deposit_end_time: Timestamp::new(100),
            voting_end_time: Timestamp::EPOCH,
            total_deposit: Amount::ZERO,
            final_tally: None,
        }
    }

    #[test]
    fn put_get_proposal() {
        let state = NullState::new();
        state.put_proposal(&sample_proposal(7)).unwrap();
        assert_eq!(state.get_proposal(7).unwrap().id, 7);
        assert!(state.get_proposal(8).is_err());
    }

    #[test]
    fn proposal_counter_is_monotonic() {
        let state = NullState::new();
        assert_eq!(state.reserve_proposal_id().unwrap(), 1);
        assert_eq!(state.reserve_proposal_id().unwrap(), 2);
        assert_eq!(state.peek_next_proposal_id().unwrap(), 3);
        state.set_next_proposal_id(10).unwrap();
        assert_eq!(state.reserve_proposal_id().unwrap(), 10);
    }

    #[test]
    fn deposits_list_only_their_proposal() {
        let state = NullState::new();
        for (pid, who) in [(1, "agora_bob"), (1, "agora_alice"), (2, "agora_carol")] {
            state
                .put_deposit(&Deposit {
                    proposal_id: pid,
                    depositor: Address::new(who),
                    amount: Amount::new(5),
                })
                .unwrap();
        }
        let deposits = state.get_deposits(1).unwrap();
        assert_eq!(deposits.len(), 2);
        // Ascending depositor order.
        assert_eq!(deposits[0].depositor.as_str(), "agora_alice");
        assert_eq!(deposits[1].depositor.as_str(), "agora_bob");

        state.delete_deposits(1).unwrap();
        assert!(state.get_deposits(1).unwrap().is_empty());
        assert_eq!(state.get_deposits(2).unwrap().len(), 1);
    }

    #[test]
    fn votes_are_voter_ordered_and_overwrite() {
        let state = NullState::new();
        let alice = Address::new("agora_alice");
        state
            .put_vote(&Vote::simple(1, alice.clone(), VoteOption::No))
            .unwrap();
        state
            .put_vote(&Vote::simple(1, alice.clone(), VoteOption::Yes))
            .unwrap();
        let votes = state.get_votes(1).unwrap();
        assert_eq!(votes.len(), 1);
        assert_eq!(votes[0].options[0].option, VoteOption::Yes);
    }

    #[test]
    fn queue_insert_is_idempotent_and_ordered() {
        let state = NullState::new();
        state.insert(QueueId::Active, b"bb").unwrap();
        state.insert(QueueId::Active, b"aa").unwrap();
        state.insert(QueueId::Active, b"aa").unwrap();

        let keys = state.iter_keys(QueueId::Active).unwrap();
        assert_eq!(keys, vec![b"aa".to_vec(), b"bb".to_vec()]);

        let expired = state.range_to_inclusive(QueueId::Active, b"aa").unwrap();
        assert_eq!(expired, vec![b"aa".to_vec()]);

        assert!(state.contains(QueueId::Active, b"bb").unwrap());
        assert!(!state.contains(QueueId::Inactive, b"bb").unwrap());
    }

    #[test]
    fn action_fifo_order_and_count() {
        let state = NullState::new();
        let s0 = state.enqueue_action(b"first").unwrap();
        let s1 = state.enqueue_action(b"second").unwrap();
        assert!(s0 < s1);
        assert_eq!(state.action_count().unwrap(), 2);

        let all = state.iter_actions().unwrap();
        assert_eq!(all[0].1, b"first".to_vec());
        assert_eq!(all[1].1, b"second".to_vec());

        state.delete_action(s0).unwrap();
        assert_eq!(state.action_count().unwrap(), 1);
    }
}
