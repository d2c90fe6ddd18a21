//! Per-block queue drains.
//!
//! The driver is the sole writer that moves a proposal out of either queue
//! into a terminal state. Each drain snapshots its cutoff-bounded key set
//! first and mutates in a second pass, so an entry is visited at most once
//! per block and a removed entry can never be revisited.

use agora_exec::{execute_payload, Router};
use agora_store::{
    DepositStore, KvState, ParamsStore, ProposalStore, QueueId, StateAccess, VoteStore,
};
use agora_types::{BlockContext, Event, ProposalStatus};

use crate::bank::DepositBank;
use crate::error::GovError;
use crate::events;
use crate::hooks::GovHooks;
use crate::queue::ProposalQueues;
use crate::staking::Staking;
use crate::tally::tally;

/// Drains the two proposal queues once per block.
pub struct BlockDriver<'a, S: StateAccess> {
    state: &'a S,
    app: &'a dyn KvState,
    bank: &'a mut dyn DepositBank,
    staking: &'a dyn Staking,
    router: &'a Router,
    hooks: &'a mut dyn GovHooks,
}

impl<'a, S: StateAccess> BlockDriver<'a, S> {
    pub fn new(
        state: &'a S,
        app: &'a dyn KvState,
        bank: &'a mut dyn DepositBank,
        staking: &'a dyn Staking,
        router: &'a Router,
        hooks: &'a mut dyn GovHooks,
    ) -> Self {
        Self {
            state,
            app,
            bank,
            staking,
            router,
            hooks,
        }
    }

    /// Run the full drain-and-resolve pass for one block and return the
    /// block's event log. Every drained entry produces exactly one terminal
    /// event, even when payload execution failed.
    pub fn end_block(&mut self, ctx: &BlockContext) -> Result<Vec<Event>, GovError> {
        let mut block_events = Vec::new();
        self.drain_inactive(ctx, &mut block_events)?;
        self.drain_active(ctx, &mut block_events)?;
        Ok(block_events)
    }

    /// Delete dead proposals and burn their deposits. A proposal is dead
    /// when its deposit period lapsed without reaching the minimum deposit.
    fn drain_inactive(
        &mut self,
        ctx: &BlockContext,
        block_events: &mut Vec<Event>,
    ) -> Result<(), GovError> {
        let state = self.state;
        let queues = ProposalQueues::new(state.queues());
        let params = state.params().get_params()?;

        for key in queues.expired(QueueId::Inactive, ctx.time)? {
            let proposal = state.proposals().get_proposal(key.proposal_id)?;

            self.bank.burn(proposal.total_deposit)?;
            state.deposits().delete_deposits(proposal.id)?;
            state.proposals().delete_proposal(proposal.id)?;
            queues.remove(QueueId::Inactive, key)?;

            self.hooks.proposal_failed_min_deposit(proposal.id);
            block_events.push(events::inactive_proposal(proposal.id));

            tracing::info!(
                proposal = proposal.id,
                title = proposal.payload.title().unwrap_or(""),
                min_deposit = %params.min_deposit,
                total_deposit = %proposal.total_deposit,
                "proposal did not meet minimum deposit; deleted"
            );
        }
        Ok(())
    }

    /// Tally proposals whose voting period lapsed, settle their deposits,
    /// and execute passing payloads speculatively.
    fn drain_active(
        &mut self,
        ctx: &BlockContext,
        block_events: &mut Vec<Event>,
    ) -> Result<(), GovError> {
        let state = self.state;
        let queues = ProposalQueues::new(state.queues());
        let params = state.params().get_params()?;

        for key in queues.expired(QueueId::Active, ctx.time)? {
            let mut proposal = state.proposals().get_proposal(key.proposal_id)?;
            let votes = state.votes().get_votes(proposal.id)?;
            let outcome = tally(&votes, self.staking, &params);

            if outcome.burn_deposits {
                self.bank.burn(proposal.total_deposit)?;
            } else {
                for deposit in state.deposits().get_deposits(proposal.id)? {
                    self.bank.refund(&deposit.depositor, deposit.amount)?;
                }
            }
            state.deposits().delete_deposits(proposal.id)?;
            state.votes().delete_votes(proposal.id)?;

            // A passing payload may mutate state, so it runs in an isolated
            // scope. On failure nothing is written and only the reason is
            // kept for the log; deposit settlement above stands either way.
            let (result_tag, log_msg) = if outcome.passes {
                match execute_payload(self.router, self.app, &proposal.payload, block_events) {
                    Ok(()) => {
                        proposal.status = ProposalStatus::Passed;
                        (events::RESULT_PASSED, "passed".to_string())
                    }
                    Err(err) => {
                        proposal.status = ProposalStatus::Failed;
                        (events::RESULT_FAILED, format!("passed, but {err}"))
                    }
                }
            } else {
                proposal.status = ProposalStatus::Rejected;
                (events::RESULT_REJECTED, "rejected".to_string())
            };

            proposal.final_tally = Some(outcome.tally);
            state.proposals().put_proposal(&proposal)?;
            queues.remove(QueueId::Active, key)?;

            self.hooks.voting_period_ended(proposal.id);

            match proposal.payload.title() {
                Some(title) => tracing::info!(
                    proposal = proposal.id,
                    title,
                    result = %log_msg,
                    "proposal tallied"
                ),
                None => tracing::info!(
                    proposal = proposal.id,
                    result = %log_msg,
                    "proposal tallied"
                ),
            }

            block_events.push(events::active_proposal(proposal.id, result_tag));
        }
        Ok(())
    }
}
