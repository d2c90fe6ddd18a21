//! Lifecycle notification hooks invoked by the block driver.

use agora_types::ProposalId;

/// External notifications for proposal lifecycle transitions. All methods
/// default to no-ops; implementors override what they observe.
pub trait GovHooks {
    /// A proposal was dropped for failing to meet the minimum deposit.
    fn proposal_failed_min_deposit(&mut self, _id: ProposalId) {}

    /// A proposal's voting period ended with some terminal outcome.
    fn voting_period_ended(&mut self, _id: ProposalId) {}
}

/// Hooks that observe nothing.
pub struct NoopHooks;

impl GovHooks for NoopHooks {}
