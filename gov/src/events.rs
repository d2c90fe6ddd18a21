//! Event kinds and attributes emitted by the block driver.

use agora_types::{Event, ProposalId};

/// A proposal left the deposit period without meeting the minimum deposit.
pub const EVENT_INACTIVE_PROPOSAL: &str = "inactive_proposal";
/// A proposal's voting period ended and it was tallied.
pub const EVENT_ACTIVE_PROPOSAL: &str = "active_proposal";

pub const ATTR_PROPOSAL_ID: &str = "proposal_id";
pub const ATTR_PROPOSAL_RESULT: &str = "proposal_result";

pub const RESULT_DROPPED: &str = "proposal_dropped";
pub const RESULT_PASSED: &str = "proposal_passed";
pub const RESULT_REJECTED: &str = "proposal_rejected";
pub const RESULT_FAILED: &str = "proposal_failed";

/// Terminal event for a dropped deposit-period proposal.
pub fn inactive_proposal(id: ProposalId) -> Event {
    Event::new(EVENT_INACTIVE_PROPOSAL)
        .attr(ATTR_PROPOSAL_ID, id.to_string())
        .attr(ATTR_PROPOSAL_RESULT, RESULT_DROPPED)
}

/// Terminal event for a tallied voting-period proposal.
pub fn active_proposal(id: ProposalId, result: &str) -> Event {
    Event::new(EVENT_ACTIVE_PROPOSAL)
        .attr(ATTR_PROPOSAL_ID, id.to_string())
        .attr(ATTR_PROPOSAL_RESULT, result)
}
