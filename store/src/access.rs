//! Unified state access trait: one handle to every governance store.

use crate::action::ActionStore;
use crate::deposit::DepositStore;
use crate::params::ParamsStore;
use crate::proposal::ProposalStore;
use crate::queue::QueueStore;
use crate::vote::VoteStore;

/// Aggregate interface providing access to all governance storage concerns.
///
/// The block driver and genesis import/export are generic over this trait,
/// so a backend only has to wire up its component stores once.
pub trait StateAccess {
    type Proposals: ProposalStore;
    type Deposits: DepositStore;
    type Votes: VoteStore;
    type Queues: QueueStore;
    type Params: ParamsStore;
    type Actions: ActionStore;

    fn proposals(&self) -> &Self::Proposals;
    fn deposits(&self) -> &Self::Deposits;
    fn votes(&self) -> &Self::Votes;
    fn queues(&self) -> &Self::Queues;
    fn params(&self) -> &Self::Params;
    fn actions(&self) -> &Self::Actions;
}
