//! Abstract storage traits for the Agora governance core.
//!
//! Every storage backend (persistent or in-memory for testing) implements
//! these traits. The rest of the codebase depends only on the traits; the
//! core consumes the state access layer, it never implements one.

pub mod access;
pub mod action;
pub mod deposit;
pub mod error;
pub mod params;
pub mod proposal;
pub mod queue;
pub mod state;
pub mod vote;

pub use access::StateAccess;
pub use action::ActionStore;
pub use deposit::DepositStore;
pub use error::StoreError;
pub use params::ParamsStore;
pub use proposal::ProposalStore;
pub use queue::{QueueId, QueueStore};
pub use state::KvState;
pub use vote::VoteStore;
