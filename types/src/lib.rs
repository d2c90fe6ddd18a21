//! Fundamental types for the Agora governance core.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: addresses, amounts, timestamps, block context, proposals,
//! votes, payloads, events, and governance parameters.

pub mod address;
pub mod amount;
pub mod block;
pub mod error;
pub mod event;
pub mod params;
pub mod payload;
pub mod proposal;
pub mod time;
pub mod vote;

pub use address::Address;
pub use amount::Amount;
pub use block::BlockContext;
pub use error::AddressError;
pub use event::Event;
pub use params::GovParams;
pub use payload::{Content, Msg, ProposalPayload};
pub use proposal::{Deposit, Proposal, ProposalId, ProposalStatus, TallyResult};
pub use time::Timestamp;
pub use vote::{Vote, VoteOption, WeightedVoteOption};
