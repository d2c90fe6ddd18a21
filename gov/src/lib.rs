//! Governance engine for the Agora core.
//!
//! Per block, the [`BlockDriver`] drains two time-ordered proposal queues:
//! proposals whose deposit period lapsed are dropped and their deposits
//! burned; proposals whose voting period lapsed are tallied, their deposits
//! burned or refunded, and passing payloads executed speculatively with
//! commit-or-discard semantics. Genesis import/export reconstructs queue
//! membership purely from proposal status.
//!
//! Everything here is deterministic: queue order is (expiry time, id),
//! tally math is integer-only, and the only clock is the block context.

pub mod bank;
pub mod driver;
pub mod error;
pub mod events;
pub mod genesis;
pub mod hooks;
pub mod queue;
pub mod staking;
pub mod tally;

pub use bank::{BankError, DepositBank};
pub use driver::BlockDriver;
pub use error::GovError;
pub use genesis::{export_genesis, import_genesis, GenesisState};
pub use hooks::{GovHooks, NoopHooks};
pub use queue::{ProposalQueues, QueueKey};
pub use staking::Staking;
pub use tally::{tally, TallyOutcome};
