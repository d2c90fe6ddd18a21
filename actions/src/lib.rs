//! Deferred validator actions for the Agora core.
//!
//! Validator operations that must not take effect mid-block are queued as
//! tagged actions and drained once per block by the [`ActionProcessor`],
//! each inside its own isolated scope: success commits, failure is logged
//! and discarded, and the entry is deleted either way (at-most-once).

pub mod action;
pub mod error;
pub mod processor;
pub mod validator;

pub use action::{DeferredAction, SlashEvent, UnjailRequest};
pub use error::ActionError;
pub use processor::ActionProcessor;
pub use validator::{ValidatorError, ValidatorKeeper};
