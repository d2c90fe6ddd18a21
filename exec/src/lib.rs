//! Transactional execution for the Agora governance core.
//!
//! A [`StateScope`] buffers writes and events over a base state; nothing
//! reaches the base until `commit`. Dropping a scope on any other exit path
//! discards everything, which makes the scope the system's only rollback
//! primitive. The [`Router`] resolves payload kinds to handlers, and
//! [`execute_payload`] runs a proposal payload inside one scope.

pub mod error;
pub mod executor;
pub mod router;
pub mod scope;

pub use error::ExecError;
pub use executor::execute_payload;
pub use router::{Handler, Router};
pub use scope::StateScope;
