//! Deposit ledger collaborator.
//!
//! The core never moves balances itself: burning and refunding deposits go
//! through this trait, and the module account it manages mirrors the sum of
//! all locked deposits (checked at genesis import).

use agora_types::{Address, Amount};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("insufficient module balance: need {needed}, have {available}")]
    InsufficientModuleBalance { needed: Amount, available: Amount },

    #[error("{0}")]
    Other(String),
}

/// Ledger operations on the deposit module account, consumed by the driver
/// and genesis import.
pub trait DepositBank {
    /// Permanently burn `amount` from the module account.
    fn burn(&mut self, amount: Amount) -> Result<(), BankError>;

    /// Return `amount` from the module account to a depositor.
    fn refund(&mut self, depositor: &Address, amount: Amount) -> Result<(), BankError>;

    /// Balance of the module account, or `None` if the account has never
    /// been created.
    fn module_balance(&self) -> Option<Amount>;

    /// Materialize the module account if it does not exist yet.
    fn ensure_module_account(&mut self);
}
