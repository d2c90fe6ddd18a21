//! Validator collaborator consumed by the action processor.

use agora_exec::StateScope;
use agora_store::StoreError;
use agora_types::Address;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("validator {0} not found")]
    UnknownValidator(String),

    #[error("validator {0} is not jailed")]
    NotJailed(String),

    #[error("cannot unjail validator {validator}: {reason}")]
    CannotUnjail { validator: String, reason: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validator set operations, all performed through the caller's scope so a
/// failed action rolls its writes back with the rest of the scope.
pub trait ValidatorKeeper {
    /// Whether the validator exists in the current set.
    fn contains(&self, scope: &StateScope<'_>, validator: &Address) -> Result<bool, ValidatorError>;

    /// Release a jailed validator back into the active set.
    fn unjail(&self, scope: &mut StateScope<'_>, validator: &Address)
        -> Result<(), ValidatorError>;

    /// Slash a validator's stake by `fraction_bps` as of the given
    /// distribution height.
    fn slash(
        &self,
        scope: &mut StateScope<'_>,
        validator: &Address,
        distribution_height: u64,
        fraction_bps: u32,
    ) -> Result<(), ValidatorError>;
}
