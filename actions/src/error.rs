use agora_store::StoreError;
use agora_types::AddressError;
use thiserror::Error;

use crate::validator::ValidatorError;

#[derive(Debug, Error)]
pub enum ActionError {
    /// Malformed input; nothing was mutated.
    #[error("validation failed: {0}")]
    Validation(#[from] AddressError),

    #[error("undecodable action payload: {0}")]
    Decode(String),

    #[error(transparent)]
    Validator(#[from] ValidatorError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
