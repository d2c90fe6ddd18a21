use crate::bank::BankError;
use agora_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GovError {
    #[error("queue key has invalid length {0}, expected 16")]
    MalformedQueueKey(usize),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Bank(#[from] BankError),
}
