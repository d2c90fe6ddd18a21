//! Shared error types.

use thiserror::Error;

/// Failure to parse an [`crate::Address`] from untrusted input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address {0:?} does not start with agora_")]
    BadPrefix(String),

    #[error("address has no body after the prefix")]
    Empty,
}
