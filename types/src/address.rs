//! Account address type with `agora_` prefix.

use crate::error::AddressError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An Agora account address, always prefixed with `agora_`.
///
/// Depositors, voters, and validators all live in the same address space.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// The standard prefix for all Agora addresses.
    pub const PREFIX: &'static str = "agora_";

    /// Create a new address from a trusted string.
    ///
    /// # Panics
    /// Panics if the string does not start with `agora_`. Use [`Address::parse`]
    /// for untrusted input.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(
            s.starts_with(Self::PREFIX),
            "address must start with agora_"
        );
        Self(s)
    }

    /// Parse an address from untrusted input (e.g. a queued action payload).
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        if !raw.starts_with(Self::PREFIX) {
            return Err(AddressError::BadPrefix(raw.to_string()));
        }
        if raw.len() <= Self::PREFIX.len() {
            return Err(AddressError::Empty);
        }
        Ok(Self(raw.to_string()))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this address is well-formed.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_prefixed_address() {
        let addr = Address::parse("agora_validator1").unwrap();
        assert_eq!(addr.as_str(), "agora_validator1");
        assert!(addr.is_valid());
    }

    #[test]
    fn parse_rejects_wrong_prefix() {
        assert!(matches!(
            Address::parse("agr_validator1"),
            Err(AddressError::BadPrefix(_))
        ));
    }

    #[test]
    fn parse_rejects_bare_prefix() {
        assert!(matches!(Address::parse("agora_"), Err(AddressError::Empty)));
    }

    #[test]
    #[should_panic]
    fn new_panics_on_bad_prefix() {
        Address::new("bogus_addr");
    }
}
