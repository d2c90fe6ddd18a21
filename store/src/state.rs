//! Raw application-state storage trait.

use crate::StoreError;

/// Byte-level application state: the surface proposal payload handlers and
/// validator-keeper writes go through, and the base the transactional
/// executor buffers over.
///
/// Implementations use interior mutability; the core is single-threaded and
/// never holds two scopes over the same base at once.
pub trait KvState {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    fn set(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn delete(&self, key: &[u8]) -> Result<(), StoreError>;
}
