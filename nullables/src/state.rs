//! Nullable raw application state.

use agora_store::{KvState, StoreError};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// An in-memory byte-level state for testing payload handlers and the
/// transactional executor.
#[derive(Default)]
pub struct NullKvState {
    entries: Mutex<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl NullKvState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full ordered dump of the state, for byte-for-byte comparisons.
    pub fn dump(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl KvState for NullKvState {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &[u8]) -> Result<(), StoreError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_delete_roundtrip() {
        let state = NullKvState::new();
        state.set(b"k", b"v").unwrap();
        assert_eq!(state.get(b"k").unwrap(), Some(b"v".to_vec()));
        state.delete(b"k").unwrap();
        assert_eq!(state.get(b"k").unwrap(), None);
        assert!(state.is_empty());
    }

    #[test]
    fn dump_is_key_ordered() {
        let state = NullKvState::new();
        state.set(b"b", b"2").unwrap();
        state.set(b"a", b"1").unwrap();
        let dump = state.dump();
        assert_eq!(dump[0].0, b"a".to_vec());
        assert_eq!(dump[1].0, b"b".to_vec());
    }
}
