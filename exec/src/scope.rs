//! Buffered copy-on-write execution scope.
//!
//! # Usage
//!
//! ```ignore
//! let mut scope = StateScope::new(&state);
//! scope.set(b"key", b"value")?;
//! scope.emit(Event::new("message"));
//! scope.commit(&mut block_events)?;
//! ```
//!
//! If the scope is dropped without calling [`StateScope::commit`], every
//! buffered write and event is discarded and the base state is left
//! byte-for-byte unchanged. There is no cleanup to perform on the error
//! path: the scope never touches the base before commit.

use std::collections::BTreeMap;

use agora_store::{KvState, StoreError};
use agora_types::Event;

/// An isolated execution scope over a base [`KvState`].
///
/// Reads consult the write overlay first, then the base, so a handler
/// observes its own writes. `None` in the overlay marks a pending delete.
pub struct StateScope<'a> {
    base: &'a dyn KvState,
    writes: BTreeMap<Vec<u8>, Option<Vec<u8>>>,
    events: Vec<Event>,
}

impl<'a> StateScope<'a> {
    /// Open a scope over a base state. No writes reach the base until commit.
    pub fn new(base: &'a dyn KvState) -> Self {
        Self {
            base,
            writes: BTreeMap::new(),
            events: Vec::new(),
        }
    }

    /// Read a key, seeing this scope's own pending writes.
    pub fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        match self.writes.get(key) {
            Some(pending) => Ok(pending.clone()),
            None => self.base.get(key),
        }
    }

    /// Buffer a write.
    pub fn set(&mut self, key: &[u8], value: &[u8]) {
        self.writes.insert(key.to_vec(), Some(value.to_vec()));
    }

    /// Buffer a delete.
    pub fn delete(&mut self, key: &[u8]) {
        self.writes.insert(key.to_vec(), None);
    }

    /// Record an event in the scope's local log.
    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Events recorded so far (discarded unless the scope commits).
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of pending writes and deletes.
    pub fn pending_writes(&self) -> usize {
        self.writes.len()
    }

    /// Merge all buffered writes into the base state and append the scope's
    /// events to `sink`. Writes are applied in ascending key order, so the
    /// merge itself is replay-deterministic.
    pub fn commit(self, sink: &mut Vec<Event>) -> Result<(), StoreError> {
        for (key, pending) in self.writes {
            match pending {
                Some(value) => self.base.set(&key, &value)?,
                None => self.base.delete(&key)?,
            }
        }
        sink.extend(self.events);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_nullables::NullKvState;

    #[test]
    fn commit_merges_writes_and_events() {
        let state = NullKvState::new();
        state.set(b"existing", b"old").unwrap();

        let mut sink = Vec::new();
        let mut scope = StateScope::new(&state);
        scope.set(b"existing", b"new");
        scope.set(b"fresh", b"1");
        scope.emit(Event::new("message"));
        assert_eq!(scope.pending_writes(), 2);
        assert_eq!(scope.events().len(), 1);
        scope.commit(&mut sink).unwrap();

        assert_eq!(state.get(b"existing").unwrap(), Some(b"new".to_vec()));
        assert_eq!(state.get(b"fresh").unwrap(), Some(b"1".to_vec()));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn dropped_scope_leaves_base_unchanged() {
        let state = NullKvState::new();
        state.set(b"key", b"original").unwrap();

        {
            let mut scope = StateScope::new(&state);
            scope.set(b"key", b"mutated");
            scope.delete(b"key");
            scope.emit(Event::new("discarded"));
            // scope dropped here without commit
        }

        assert_eq!(state.get(b"key").unwrap(), Some(b"original".to_vec()));
    }

    #[test]
    fn scope_reads_its_own_writes() {
        let state = NullKvState::new();
        state.set(b"key", b"base").unwrap();

        let mut scope = StateScope::new(&state);
        assert_eq!(scope.get(b"key").unwrap(), Some(b"base".to_vec()));

        scope.set(b"key", b"overlaid");
        assert_eq!(scope.get(b"key").unwrap(), Some(b"overlaid".to_vec()));

        scope.delete(b"key");
        assert_eq!(scope.get(b"key").unwrap(), None);
        // Base still untouched.
        assert_eq!(state.get(b"key").unwrap(), Some(b"base".to_vec()));
    }

    #[test]
    fn commit_applies_deletes() {
        let state = NullKvState::new();
        state.set(b"doomed", b"x").unwrap();

        let mut sink = Vec::new();
        let mut scope = StateScope::new(&state);
        scope.delete(b"doomed");
        scope.commit(&mut sink).unwrap();

        assert_eq!(state.get(b"doomed").unwrap(), None);
    }
}
