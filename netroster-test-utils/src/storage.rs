//! In-memory session storage standing in for the browser's local storage.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use netroster::{console::session::SessionStorage, error::SessionError};

/// Clones share the same entries, so a test can inspect what a context persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `value` under `key`.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Make every subsequent write and removal fail.
    pub fn fail_writes(&self) {
        self.fail_writes.set(true);
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionError> {
        if self.fail_writes.get() {
            return Err(SessionError::Storage("storage is full".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        if self.fail_writes.get() {
            return Err(SessionError::Storage("storage is unavailable".to_string()));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
