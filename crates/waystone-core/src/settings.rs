//! Persistent settings seam.
//!
//! The host owns durable key-value storage (player preferences, device
//! settings). The core only needs integer slots: the active locale id and
//! the host's animation/voice toggles.

use std::cell::RefCell;
use std::collections::HashMap;

/// Narrow interface over the host's key-value settings storage.
pub trait SettingsStore {
    /// Returns the stored value for `key`, or `default` if absent.
    fn get_int(&self, key: &str, default: i64) -> i64;

    /// Stores `value` under `key`.
    fn set_int(&self, key: &str, value: i64);
}

/// In-memory settings store.
///
/// Suitable for the composition root of a single process and for tests;
/// hosts with durable preferences supply their own implementation.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RefCell<HashMap<String, i64>>,
}

impl MemorySettingsStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get_int(&self, key: &str, default: i64) -> i64 {
        self.values.borrow().get(key).copied().unwrap_or(default)
    }

    fn set_int(&self, key: &str, value: i64) {
        self.values.borrow_mut().insert(key.to_owned(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_int_returns_default_when_absent() {
        let store = MemorySettingsStore::new();
        assert_eq!(store.get_int("locale", 0), 0);
        assert_eq!(store.get_int("locale", 7), 7);
    }

    #[test]
    fn test_set_int_round_trips() {
        let store = MemorySettingsStore::new();
        store.set_int("locale", 1);
        assert_eq!(store.get_int("locale", 0), 1);
        store.set_int("locale", 0);
        assert_eq!(store.get_int("locale", 5), 0);
    }
}
