//! Persistence of filter state between page visits.
//!
//! The browser's session storage sits behind [`KeyValueStorage`], so views
//! can restore their last selection and tests can use [`MemoryStorage`].

use crate::error::FilterError;
use crate::shared::config::Config;
use contracts::filter_state::FilterState;
use std::collections::HashMap;

/// String key-value store with the session storage contract
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, FilterError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), FilterError>;
    fn remove_item(&mut self, key: &str) -> Result<(), FilterError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, FilterError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), FilterError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), FilterError> {
        self.items.remove(key);
        Ok(())
    }
}

/// Filter state per view ("parts", "returns", ...) in a key-value store
pub struct FilterStore<S: KeyValueStorage> {
    storage: S,
    key_prefix: String,
}

impl<S: KeyValueStorage> FilterStore<S> {
    pub fn new(storage: S, config: &Config) -> Self {
        Self {
            storage,
            key_prefix: config.storage.key_prefix.clone(),
        }
    }

    fn key(&self, view: &str) -> String {
        format!("{}{}", self.key_prefix, view)
    }

    pub fn save(&mut self, view: &str, state: &FilterState) -> Result<(), FilterError> {
        let json = serde_json::to_string(state).map_err(|e| FilterError::Storage(e.to_string()))?;
        let key = self.key(view);
        self.storage.set_item(&key, &json)
    }

    /// Stored state of a view. Missing, unreadable or corrupt entries give
    /// the default state so the page still opens.
    pub fn load(&self, view: &str) -> FilterState {
        let key = self.key(view);
        match self.storage.get_item(&key) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
                tracing::warn!("stored filters for '{}' are corrupt, using defaults: {}", view, e);
                FilterState::default()
            }),
            Ok(None) => FilterState::default(),
            Err(e) => {
                tracing::warn!("cannot read stored filters for '{}': {}", view, e);
                FilterState::default()
            }
        }
    }

    pub fn reset(&mut self, view: &str) -> Result<(), FilterError> {
        let key = self.key(view);
        self.storage.remove_item(&key)
    }

    pub fn into_inner(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::catalog::FilterOption;
    use contracts::shared::range::DateRange;

    fn store() -> FilterStore<MemoryStorage> {
        FilterStore::new(MemoryStorage::new(), &Config::default())
    }

    #[test]
    fn test_save_and_load() {
        let mut store = store();
        let state = FilterState {
            brands: vec!["Audi".into()],
            categories: vec![FilterOption::new(100, "Engine")],
            date_range: DateRange::new(NaiveDate::from_ymd_opt(2024, 5, 1), None),
            ..Default::default()
        };
        store.save("parts", &state).unwrap();
        assert_eq!(store.load("parts"), state);
        assert!(store.load("returns").is_default());
    }

    #[test]
    fn test_keys_use_prefix() {
        let mut store = store();
        store.save("orders", &FilterState::default()).unwrap();
        let storage = store.into_inner();
        assert!(storage.get_item("inventory.filters.orders").unwrap().is_some());
    }

    #[test]
    fn test_corrupt_entry_falls_back_to_default() {
        let mut storage = MemoryStorage::new();
        storage.set_item("inventory.filters.parts", "{not json").unwrap();
        let store = FilterStore::new(storage, &Config::default());
        assert!(store.load("parts").is_default());
    }

    #[test]
    fn test_reset() {
        let mut store = store();
        let state = FilterState {
            search: "mirror".into(),
            ..Default::default()
        };
        store.save("parts", &state).unwrap();
        store.reset("parts").unwrap();
        assert!(store.load("parts").is_default());
        assert!(store.into_inner().is_empty());
    }
}
