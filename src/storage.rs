//! Persistent Storage
//!
//! Reads and writes the item list to a single localStorage slot as JSON.
//! The raw slot sits behind [`StorageSlot`] so tests can swap in an
//! in-memory backend.

use crate::models::Item;

/// The one localStorage key holding the serialized list
pub const STORAGE_KEY: &str = "todos";

/// A single named key-value slot
pub trait StorageSlot {
    /// Raw stored value, `None` when nothing has been written
    fn read(&self) -> Option<String>;
    /// Overwrite the slot, reporting whether the write took
    fn write(&self, value: &str) -> bool;
}

/// The browser's localStorage, keyed by [`STORAGE_KEY`]
pub struct LocalStorageSlot;

impl LocalStorageSlot {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl StorageSlot for LocalStorageSlot {
    fn read(&self) -> Option<String> {
        Self::storage()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn write(&self, value: &str) -> bool {
        match Self::storage() {
            Some(storage) => storage.set_item(STORAGE_KEY, value).is_ok(),
            None => false,
        }
    }
}

/// Decode a slot's contents. Absent or unparsable data counts as "no
/// prior data" and yields an empty list.
pub fn load_from(slot: &impl StorageSlot) -> Vec<Item> {
    slot.read()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Serialize the full list into the slot, replacing any prior value
pub fn save_to(slot: &impl StorageSlot, items: &[Item]) -> bool {
    match serde_json::to_string(items) {
        Ok(encoded) => slot.write(&encoded),
        Err(_) => false,
    }
}

/// Load the persisted list from localStorage
pub fn load() -> Vec<Item> {
    let items = load_from(&LocalStorageSlot);
    web_sys::console::log_1(&format!("[STORAGE] loaded {} items", items.len()).into());
    items
}

/// Persist the full list to localStorage
pub fn save(items: &[Item]) {
    if !save_to(&LocalStorageSlot, items) {
        web_sys::console::warn_1(&"[STORAGE] failed to persist items".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct MemorySlot {
        value: RefCell<Option<String>>,
    }

    impl MemorySlot {
        fn empty() -> Self {
            Self {
                value: RefCell::new(None),
            }
        }

        fn with(raw: &str) -> Self {
            Self {
                value: RefCell::new(Some(raw.to_string())),
            }
        }
    }

    impl StorageSlot for MemorySlot {
        fn read(&self) -> Option<String> {
            self.value.borrow().clone()
        }

        fn write(&self, value: &str) -> bool {
            *self.value.borrow_mut() = Some(value.to_string());
            true
        }
    }

    fn make_item(id: u64, text: &str, completed: bool) -> Item {
        Item {
            id,
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn test_load_absent_slot_returns_empty() {
        let slot = MemorySlot::empty();
        assert!(load_from(&slot).is_empty());
    }

    #[test]
    fn test_load_malformed_returns_empty() {
        assert!(load_from(&MemorySlot::with("not json")).is_empty());
        assert!(load_from(&MemorySlot::with("{\"wrong\":\"shape\"}")).is_empty());
        assert!(load_from(&MemorySlot::with("[{\"id\":\"nan\"}]")).is_empty());
    }

    #[test]
    fn test_round_trip_preserves_content_and_order() {
        let slot = MemorySlot::empty();
        let items = vec![
            make_item(3, "newest", false),
            make_item(2, "done", true),
            make_item(1, "oldest", false),
        ];

        assert!(save_to(&slot, &items));
        assert_eq!(load_from(&slot), items);
    }

    #[test]
    fn test_round_trip_empty_list() {
        let slot = MemorySlot::with("[{\"id\":1,\"text\":\"stale\",\"completed\":false}]");

        assert!(save_to(&slot, &[]));
        assert!(load_from(&slot).is_empty());
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let slot = MemorySlot::empty();

        save_to(&slot, &[make_item(1, "first", false)]);
        save_to(&slot, &[make_item(2, "second", true)]);

        let loaded = load_from(&slot);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 2);
        assert!(loaded[0].completed);
    }

    #[test]
    fn test_interchange_field_names() {
        let slot = MemorySlot::empty();
        save_to(&slot, &[make_item(1, "Buy milk", false)]);

        let raw = slot.read().unwrap();
        assert_eq!(raw, "[{\"id\":1,\"text\":\"Buy milk\",\"completed\":false}]");
    }

    #[test]
    fn test_loads_wall_clock_ids_from_prior_sessions() {
        // Earlier versions of the app stored millisecond-epoch ids
        let slot = MemorySlot::with("[{\"id\":1700000000000,\"text\":\"Old task\",\"completed\":true}]");

        let loaded = load_from(&slot);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 1_700_000_000_000);
    }
}
