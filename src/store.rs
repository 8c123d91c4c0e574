//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All list
//! mutations go through the helper functions below, which persist the
//! updated list before publishing it to subscribers.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list;
use crate::models::{Filter, Item};
use crate::storage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All items, newest first
    pub items: Vec<Item>,
    /// Which subset is currently displayed; resets to All on reload
    pub filter: Filter,
}

impl AppState {
    /// Startup state: whatever the browser has persisted, unfiltered
    pub fn restore() -> Self {
        Self {
            items: storage::load(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a new item from staged text. Returns whether an item was created
/// so the input can clear its buffer only on success.
pub fn store_add_item(store: &AppStore, text: &str) -> bool {
    let updated = match list::add_item(&store.items().read(), text) {
        Some(updated) => updated,
        None => return false,
    };
    storage::save(&updated);
    *store.items().write() = updated;
    true
}

/// Flip an item's completed flag. Unknown ids are a silent no-op.
pub fn store_toggle_item(store: &AppStore, id: u64) {
    let Some(updated) = list::toggle_item(&store.items().read(), id) else {
        return;
    };
    storage::save(&updated);
    *store.items().write() = updated;
}

/// Remove every completed item
pub fn store_clear_completed(store: &AppStore) {
    let updated = list::clear_completed(&store.items().read());
    storage::save(&updated);
    *store.items().write() = updated;
}

/// Switch the displayed subset. Never touches persistence.
pub fn store_set_filter(store: &AppStore, filter: Filter) {
    *store.filter().write() = filter;
}
