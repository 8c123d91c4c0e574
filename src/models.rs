//! Frontend Models
//!
//! Data structures for the task list and its persisted form.

use serde::{Deserialize, Serialize};

/// A single task record. The serialized field names are the stored
/// interchange format, so they must stay `id` / `text` / `completed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

impl Item {
    /// Create a new, not-yet-completed item
    pub fn new(id: u64, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Which subset of items is displayed. UI state only, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Whether an item belongs to this filter's subset
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }
}
