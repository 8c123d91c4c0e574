//! List Operations
//!
//! Pure functions over the item list. Every mutation returns a fresh
//! `Vec<Item>` so consumers observing by identity always see a new list.

use crate::models::{Filter, Item};

/// Hard cap on staged input length, in characters
pub const MAX_TEXT_LEN: usize = 250;

/// Next fresh id: one past the largest id in the list
pub fn next_id(items: &[Item]) -> u64 {
    items.iter().map(|item| item.id).max().map_or(1, |max| max + 1)
}

/// Prepend a new item built from `text`, trimmed.
/// Returns `None` for empty or whitespace-only text (no-op, not an error).
pub fn add_item(items: &[Item], text: &str) -> Option<Vec<Item>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut updated = Vec::with_capacity(items.len() + 1);
    updated.push(Item::new(next_id(items), trimmed.to_string()));
    updated.extend(items.iter().cloned());
    Some(updated)
}

/// Flip the `completed` flag of the item with the given id, replacing
/// just that entry. Returns `None` when the id is not in the list.
pub fn toggle_item(items: &[Item], id: u64) -> Option<Vec<Item>> {
    if !items.iter().any(|item| item.id == id) {
        return None;
    }
    Some(
        items
            .iter()
            .map(|item| {
                if item.id == id {
                    Item {
                        completed: !item.completed,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect(),
    )
}

/// Drop every completed item, keeping the rest in order
pub fn clear_completed(items: &[Item]) -> Vec<Item> {
    items.iter().filter(|item| !item.completed).cloned().collect()
}

/// The subset of `items` visible under `filter`, in list order
pub fn filter_items(items: &[Item], filter: Filter) -> Vec<Item> {
    items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

/// Count of not-yet-completed items, always over the full list
pub fn active_count(items: &[Item]) -> usize {
    items.iter().filter(|item| !item.completed).count()
}

/// Truncate staged text to [`MAX_TEXT_LEN`] characters
pub fn clip_text(text: &str) -> String {
    text.chars().take(MAX_TEXT_LEN).collect()
}
