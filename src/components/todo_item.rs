//! Todo Item Component
//!
//! A single row in the list.

use leptos::prelude::*;

use crate::models::Item;
use crate::store::{store_toggle_item, use_app_store};

/// One item row: checkbox plus text
#[component]
pub fn TodoItem(item: Item) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let completed = item.completed;
    let text = item.text.clone();

    view! {
        <li class=move || if completed { "todo-item completed" } else { "todo-item" }>
            <label class="todo-checkbox">
                <input
                    type="checkbox"
                    checked=completed
                    on:change=move |_| store_toggle_item(&store, id)
                />
                <span class="checkmark"></span>
            </label>

            <span class="todo-text">{text}</span>
        </li>
    }
}
