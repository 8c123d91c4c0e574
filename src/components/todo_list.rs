//! Todo List Component
//!
//! Renders the filtered item sequence.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::models::Item;

/// List view over the currently visible items
#[component]
pub fn TodoList(items: Memo<Vec<Item>>) -> impl IntoView {
    view! {
        <ul class="todo-list">
            <For
                each=move || items.get()
                // Key on completed too so a toggle re-renders the row
                key=|item| (item.id, item.completed)
                children=move |item| {
                    view! { <TodoItem item=item /> }
                }
            />
        </ul>
    }
}
