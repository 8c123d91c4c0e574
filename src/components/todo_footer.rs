//! Todo Footer Component
//!
//! Active count, filter buttons, and bulk clear.

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::{store_clear_completed, store_set_filter, use_app_store, AppStateStoreFields};

/// Filter options in display order
const FILTERS: &[(Filter, &str)] = &[
    (Filter::All, "All"),
    (Filter::Active, "Active"),
    (Filter::Completed, "Completed"),
];

/// Footer bar below the list
#[component]
pub fn TodoFooter(items_left: Memo<usize>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <footer class="todo-footer">
            <span class="items-left">
                {move || format!("{} items left", items_left.get())}
            </span>

            <div class="filter-buttons">
                {FILTERS.iter().map(|(mode, label)| {
                    let mode = *mode;
                    let is_selected = move || store.filter().get() == mode;
                    view! {
                        <button
                            class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| store_set_filter(&store, mode)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <button class="clear-btn" on:click=move |_| store_clear_completed(&store)>
                "Clear completed"
            </button>
        </footer>
    }
}
