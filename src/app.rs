//! Todos Frontend App
//!
//! Root component: owns the store and derives the displayed view.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoFooter, TodoInput, TodoList};
use crate::list;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::restore());

    // Provide the store to all children
    provide_context(store);

    // Derived views, recomputed from the current snapshot
    let filtered = Memo::new(move |_| list::filter_items(&store.items().get(), store.filter().get()));
    let items_left = Memo::new(move |_| list::active_count(&store.items().get()));

    view! {
        <div class="app-container">
            <h1 class="app-header">"todos"</h1>

            <div class="todo-panel">
                <TodoInput />

                <TodoList items=filtered />

                <TodoFooter items_left=items_left />
            </div>
        </div>
    }
}
