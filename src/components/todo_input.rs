//! Todo Input Component
//!
//! Staging buffer for a new item's text. Submits on Enter or on a click
//! anywhere in the wrapper region; a click landing on the already-focused
//! field is the same gesture as focusing it, so it must not submit again.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::list;
use crate::store::{store_add_item, use_app_store};

/// How long the arrow stays highlighted after a submission
const ACTIVE_RESET_MS: u32 = 200;

/// Whether the staging field is the document's active element
fn input_has_focus(input_ref: NodeRef<html::Input>) -> bool {
    let Some(input) = input_ref.get() else {
        return false;
    };
    let input: web_sys::Element = input.into();
    document().active_element().is_some_and(|active| active == input)
}

/// Input field for staging and committing new items
#[component]
pub fn TodoInput() -> impl IntoView {
    let store = use_app_store();

    let (draft, set_draft) = signal(String::new());
    let (is_active, set_is_active) = signal(false);
    let input_ref: NodeRef<html::Input> = NodeRef::new();
    let pending_reset = StoredValue::new_local(None::<Timeout>);

    let try_submit = move || {
        if !store_add_item(&store, &draft.get()) {
            return;
        }
        set_draft.set(String::new());
        set_is_active.set(true);
        // Cancel any reset still pending from the previous submission
        let reset = Timeout::new(ACTIVE_RESET_MS, move || set_is_active.set(false));
        pending_reset.update_value(|pending| {
            if let Some(prev) = pending.replace(reset) {
                prev.cancel();
            }
        });
    };

    view! {
        <div
            class="input-wrapper"
            on:click=move |_| {
                if !input_has_focus(input_ref) {
                    try_submit();
                }
            }
        >
            <div class=move || {
                if is_active.get() { "input-arrow active" } else { "input-arrow" }
            }></div>
            <input
                type="text"
                class="todo-input"
                placeholder="What needs to be done?"
                maxlength="250"
                node_ref=input_ref
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_draft.set(list::clip_text(&input.value()));
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        try_submit();
                    }
                }
                on:focus=move |_| set_is_active.set(true)
                on:blur=move |_| set_is_active.set(false)
            />
        </div>
    }
}
