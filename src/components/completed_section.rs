//! Completed Section Component
//!
//! Read-only view of completed items with a show/hide toggle.

use leptos::prelude::*;

use crate::components::CompleteCheckbox;
use crate::context::use_todo;
use crate::store::{store_completed_count, store_completed_items, TodoStateStoreFields};

#[component]
pub fn CompletedSection() -> impl IntoView {
    let ctx = use_todo();
    let show = move || ctx.store.show_completed().get();

    view! {
        <hr class="divider" />
        <div class="completed-header">
            // Count is shown whether or not the list is expanded
            <span class="completed-count">
                {move || format!("Completed Items: {}", store_completed_count(&ctx.store))}
            </span>
            <button class="toggle-completed-btn" on:click=move |_| ctx.toggle_show_completed()>
                {move || if show() { "Hide" } else { "Show All" }}
            </button>
        </div>

        <Show when=show>
            <ul class="completed-list">
                <For
                    each=move || store_completed_items(&ctx.store)
                    key=|item| (item.id, item.text.clone())
                    children=move |item| {
                        let id = item.id;
                        view! {
                            <li class="todo-row completed">
                                <CompleteCheckbox checked=true on_toggle=move |_: ()| ctx.toggle_complete(id) />
                                <span class="item-text">{item.text}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}
