//! Todo List Component
//!
//! The widget itself: editable list, add controls and the completed section.

use leptos::prelude::*;

use crate::components::{CompletedSection, NewTodoRow, TodoRow};
use crate::config::ValidationMode;
use crate::context::use_todo;
use crate::store::TodoStateStoreFields;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_todo();
    let modal = ctx.mode() == ValidationMode::Modal;

    view! {
        <div
            class="todo-container"
            on:dblclick=move |ev: web_sys::MouseEvent| {
                // Only the empty background, not rows or controls
                if ev.target() == ev.current_target() {
                    ctx.request_add();
                }
            }
        >
            <h1>"To Do List"</h1>
            <p class="hint">
                {if modal { "Double click or press Add for input" } else { "Double click for input" }}
            </p>

            {modal.then(|| view! {
                <button class="add-btn" on:click=move |_| ctx.request_add()>"Add"</button>
            })}

            <ul class="todo-list">
                <For
                    each=move || ctx.store.items().get()
                    key=|item| (item.id, item.text.clone(), item.editing, item.complete)
                    children=move |item| view! { <TodoRow item=item /> }
                />
                <Show when=move || ctx.store.adding_new().get()>
                    <NewTodoRow />
                </Show>
            </ul>

            <CompletedSection />
        </div>
    }
}
