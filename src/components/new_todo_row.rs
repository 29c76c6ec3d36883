//! New Todo Row Component
//!
//! Transient input row for creating an item (modal mode).

use leptos::prelude::*;

use crate::components::EditInput;
use crate::context::use_todo;

#[component]
pub fn NewTodoRow() -> impl IntoView {
    let ctx = use_todo();

    view! {
        <li class="todo-row new-todo-row">
            <EditInput
                initial=""
                placeholder="New item..."
                keyboard=true
                on_commit=move |text: String| ctx.submit_new(text)
                on_cancel=move |_: ()| ctx.cancel_new()
            />
        </li>
    }
}
