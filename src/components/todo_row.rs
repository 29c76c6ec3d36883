//! Todo Row Component
//!
//! One entry of the editable list.

use leptos::prelude::*;

use crate::components::EditInput;
use crate::config::ValidationMode;
use crate::context::use_todo;
use crate::models::TodoItem;
use crate::store::TodoStateStoreFields;

#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let ctx = use_todo();
    let id = item.id;
    let keyboard = ctx.mode() == ValidationMode::Modal;

    let body = if item.editing {
        view! {
            <EditInput
                initial=item.text.clone()
                keyboard=keyboard
                on_commit=move |text: String| ctx.commit_edit(id, text)
                on_cancel=move |_: ()| ctx.cancel_edit(id)
            />
            // Inline validation message
            {move || ctx.store.error().get().map(|msg| view! {
                <p class="error-text">{msg}</p>
            })}
        }
        .into_any()
    } else {
        view! {
            <span
                class="item-text"
                title="Double click to edit"
                on:dblclick=move |ev| {
                    ev.stop_propagation();
                    ctx.begin_edit(id);
                }
            >
                {item.text.clone()}
            </span>
            <button class="delete-btn" on:click=move |_| ctx.delete(id)>"Delete"</button>
        }
        .into_any()
    };

    view! {
        <li class=if item.complete { "todo-row completed" } else { "todo-row" }>
            <CompleteCheckbox checked=item.complete on_toggle=move |_: ()| ctx.toggle_complete(id) />
            {body}
        </li>
    }
}

/// Checkbox shared by the editable list and the completed section
#[component]
pub fn CompleteCheckbox(checked: bool, #[prop(into)] on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <label class="checkbox-container">
            <input
                type="checkbox"
                class="checkbox"
                prop:checked=checked
                on:change=move |ev| {
                    on_toggle.run(());
                    // A successful toggle re-renders the row; a rejected one must not stay flipped
                    event_target::<web_sys::HtmlInputElement>(&ev).set_checked(checked);
                }
            />
            <span class="checkmark"></span>
        </label>
    }
}
