//! Edit Input Component
//!
//! Auto-focused text input shared by item editing and the add row.

use leptos::html::Input;
use leptos::prelude::*;

/// Uncontrolled input pre-filled with `initial`.
///
/// Blur always commits. Enter commits and Escape cancels only when
/// `keyboard` is set.
#[component]
pub fn EditInput(
    #[prop(into)] initial: String,
    #[prop(optional, into)] placeholder: String,
    keyboard: bool,
    #[prop(into)] on_commit: Callback<String>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let input_ref = NodeRef::<Input>::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            if let Err(e) = input.focus() {
                log::debug!("[TODO] focus failed: {:?}", e);
            }
        }
    });

    view! {
        <input
            type="text"
            class="edit-input"
            node_ref=input_ref
            value=initial
            placeholder=placeholder
            on:blur=move |ev| on_commit.run(event_target_value(&ev))
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if !keyboard {
                    return;
                }
                match ev.key().as_str() {
                    "Enter" => {
                        ev.prevent_default();
                        on_commit.run(event_target_value(&ev));
                    }
                    "Escape" => {
                        ev.prevent_default();
                        on_cancel.run(());
                    }
                    _ => {}
                }
            }
        />
    }
}
