//! Todo View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The event handlers live in `handlers.rs` and operate on the plain
//! `TodoState`; components go through [`dispatch`] so every mutation
//! happens inside one store write.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::ValidationMode;
use crate::error::TodoResult;
use crate::feedback;
use crate::models::TodoItem;

/// Widget state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// All items, in creation order
    pub items: Vec<TodoItem>,
    /// Completed section expanded
    pub show_completed: bool,
    /// Transient add row is open (modal mode)
    pub adding_new: bool,
    /// Inline validation message (inline mode)
    pub error: Option<String>,
    pub mode: ValidationMode,
    /// Last id handed out, keeps ids strictly increasing
    pub last_id: u64,
}

impl TodoState {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            show_completed: true,
            mode,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

/// Run a handler against the store and report its error, if any.
///
/// Returns the handler's value on success.
pub fn dispatch<T>(
    store: &TodoStore,
    action: &'static str,
    handler: impl FnOnce(&mut TodoState) -> TodoResult<T>,
) -> Option<T> {
    let mut outcome = None;
    store.update(|state| outcome = Some(handler(state)));

    match outcome? {
        Ok(value) => {
            log::debug!("[STORE] {} ok, {}", action, snapshot(store));
            Some(value)
        }
        Err(err) => {
            feedback::report(store.mode().get_untracked(), action, err);
            None
        }
    }
}

/// Items currently marked complete
pub fn store_completed_items(store: &TodoStore) -> Vec<TodoItem> {
    store.items().with(|items| items.iter().filter(|item| item.complete).cloned().collect())
}

pub fn store_completed_count(store: &TodoStore) -> usize {
    store.items().with(|items| items.iter().filter(|item| item.complete).count())
}

fn snapshot(store: &TodoStore) -> String {
    store
        .items()
        .with_untracked(|items| serde_json::to_string(items))
        .unwrap_or_else(|e| format!("<unserializable: {}>", e))
}
