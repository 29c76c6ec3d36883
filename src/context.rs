//! Todo Context
//!
//! Store handle plus the actions components call, provided via the
//! Leptos Context API.

use leptos::prelude::*;

use crate::config::ValidationMode;
use crate::models::ItemId;
use crate::store::{dispatch, TodoState, TodoStateStoreFields, TodoStore};

#[derive(Clone, Copy)]
pub struct TodoContext {
    pub store: TodoStore,
}

impl TodoContext {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            store: TodoStore::new(TodoState::new(mode)),
        }
    }

    /// Fixed for the store's lifetime, so read untracked
    pub fn mode(&self) -> ValidationMode {
        self.store.mode().get_untracked()
    }

    /// Background double-click or the add button
    pub fn request_add(&self) {
        let now = now_ms();
        dispatch(&self.store, "add", |state| state.request_add(now));
    }

    pub fn submit_new(&self, text: String) {
        let now = now_ms();
        dispatch(&self.store, "create", |state| state.submit_new(&text, now));
    }

    pub fn cancel_new(&self) {
        self.store.update(|state| state.cancel_new());
    }

    pub fn begin_edit(&self, id: ItemId) {
        dispatch(&self.store, "edit", |state| state.begin_edit(id));
    }

    pub fn commit_edit(&self, id: ItemId, text: String) {
        dispatch(&self.store, "commit", |state| state.commit_edit(id, &text));
    }

    pub fn cancel_edit(&self, id: ItemId) {
        self.store.update(|state| state.cancel_edit(id));
    }

    pub fn toggle_complete(&self, id: ItemId) {
        dispatch(&self.store, "complete", |state| state.toggle_complete(id));
    }

    pub fn delete(&self, id: ItemId) {
        self.store.update(|state| state.delete(id));
    }

    pub fn toggle_show_completed(&self) {
        self.store.update(|state| state.toggle_show_completed());
    }
}

/// Get the todo context
pub fn use_todo() -> TodoContext {
    expect_context::<TodoContext>()
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
