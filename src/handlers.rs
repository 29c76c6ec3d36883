//! Todo Event Handlers
//!
//! Each handler maps one user action onto the current `TodoState`.
//! Rejected actions return a `TodoError` and leave the list untouched,
//! except for the mode-specific cleanup of the edit/add UI.

use crate::config::ValidationMode;
use crate::error::{TodoError, TodoResult};
use crate::models::{is_blank, ItemId, TodoItem};
use crate::store::TodoState;

impl TodoState {
    // ========================
    // Queries
    // ========================

    pub fn get(&self, id: ItemId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The item whose input is open, if any
    pub fn editing_item(&self) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.editing)
    }

    /// Read-only view: every item with `complete == true`, in list order
    pub fn completed(&self) -> impl Iterator<Item = &TodoItem> {
        self.items.iter().filter(|item| item.complete)
    }

    pub fn completed_count(&self) -> usize {
        self.completed().count()
    }

    // ========================
    // Ids
    // ========================

    /// Allocate an id from the creation instant, bumped past the last one
    pub fn allocate_id(&mut self, now_ms: u64) -> ItemId {
        let id = now_ms.max(self.last_id.saturating_add(1));
        self.last_id = id;
        ItemId(id)
    }

    // ========================
    // Add
    // ========================

    /// Background double-click / add button.
    ///
    /// Inline mode appends an empty item in edit mode and returns its id.
    /// Modal mode opens the transient add row and returns `None`.
    pub fn request_add(&mut self, now_ms: u64) -> TodoResult<Option<ItemId>> {
        if self.editing_item().is_some() || self.adding_new {
            return self.reject(TodoError::AddBlocked);
        }

        match self.mode {
            ValidationMode::Inline => {
                let id = self.allocate_id(now_ms);
                self.items.push(TodoItem::shell(id));
                self.error = None;
                log::info!("[TODO] Opened new item {}", id);
                Ok(Some(id))
            }
            ValidationMode::Modal => {
                self.adding_new = true;
                Ok(None)
            }
        }
    }

    /// Submit the add row (Enter or blur). The row closes either way.
    ///
    /// Returns `Ok(None)` when the row was not open.
    pub fn submit_new(&mut self, text: &str, now_ms: u64) -> TodoResult<Option<ItemId>> {
        if !self.adding_new {
            return Ok(None);
        }
        self.adding_new = false;

        if is_blank(text) {
            return self.reject(TodoError::EmptyText);
        }

        let id = self.allocate_id(now_ms);
        self.items.push(TodoItem::committed(id, text.to_string()));
        self.error = None;
        log::info!("[TODO] Created item {}", id);
        Ok(Some(id))
    }

    /// Escape on the add row: close without validating
    pub fn cancel_new(&mut self) {
        self.adding_new = false;
    }

    // ========================
    // Edit
    // ========================

    /// Double-click on an item's text.
    ///
    /// Only one item edits at a time; opening another one while an
    /// input is still open is ignored.
    pub fn begin_edit(&mut self, id: ItemId) -> TodoResult<()> {
        if self.adding_new {
            return Ok(());
        }
        if let Some(open) = self.editing_item() {
            if open.id != id {
                log::debug!("[TODO] Ignoring edit of {}, {} is open", id, open.id);
            }
            return Ok(());
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.editing = true;
        }
        Ok(())
    }

    /// Commit an edit (blur, or Enter in modal mode).
    ///
    /// Blank text never replaces the stored text. Inline mode keeps the
    /// input open; modal mode closes it.
    pub fn commit_edit(&mut self, id: ItemId, text: &str) -> TodoResult<()> {
        let mode = self.mode;
        let Some(item) = self.items.iter_mut().find(|item| item.id == id && item.editing) else {
            return Ok(());
        };

        if is_blank(text) {
            if mode == ValidationMode::Modal {
                item.editing = false;
                if item.has_blank_text() {
                    // Never committed, nothing to revert to
                    self.items.retain(|item| item.id != id);
                }
            }
            return self.reject(TodoError::EmptyText);
        }

        item.text = text.to_string();
        item.editing = false;
        self.error = None;
        Ok(())
    }

    /// Escape inside an item's input: leave edit mode, keep the text.
    ///
    /// An item that was never committed is dropped.
    pub fn cancel_edit(&mut self, id: ItemId) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id && item.editing) else {
            return;
        };
        item.editing = false;
        if item.has_blank_text() {
            self.items.retain(|item| item.id != id);
        }
        self.clear_error_if_idle();
    }

    // ========================
    // Complete / Delete / Filter
    // ========================

    pub fn toggle_complete(&mut self, id: ItemId) -> TodoResult<()> {
        let mode = self.mode;
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return Ok(());
        };
        if mode == ValidationMode::Modal && item.has_blank_text() {
            return self.reject(TodoError::EmptyComplete);
        }
        item.complete = !item.complete;
        Ok(())
    }

    /// Remove an item; unknown ids are a no-op
    pub fn delete(&mut self, id: ItemId) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() != before {
            log::info!("[TODO] Deleted item {}", id);
            self.clear_error_if_idle();
        }
    }

    pub fn toggle_show_completed(&mut self) {
        self.show_completed = !self.show_completed;
    }

    // ========================
    // Internals
    // ========================

    /// Record the error for inline display and hand it back
    fn reject<T>(&mut self, err: TodoError) -> TodoResult<T> {
        if self.mode == ValidationMode::Inline {
            self.error = Some(err.to_string());
        }
        Err(err)
    }

    fn clear_error_if_idle(&mut self) {
        if self.editing_item().is_none() {
            self.error = None;
        }
    }
}
