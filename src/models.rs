//! Frontend Models
//!
//! Data structures held by the todo store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Item identifier, derived from the creation instant (ms since epoch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: ItemId,
    pub text: String,
    /// Text input is open for this item
    pub editing: bool,
    pub complete: bool,
}

impl TodoItem {
    /// Empty shell opened for input (inline add)
    pub fn shell(id: ItemId) -> Self {
        Self {
            id,
            text: String::new(),
            editing: true,
            complete: false,
        }
    }

    /// Committed item created from the add row
    pub fn committed(id: ItemId, text: String) -> Self {
        Self {
            id,
            text,
            editing: false,
            complete: false,
        }
    }

    pub fn has_blank_text(&self) -> bool {
        is_blank(&self.text)
    }
}

/// Empty or whitespace-only text
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
