//! Validation errors raised by the todo handlers.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Create or edit commit with empty/whitespace text
    #[error("Todo text cannot be empty.")]
    EmptyText,
    /// Completing an item that has no text
    #[error("Cannot complete an item with empty text.")]
    EmptyComplete,
    /// Add requested while an item is still being edited or the add row is open
    #[error("Please complete the current empty item before adding a new one.")]
    AddBlocked,
}

pub type TodoResult<T> = Result<T, TodoError>;
