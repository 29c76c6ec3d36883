//! UI Components
//!
//! Leptos components for the todo widget.

mod edit_input;
mod todo_row;
mod new_todo_row;
mod completed_section;
mod todo_list;

pub use edit_input::EditInput;
pub use todo_row::{CompleteCheckbox, TodoRow};
pub use new_todo_row::NewTodoRow;
pub use completed_section::CompletedSection;
pub use todo_list::TodoList;
