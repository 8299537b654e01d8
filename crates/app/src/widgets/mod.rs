//! Reusable widgets for the panel.

pub mod drag_drop;
pub mod prompt_input;

pub use drag_drop::DragDropTracker;
pub use prompt_input::PromptInput;
