//! Dialog components module

pub mod common;
pub mod filter_dialog;
pub mod scroll_behavior;
pub mod system_dialogs;

pub use filter_dialog::FilterPicker;
pub use scroll_behavior::ScrollBehavior;
