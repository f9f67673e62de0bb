//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Success Messages
pub const SUCCESS_RECORD_CREATED: &str = "✅ Record created";
pub const SUCCESS_RECORD_UPDATED: &str = "✅ Record updated";
pub const SUCCESS_RECORD_DELETED: &str = "✅ Record deleted";
pub const SUCCESS_SELECTION_DELETED: &str = "✅ Deleted selected records";

// Error Messages
pub const ERROR_RECORD_NOT_FOUND: &str = "❌ Record not found";
pub const ERROR_SAVE_FAILED: &str = "❌ Failed to save record";
pub const ERROR_DELETE_FAILED: &str = "❌ Nothing was deleted";
pub const ERROR_INVALID_FORM: &str = "❌ Please fix the form";

// Info Messages
pub const INFO_SAVING: &str = "⏳ Saving…";
pub const INFO_NO_SELECTION: &str = "Nothing selected";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Debug Logs - Press 'Esc', 'G' or 'q' to close";
pub const NOT_FOUND_TITLE: &str = "Not Found";
pub const EMPTY_TABLE: &str = "No matching records";
pub const APP_TITLE: &str = "MarketDesk";

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 24;
/// Minimum main area width to preserve usability
pub const MAIN_AREA_MIN_WIDTH: u16 = 20;
/// Upper bound for `[ui] page_size`
pub const MAX_PAGE_SIZE: usize = 100;
/// Upper bound for `[forms] save_delay_ms`
pub const SAVE_DELAY_MAX_MS: u64 = 10_000;
/// Log entries kept in memory for the logs dialog
pub const MAX_IN_MEMORY_LOGS: usize = 1_000;
