//! Utility modules for the marketdesk application.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Date parsing, formatting and relative date buckets
//! - [`format`] - Currency, number grouping and text truncation

pub mod datetime;
pub mod format;
