//! MarketDesk - a terminal admin console for a multi-vendor marketplace
//!
//! Every marketplace entity (products, vendors, orders, courses and the
//! rest) is browsed through one generic tabular view with search, filters,
//! sorting, pagination and selection. Records live in an in-memory store
//! seeded from fixtures; creates, updates and deletes replace the affected
//! collection wholesale.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - Per-entity columns, filters, forms and fixtures
//! * [`store`] - In-memory collections keyed by entity
//! * [`table`] - The generic table view and its operations
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date and formatting helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Entity definitions: typed fixtures plus their table and form setup
pub mod entities;

/// Form state and input validation for create/update screens
pub mod forms;

/// Dashboard key figures
pub mod kpi;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Generic record model shared by every entity
pub mod model;

/// Route parsing and navigation targets
pub mod routes;

/// In-memory record store
pub mod store;

/// Search, filter, sort, paginate and select over rows
pub mod table;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;
