//! Core UI functionality for the MarketDesk console.
//!
//! This module contains the fundamental building blocks for the user interface,
//! including event handling, state management, component abstractions, and task
//! management. It provides the foundation that all UI components build upon.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`context`] - Injected store, configuration and logger
//! - [`event_handler`] - Event processing and keyboard/mouse input handling
//! - [`task_manager`] - Background task management (simulated saves)
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** define state transitions and user interactions
//! 3. **Context** owns the application state the components present
//! 4. **Events** are processed through the [`EventHandler`] system
//! 5. **Tasks** run on tokio via the [`TaskManager`] and report back as actions

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType, Pane};
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
