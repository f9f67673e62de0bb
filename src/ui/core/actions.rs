use crate::model::{EntityKind, Record};
use crate::routes::Route;
use crate::table::{ActiveFilters, FilterDescriptor};

/// Which half of the body receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    Sidebar,
    #[default]
    Main,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    Navigate(Route),
    Back,
    TogglePane,

    // Table state
    ToggleFilter {
        key: String,
        value: String,
    },
    ClearFilters,

    // Record operations
    SubmitForm,
    SaveCompleted {
        kind: EntityKind,
        record: Record,
        is_new: bool,
    },
    DeleteRecords {
        kind: EntityKind,
        ids: Vec<String>,
    },

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    DeleteConfirmation {
        kind: EntityKind,
        ids: Vec<String>,
    },
    Filters {
        descriptors: Vec<FilterDescriptor>,
        active: ActiveFilters,
    },
    Error(String),
    Info(String),
    Help,
    Logs,
}
