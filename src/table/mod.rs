//! Generic tabular data view.
//!
//! A page supplies rows, column descriptors, optional filter descriptors and
//! a search key; [`TableView`] composes them into one searchable, filterable,
//! sortable, selectable and paginated table. Rendering is left to
//! [`crate::ui::components::DataTableComponent`].

pub mod column;
pub mod filter;
pub mod sort;
pub mod view;

pub use column::{BadgePalette, BadgeTone, CellFormat, CellKind, CellText, Column};
pub use filter::{ActiveFilters, FilterDescriptor, FilterKind, FilterOption};
pub use sort::{SortDirection, SortState};
pub use view::{PageInfo, TableConfig, TableView, DEFAULT_PAGE_SIZE};

use crate::model::EntityKind;
use crate::routes::Route;

/// Per-row menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    pub const ALL: [RowAction; 3] = [Self::View, Self::Edit, Self::Delete];

    pub fn label(&self) -> &'static str {
        match self {
            Self::View => "View",
            Self::Edit => "Edit",
            Self::Delete => "Delete",
        }
    }

    /// Static link for navigation actions; `Delete` is handled by the store
    /// behind a confirmation instead.
    pub fn route(&self, kind: EntityKind, id: &str) -> Option<Route> {
        match self {
            Self::View => Some(Route::Detail(kind, id.to_string())),
            Self::Edit => Some(Route::Update(kind, id.to_string())),
            Self::Delete => None,
        }
    }
}

/// Menu entries for one row with their navigation targets
pub fn row_actions(kind: EntityKind, id: &str) -> Vec<(RowAction, Option<Route>)> {
    RowAction::ALL.iter().map(|action| (*action, action.route(kind, id))).collect()
}
