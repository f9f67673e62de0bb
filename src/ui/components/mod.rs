//! Reusable UI components

pub mod badge;
pub mod scrollbar_helper;
pub mod status_bar;

// Component architecture
pub mod dashboard_component;
pub mod data_table_component;
pub mod detail_component;
pub mod dialog_component;
pub mod dialogs;
pub mod form_component;
pub mod sidebar_component;

// Component exports
pub use dashboard_component::DashboardComponent;
pub use data_table_component::DataTableComponent;
pub use detail_component::DetailComponent;
pub use dialog_component::DialogComponent;
pub use form_component::FormComponent;
pub use sidebar_component::SidebarComponent;
pub use status_bar::{StatusBar, StatusInfo};
