//! Marketplace entities and their hard-coded sample data.
//!
//! Each submodule defines a flat serde struct with a closed status enum, a
//! `fixtures()` function returning the sample rows, and a `config()`
//! describing how the entity is listed, filtered, searched and edited. All
//! entities share the same generic table; only this configuration differs.

pub mod asset;
pub mod blog;
pub mod course;
pub mod enrollment;
pub mod freelancer;
pub mod inventory;
pub mod job;
pub mod manufacturer;
pub mod order;
pub mod product;
pub mod vendor;

use crate::forms::FormField;
use crate::model::{EntityKind, Record, RecordError};
use crate::table::{BadgePalette, BadgeTone, Column, FilterDescriptor, TableConfig};
use serde::Serialize;

/// Everything a page needs to present one entity
#[derive(Debug, Clone)]
pub struct EntityConfig {
    pub kind: EntityKind,
    pub columns: Vec<Column>,
    pub filters: Vec<FilterDescriptor>,
    pub search_key: &'static str,
    pub form: Vec<FormField>,
    /// Field used as the heading of the detail view
    pub title_key: &'static str,
}

impl EntityConfig {
    pub fn table_config(&self, page_size: usize) -> TableConfig {
        TableConfig::new(self.columns.clone(), self.search_key)
            .with_filters(self.filters.clone())
            .with_page_size(page_size)
    }
}

pub fn config(kind: EntityKind) -> EntityConfig {
    match kind {
        EntityKind::Asset => asset::config(),
        EntityKind::Inventory => inventory::config(),
        EntityKind::Product => product::config(),
        EntityKind::Vendor => vendor::config(),
        EntityKind::Manufacturer => manufacturer::config(),
        EntityKind::Order => order::config(),
        EntityKind::Course => course::config(),
        EntityKind::Job => job::config(),
        EntityKind::Blog => blog::config(),
        EntityKind::Enrollment => enrollment::config(),
        EntityKind::Freelancer => freelancer::config(),
    }
}

/// Fixture rows of `kind` as generic records
pub fn fixture_records(kind: EntityKind) -> Result<Vec<Record>, RecordError> {
    match kind {
        EntityKind::Asset => to_records(&asset::fixtures()),
        EntityKind::Inventory => to_records(&inventory::fixtures()),
        EntityKind::Product => to_records(&product::fixtures()),
        EntityKind::Vendor => to_records(&vendor::fixtures()),
        EntityKind::Manufacturer => to_records(&manufacturer::fixtures()),
        EntityKind::Order => to_records(&order::fixtures()),
        EntityKind::Course => to_records(&course::fixtures()),
        EntityKind::Job => to_records(&job::fixtures()),
        EntityKind::Blog => to_records(&blog::fixtures()),
        EntityKind::Enrollment => to_records(&enrollment::fixtures()),
        EntityKind::Freelancer => to_records(&freelancer::fixtures()),
    }
}

pub fn to_records<T: Serialize>(items: &[T]) -> Result<Vec<Record>, RecordError> {
    items.iter().map(Record::from_serialize).collect()
}

/// Sortable identifier column shown first in every table
pub(crate) fn id_column() -> Column {
    Column::text("id", "ID").sortable().width(10)
}

pub(crate) const ACTIVE_PALETTE: BadgePalette = &[("active", BadgeTone::Success), ("inactive", BadgeTone::Danger)];

pub(crate) const ACTIVE_VALUES: &[&str] = &["active", "inactive"];

/// Serde-friendly status shared by vendors, manufacturers and products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveStatus {
    Active,
    Inactive,
}
