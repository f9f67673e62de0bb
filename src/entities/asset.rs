use super::{id_column, EntityConfig};
use crate::forms::FormField;
use crate::model::EntityKind;
use crate::table::{BadgePalette, BadgeTone, CellKind, Column, FilterDescriptor};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Active,
    Maintenance,
    Retired,
}

pub const STATUS_VALUES: &[&str] = &["active", "maintenance", "retired"];

const STATUS_PALETTE: BadgePalette = &[
    ("active", BadgeTone::Success),
    ("maintenance", BadgeTone::Warning),
    ("retired", BadgeTone::Neutral),
];

/// Equipment held by the marketplace operator
#[derive(Debug, Clone, Serialize)]
pub struct Asset {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub location: &'static str,
    pub quantity: u32,
    pub price: f64,
    pub status: AssetStatus,
    pub acquired_on: &'static str,
}

pub fn fixtures() -> Vec<Asset> {
    vec![
        Asset {
            id: "ASSET001",
            name: "Warehouse Forklift",
            category: "Equipment",
            location: "Main Warehouse",
            quantity: 20,
            price: 1500.0,
            status: AssetStatus::Active,
            acquired_on: "2023-03-15",
        },
        Asset {
            id: "ASSET002",
            name: "Barcode Scanner",
            category: "Electronics",
            location: "Fulfillment Center",
            quantity: 10,
            price: 250.0,
            status: AssetStatus::Maintenance,
            acquired_on: "2023-08-02",
        },
        Asset {
            id: "ASSET003",
            name: "Delivery Van",
            category: "Vehicles",
            location: "North Depot",
            quantity: 5,
            price: 32000.0,
            status: AssetStatus::Active,
            acquired_on: "2024-01-10",
        },
    ]
}

pub fn config() -> EntityConfig {
    EntityConfig {
        kind: EntityKind::Asset,
        columns: vec![
            id_column(),
            Column::text("name", "Name").sortable(),
            Column::text("category", "Category"),
            Column::text("location", "Location"),
            Column::text("quantity", "Qty").sortable().width(6),
            Column::currency("price", "Unit Price").sortable(),
            Column::badge("status", "Status", STATUS_PALETTE),
            Column::new("acquired_on", "Acquired", CellKind::Date).sortable(),
        ],
        filters: vec![
            FilterDescriptor::categorical("status", "Status", STATUS_VALUES),
            FilterDescriptor::categorical("category", "Category", &["Equipment", "Electronics", "Vehicles"]),
            FilterDescriptor::date("acquired_on", "Acquired"),
        ],
        search_key: "name",
        form: vec![
            FormField::text("name", "Name").required(),
            FormField::text("category", "Category").required(),
            FormField::text("location", "Location"),
            FormField::number("quantity", "Quantity").required(),
            FormField::number("price", "Unit Price").required(),
            FormField::select("status", "Status", STATUS_VALUES),
            FormField::date("acquired_on", "Acquired On"),
        ],
        title_key: "name",
    }
}
