use super::{id_column, EntityConfig};
use crate::forms::FormField;
use crate::model::{EntityKind, Record};
use crate::table::{BadgePalette, BadgeTone, CellFormat, CellKind, Column, FilterDescriptor};
use crate::utils::format::format_currency;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

pub const STATUS_VALUES: &[&str] = &["in_stock", "low_stock", "out_of_stock"];

const STATUS_PALETTE: BadgePalette = &[
    ("in_stock", BadgeTone::Success),
    ("low_stock", BadgeTone::Warning),
    ("out_of_stock", BadgeTone::Danger),
];

#[derive(Debug, Clone, Serialize)]
pub struct InventoryItem {
    pub id: &'static str,
    pub name: &'static str,
    pub sku: &'static str,
    pub warehouse: &'static str,
    pub quantity: u32,
    pub price: f64,
    pub status: StockStatus,
    pub last_restocked: &'static str,
}

pub fn fixtures() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: "INV001",
            name: "Wireless Mouse",
            sku: "WM-1001",
            warehouse: "East Hub",
            quantity: 150,
            price: 24.99,
            status: StockStatus::InStock,
            last_restocked: "2024-01-05",
        },
        InventoryItem {
            id: "INV002",
            name: "Mechanical Keyboard",
            sku: "MK-2040",
            warehouse: "East Hub",
            quantity: 12,
            price: 89.5,
            status: StockStatus::LowStock,
            last_restocked: "2023-11-20",
        },
        InventoryItem {
            id: "INV003",
            name: "USB-C Charger",
            sku: "UC-3300",
            warehouse: "West Hub",
            quantity: 0,
            price: 19.95,
            status: StockStatus::OutOfStock,
            last_restocked: "2023-09-14",
        },
        InventoryItem {
            id: "INV004",
            name: "27\" Monitor",
            sku: "MN-2700",
            warehouse: "West Hub",
            quantity: 35,
            price: 229.0,
            status: StockStatus::InStock,
            last_restocked: "2024-01-12",
        },
        InventoryItem {
            id: "INV005",
            name: "Laptop Stand",
            sku: "LS-0450",
            warehouse: "Central",
            quantity: 8,
            price: 39.99,
            status: StockStatus::LowStock,
            last_restocked: "2023-12-28",
        },
    ]
}

/// Stock value of one row (`price * quantity`)
fn line_value(record: &Record, format: &CellFormat) -> String {
    let value = record.number("price").unwrap_or(0.0) * record.number("quantity").unwrap_or(0.0);
    format_currency(value, &format.currency_symbol)
}

pub fn config() -> EntityConfig {
    EntityConfig {
        kind: EntityKind::Inventory,
        columns: vec![
            id_column(),
            Column::text("name", "Item").sortable(),
            Column::text("sku", "SKU").width(9),
            Column::text("warehouse", "Warehouse"),
            Column::text("quantity", "Qty").sortable().width(6),
            Column::currency("price", "Price").sortable(),
            Column::new("value", "Stock Value", CellKind::Custom(line_value)),
            Column::badge("status", "Status", STATUS_PALETTE),
            Column::date("last_restocked", "Restocked").sortable(),
        ],
        filters: vec![
            FilterDescriptor::categorical("status", "Stock", STATUS_VALUES),
            FilterDescriptor::categorical("warehouse", "Warehouse", &["East Hub", "West Hub", "Central"]),
            FilterDescriptor::date("last_restocked", "Restocked"),
        ],
        search_key: "name",
        form: vec![
            FormField::text("name", "Item").required(),
            FormField::text("sku", "SKU").required(),
            FormField::text("warehouse", "Warehouse"),
            FormField::number("quantity", "Quantity").required(),
            FormField::number("price", "Price").required(),
            FormField::select("status", "Status", STATUS_VALUES),
            FormField::date("last_restocked", "Last Restocked"),
        ],
        title_key: "name",
    }
}
