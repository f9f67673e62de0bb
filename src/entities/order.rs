use super::{id_column, EntityConfig};
use crate::forms::FormField;
use crate::model::EntityKind;
use crate::table::{BadgePalette, BadgeTone, Column, FilterDescriptor};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Approved,
    Delivered,
    Cancelled,
}

pub const STATUS_VALUES: &[&str] = &["pending", "approved", "delivered", "cancelled"];

const STATUS_PALETTE: BadgePalette = &[
    ("pending", BadgeTone::Warning),
    ("approved", BadgeTone::Info),
    ("delivered", BadgeTone::Success),
    ("cancelled", BadgeTone::Danger),
];

/// A customer order placed with one vendor
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: &'static str,
    pub customer: &'static str,
    pub vendor: &'static str,
    pub items: u32,
    pub total: f64,
    pub status: OrderStatus,
    pub order_date: &'static str,
}

pub fn fixtures() -> Vec<Order> {
    vec![
        Order {
            id: "ORD001",
            customer: "Maya Patel",
            vendor: "SoundWave Audio",
            items: 1,
            total: 199.99,
            status: OrderStatus::Delivered,
            order_date: "2023-12-18",
        },
        Order {
            id: "ORD002",
            customer: "Jonas Weber",
            vendor: "Kiln & Co",
            items: 2,
            total: 108.0,
            status: OrderStatus::Pending,
            order_date: "2024-01-13",
        },
        Order {
            id: "ORD003",
            customer: "Sofia Rossi",
            vendor: "Trailhead Outfitters",
            items: 3,
            total: 265.5,
            status: OrderStatus::Approved,
            order_date: "2024-01-09",
        },
        Order {
            id: "ORD004",
            customer: "Daniel Kim",
            vendor: "Brightline Tech",
            items: 4,
            total: 119.96,
            status: OrderStatus::Cancelled,
            order_date: "2023-11-02",
        },
        Order {
            id: "ORD005",
            customer: "Amara Okafor",
            vendor: "SoundWave Audio",
            items: 2,
            total: 399.98,
            status: OrderStatus::Pending,
            order_date: "2024-01-15",
        },
    ]
}

pub fn config() -> EntityConfig {
    EntityConfig {
        kind: EntityKind::Order,
        columns: vec![
            id_column(),
            Column::text("customer", "Customer").sortable(),
            Column::text("vendor", "Vendor"),
            Column::text("items", "Items").sortable().width(6),
            Column::currency("total", "Total").sortable(),
            Column::badge("status", "Status", STATUS_PALETTE),
            Column::date("order_date", "Ordered").sortable(),
        ],
        filters: vec![
            FilterDescriptor::categorical("status", "Status", STATUS_VALUES),
            FilterDescriptor::date("order_date", "Order Date"),
        ],
        search_key: "customer",
        form: vec![
            FormField::text("customer", "Customer").required(),
            FormField::text("vendor", "Vendor").required(),
            FormField::number("items", "Items").required(),
            FormField::number("total", "Total").required(),
            FormField::select("status", "Status", STATUS_VALUES),
            FormField::date("order_date", "Order Date").required(),
        ],
        title_key: "customer",
    }
}
