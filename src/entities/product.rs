use super::{id_column, ActiveStatus, EntityConfig, ACTIVE_PALETTE, ACTIVE_VALUES};
use crate::forms::FormField;
use crate::model::EntityKind;
use crate::table::{Column, FilterDescriptor};
use serde::Serialize;

pub const CATEGORY_VALUES: &[&str] = &["Electronics", "Home", "Apparel", "Sports"];

#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub vendor: &'static str,
    pub price: f64,
    pub stock: u32,
    pub status: ActiveStatus,
    pub created_at: &'static str,
}

pub fn fixtures() -> Vec<Product> {
    vec![
        Product {
            id: "PROD001",
            name: "Noise Cancelling Headphones",
            category: "Electronics",
            vendor: "SoundWave Audio",
            price: 199.99,
            stock: 42,
            status: ActiveStatus::Active,
            created_at: "2023-10-02",
        },
        Product {
            id: "PROD002",
            name: "Ceramic Pour-Over Set",
            category: "Home",
            vendor: "Kiln & Co",
            price: 54.0,
            stock: 18,
            status: ActiveStatus::Active,
            created_at: "2023-12-11",
        },
        Product {
            id: "PROD003",
            name: "Merino Running Tee",
            category: "Apparel",
            vendor: "Trailhead Outfitters",
            price: 68.5,
            stock: 0,
            status: ActiveStatus::Inactive,
            created_at: "2023-06-19",
        },
        Product {
            id: "PROD004",
            name: "Carbon Trekking Poles",
            category: "Sports",
            vendor: "Trailhead Outfitters",
            price: 129.0,
            stock: 25,
            status: ActiveStatus::Active,
            created_at: "2024-01-08",
        },
        Product {
            id: "PROD005",
            name: "Smart Plug (2-pack)",
            category: "Electronics",
            vendor: "Brightline Tech",
            price: 29.99,
            stock: 120,
            status: ActiveStatus::Active,
            created_at: "2024-01-14",
        },
    ]
}

pub fn config() -> EntityConfig {
    EntityConfig {
        kind: EntityKind::Product,
        columns: vec![
            id_column(),
            Column::text("name", "Product").sortable(),
            Column::text("category", "Category").sortable(),
            Column::text("vendor", "Vendor"),
            Column::currency("price", "Price").sortable(),
            Column::text("stock", "Stock").sortable().width(6),
            Column::badge("status", "Status", ACTIVE_PALETTE),
            Column::date("created_at", "Created").sortable(),
        ],
        filters: vec![
            FilterDescriptor::categorical("status", "Status", ACTIVE_VALUES),
            FilterDescriptor::categorical("category", "Category", CATEGORY_VALUES),
            FilterDescriptor::date("created_at", "Created"),
        ],
        search_key: "name",
        form: vec![
            FormField::text("name", "Product").required(),
            FormField::select("category", "Category", CATEGORY_VALUES),
            FormField::text("vendor", "Vendor").required(),
            FormField::number("price", "Price").required(),
            FormField::number("stock", "Stock"),
            FormField::select("status", "Status", ACTIVE_VALUES),
            FormField::date("created_at", "Created"),
        ],
        title_key: "name",
    }
}
