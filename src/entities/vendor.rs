use super::{id_column, ActiveStatus, EntityConfig, ACTIVE_PALETTE, ACTIVE_VALUES};
use crate::forms::FormField;
use crate::model::EntityKind;
use crate::table::{CellKind, Column, FilterDescriptor};
use serde::Serialize;

/// A seller on the marketplace
#[derive(Debug, Clone, Serialize)]
pub struct Vendor {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub country: &'static str,
    pub products: u32,
    pub rating: f64,
    pub status: ActiveStatus,
    pub joined_on: &'static str,
}

pub fn fixtures() -> Vec<Vendor> {
    vec![
        Vendor {
            id: "VEND001",
            name: "SoundWave Audio",
            email: "sales@soundwave.example",
            country: "USA",
            products: 14,
            rating: 4.7,
            status: ActiveStatus::Active,
            joined_on: "2022-04-18",
        },
        Vendor {
            id: "VEND002",
            name: "Kiln & Co",
            email: "hello@kiln.example",
            country: "Portugal",
            products: 6,
            rating: 4.9,
            status: ActiveStatus::Active,
            joined_on: "2023-02-03",
        },
        Vendor {
            id: "VEND003",
            name: "Trailhead Outfitters",
            email: "team@trailhead.example",
            country: "Canada",
            products: 22,
            rating: 4.4,
            status: ActiveStatus::Active,
            joined_on: "2021-09-27",
        },
        Vendor {
            id: "VEND004",
            name: "Brightline Tech",
            email: "ops@brightline.example",
            country: "Germany",
            products: 9,
            rating: 3.8,
            status: ActiveStatus::Inactive,
            joined_on: "2023-11-30",
        },
    ]
}

pub fn config() -> EntityConfig {
    EntityConfig {
        kind: EntityKind::Vendor,
        columns: vec![
            id_column(),
            Column::text("name", "Vendor").sortable(),
            Column::new("email", "Email", CellKind::Truncate(24)),
            Column::text("country", "Country").sortable(),
            Column::text("products", "Products").sortable().width(8),
            Column::text("rating", "Rating").sortable().width(6),
            Column::badge("status", "Status", ACTIVE_PALETTE),
            Column::date("joined_on", "Joined").sortable(),
        ],
        filters: vec![
            FilterDescriptor::categorical("status", "Status", ACTIVE_VALUES),
            FilterDescriptor::date("joined_on", "Joined"),
        ],
        search_key: "name",
        form: vec![
            FormField::text("name", "Vendor").required(),
            FormField::text("email", "Email").required(),
            FormField::text("country", "Country"),
            FormField::number("products", "Products"),
            FormField::number("rating", "Rating"),
            FormField::select("status", "Status", ACTIVE_VALUES),
            FormField::date("joined_on", "Joined On"),
        ],
        title_key: "name",
    }
}
