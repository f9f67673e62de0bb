use super::{id_column, ActiveStatus, EntityConfig, ACTIVE_PALETTE, ACTIVE_VALUES};
use crate::forms::FormField;
use crate::model::EntityKind;
use crate::table::{Column, FilterDescriptor};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Manufacturer {
    pub id: &'static str,
    pub name: &'static str,
    pub industry: &'static str,
    pub country: &'static str,
    pub contact: &'static str,
    pub status: ActiveStatus,
    pub since: &'static str,
}

pub fn fixtures() -> Vec<Manufacturer> {
    vec![
        Manufacturer {
            id: "MFR001",
            name: "Shenzhen Circuitworks",
            industry: "Electronics",
            country: "China",
            contact: "Li Wei",
            status: ActiveStatus::Active,
            since: "2020-05-12",
        },
        Manufacturer {
            id: "MFR002",
            name: "Nordic Textiles",
            industry: "Apparel",
            country: "Sweden",
            contact: "Astrid Berg",
            status: ActiveStatus::Active,
            since: "2019-08-01",
        },
        Manufacturer {
            id: "MFR003",
            name: "Porto Ceramics",
            industry: "Home",
            country: "Portugal",
            contact: "Rui Costa",
            status: ActiveStatus::Inactive,
            since: "2022-03-22",
        },
    ]
}

pub fn config() -> EntityConfig {
    EntityConfig {
        kind: EntityKind::Manufacturer,
        columns: vec![
            id_column(),
            Column::text("name", "Manufacturer").sortable(),
            Column::text("industry", "Industry").sortable(),
            Column::text("country", "Country").sortable(),
            Column::text("contact", "Contact"),
            Column::badge("status", "Status", ACTIVE_PALETTE),
            Column::date("since", "Partner Since").sortable(),
        ],
        filters: vec![
            FilterDescriptor::categorical("status", "Status", ACTIVE_VALUES),
            FilterDescriptor::categorical("industry", "Industry", &["Electronics", "Apparel", "Home"]),
        ],
        search_key: "name",
        form: vec![
            FormField::text("name", "Manufacturer").required(),
            FormField::text("industry", "Industry").required(),
            FormField::text("country", "Country"),
            FormField::text("contact", "Contact"),
            FormField::select("status", "Status", ACTIVE_VALUES),
            FormField::date("since", "Partner Since"),
        ],
        title_key: "name",
    }
}
