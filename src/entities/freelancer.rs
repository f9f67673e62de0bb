use super::{id_column, EntityConfig};
use crate::forms::FormField;
use crate::model::EntityKind;
use crate::table::{BadgePalette, BadgeTone, Column, FilterDescriptor};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Busy,
    Unavailable,
}

pub const AVAILABILITY_VALUES: &[&str] = &["available", "busy", "unavailable"];

const AVAILABILITY_PALETTE: BadgePalette = &[
    ("available", BadgeTone::Success),
    ("busy", BadgeTone::Warning),
    ("unavailable", BadgeTone::Neutral),
];

#[derive(Debug, Clone, Serialize)]
pub struct Freelancer {
    pub id: &'static str,
    pub name: &'static str,
    pub skill: &'static str,
    pub hourly_rate: f64,
    pub rating: f64,
    pub status: Availability,
    pub joined_on: &'static str,
}

pub fn fixtures() -> Vec<Freelancer> {
    vec![
        Freelancer {
            id: "FRL001",
            name: "Elena Petrova",
            skill: "Product Photography",
            hourly_rate: 45.0,
            rating: 4.8,
            status: Availability::Available,
            joined_on: "2023-04-09",
        },
        Freelancer {
            id: "FRL002",
            name: "Kwame Mensah",
            skill: "Copywriting",
            hourly_rate: 38.0,
            rating: 4.6,
            status: Availability::Busy,
            joined_on: "2023-07-21",
        },
        Freelancer {
            id: "FRL003",
            name: "Lucia Gomez",
            skill: "Storefront Design",
            hourly_rate: 60.0,
            rating: 4.9,
            status: Availability::Available,
            joined_on: "2024-01-02",
        },
        Freelancer {
            id: "FRL004",
            name: "Tom Becker",
            skill: "Data Entry",
            hourly_rate: 22.0,
            rating: 4.1,
            status: Availability::Unavailable,
            joined_on: "2022-12-11",
        },
    ]
}

pub fn config() -> EntityConfig {
    EntityConfig {
        kind: EntityKind::Freelancer,
        columns: vec![
            id_column(),
            Column::text("name", "Name").sortable(),
            Column::text("skill", "Skill").sortable(),
            Column::currency("hourly_rate", "Rate/h").sortable(),
            Column::text("rating", "Rating").sortable().width(6),
            Column::badge("status", "Availability", AVAILABILITY_PALETTE),
            Column::date("joined_on", "Joined").sortable(),
        ],
        filters: vec![
            FilterDescriptor::categorical("status", "Availability", AVAILABILITY_VALUES),
            FilterDescriptor::date("joined_on", "Joined"),
        ],
        search_key: "name",
        form: vec![
            FormField::text("name", "Name").required(),
            FormField::text("skill", "Skill").required(),
            FormField::number("hourly_rate", "Hourly Rate").required(),
            FormField::number("rating", "Rating"),
            FormField::select("status", "Availability", AVAILABILITY_VALUES),
            FormField::date("joined_on", "Joined On"),
        ],
        title_key: "name",
    }
}
