use super::{id_column, EntityConfig};
use crate::forms::FormField;
use crate::model::EntityKind;
use crate::table::{BadgePalette, BadgeTone, Column, FilterDescriptor};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Draft,
    Published,
    Archived,
}

pub const STATUS_VALUES: &[&str] = &["draft", "published", "archived"];

pub const LEVEL_VALUES: &[&str] = &["Beginner", "Intermediate", "Advanced"];

const STATUS_PALETTE: BadgePalette = &[
    ("draft", BadgeTone::Neutral),
    ("published", BadgeTone::Success),
    ("archived", BadgeTone::Warning),
];

/// Seller-education course
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    pub id: &'static str,
    pub title: &'static str,
    pub instructor: &'static str,
    pub level: &'static str,
    pub price: f64,
    pub seats: u32,
    pub status: CourseStatus,
    pub starts_on: &'static str,
}

pub fn fixtures() -> Vec<Course> {
    vec![
        Course {
            id: "COURSE001",
            title: "Selling on Multi-Vendor Platforms",
            instructor: "Grace Liu",
            level: "Beginner",
            price: 0.0,
            seats: 200,
            status: CourseStatus::Published,
            starts_on: "2024-02-01",
        },
        Course {
            id: "COURSE002",
            title: "Product Photography Essentials",
            instructor: "Marco Bianchi",
            level: "Intermediate",
            price: 49.0,
            seats: 40,
            status: CourseStatus::Published,
            starts_on: "2024-01-22",
        },
        Course {
            id: "COURSE003",
            title: "Advanced Logistics Planning",
            instructor: "Hana Sato",
            level: "Advanced",
            price: 129.0,
            seats: 25,
            status: CourseStatus::Draft,
            starts_on: "2024-03-04",
        },
        Course {
            id: "COURSE004",
            title: "Customer Service at Scale",
            instructor: "Grace Liu",
            level: "Intermediate",
            price: 79.0,
            seats: 60,
            status: CourseStatus::Archived,
            starts_on: "2023-05-15",
        },
    ]
}

pub fn config() -> EntityConfig {
    EntityConfig {
        kind: EntityKind::Course,
        columns: vec![
            id_column().width(11),
            Column::text("title", "Title").sortable(),
            Column::text("instructor", "Instructor").sortable(),
            Column::text("level", "Level"),
            Column::currency("price", "Price").sortable(),
            Column::text("seats", "Seats").sortable().width(6),
            Column::badge("status", "Status", STATUS_PALETTE),
            Column::date("starts_on", "Starts").sortable(),
        ],
        filters: vec![
            FilterDescriptor::categorical("status", "Status", STATUS_VALUES),
            FilterDescriptor::categorical("level", "Level", LEVEL_VALUES),
        ],
        search_key: "title",
        form: vec![
            FormField::text("title", "Title").required(),
            FormField::text("instructor", "Instructor").required(),
            FormField::select("level", "Level", LEVEL_VALUES),
            FormField::number("price", "Price"),
            FormField::number("seats", "Seats"),
            FormField::select("status", "Status", STATUS_VALUES),
            FormField::date("starts_on", "Starts On"),
        ],
        title_key: "title",
    }
}
