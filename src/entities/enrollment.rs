use super::{id_column, EntityConfig};
use crate::forms::FormField;
use crate::model::EntityKind;
use crate::table::{BadgePalette, BadgeTone, Column, FilterDescriptor};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Enrolled,
    Completed,
    Dropped,
}

pub const STATUS_VALUES: &[&str] = &["enrolled", "completed", "dropped"];

const STATUS_PALETTE: BadgePalette = &[
    ("enrolled", BadgeTone::Info),
    ("completed", BadgeTone::Success),
    ("dropped", BadgeTone::Danger),
];

/// A student's seat in a course
#[derive(Debug, Clone, Serialize)]
pub struct Enrollment {
    pub id: &'static str,
    pub student: &'static str,
    pub course: &'static str,
    pub progress: u32,
    pub status: EnrollmentStatus,
    pub enrolled_on: &'static str,
}

pub fn fixtures() -> Vec<Enrollment> {
    vec![
        Enrollment {
            id: "ENR001",
            student: "Maya Patel",
            course: "COURSE001",
            progress: 100,
            status: EnrollmentStatus::Completed,
            enrolled_on: "2023-10-20",
        },
        Enrollment {
            id: "ENR002",
            student: "Jonas Weber",
            course: "COURSE002",
            progress: 45,
            status: EnrollmentStatus::Enrolled,
            enrolled_on: "2024-01-03",
        },
        Enrollment {
            id: "ENR003",
            student: "Sofia Rossi",
            course: "COURSE001",
            progress: 10,
            status: EnrollmentStatus::Dropped,
            enrolled_on: "2023-08-14",
        },
        Enrollment {
            id: "ENR004",
            student: "Amara Okafor",
            course: "COURSE002",
            progress: 5,
            status: EnrollmentStatus::Enrolled,
            enrolled_on: "2024-01-15",
        },
    ]
}

pub fn config() -> EntityConfig {
    EntityConfig {
        kind: EntityKind::Enrollment,
        columns: vec![
            id_column(),
            Column::text("student", "Student").sortable(),
            Column::text("course", "Course").sortable(),
            Column::text("progress", "Progress %").sortable().width(10),
            Column::badge("status", "Status", STATUS_PALETTE),
            Column::date("enrolled_on", "Enrolled").sortable(),
        ],
        filters: vec![
            FilterDescriptor::categorical("status", "Status", STATUS_VALUES),
            FilterDescriptor::date("enrolled_on", "Enrolled"),
        ],
        search_key: "student",
        form: vec![
            FormField::text("student", "Student").required(),
            FormField::text("course", "Course").required(),
            FormField::number("progress", "Progress %"),
            FormField::select("status", "Status", STATUS_VALUES),
            FormField::date("enrolled_on", "Enrolled On"),
        ],
        title_key: "student",
    }
}
