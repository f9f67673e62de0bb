use super::{id_column, EntityConfig};
use crate::forms::FormField;
use crate::model::EntityKind;
use crate::table::{BadgePalette, BadgeTone, Column, FilterDescriptor};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Open,
    Closed,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
}

pub const STATUS_VALUES: &[&str] = &["open", "closed", "paused"];

pub const TYPE_VALUES: &[&str] = &["full-time", "part-time", "contract"];

const STATUS_PALETTE: BadgePalette = &[
    ("open", BadgeTone::Success),
    ("paused", BadgeTone::Warning),
    ("closed", BadgeTone::Neutral),
];

#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub id: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub job_type: JobType,
    pub salary: f64,
    pub status: JobStatus,
    pub posted_on: &'static str,
}

pub fn fixtures() -> Vec<Job> {
    vec![
        Job {
            id: "JOB001",
            title: "Marketplace Operations Lead",
            company: "MarketDesk",
            location: "Remote",
            job_type: JobType::FullTime,
            salary: 95000.0,
            status: JobStatus::Open,
            posted_on: "2024-01-11",
        },
        Job {
            id: "JOB002",
            title: "Vendor Support Specialist",
            company: "Trailhead Outfitters",
            location: "Toronto",
            job_type: JobType::PartTime,
            salary: 38000.0,
            status: JobStatus::Open,
            posted_on: "2023-12-20",
        },
        Job {
            id: "JOB003",
            title: "Catalog Data Contractor",
            company: "Brightline Tech",
            location: "Berlin",
            job_type: JobType::Contract,
            salary: 52000.0,
            status: JobStatus::Paused,
            posted_on: "2023-10-05",
        },
        Job {
            id: "JOB004",
            title: "Warehouse Coordinator",
            company: "SoundWave Audio",
            location: "Austin",
            job_type: JobType::FullTime,
            salary: 61000.0,
            status: JobStatus::Closed,
            posted_on: "2023-07-14",
        },
    ]
}

pub fn config() -> EntityConfig {
    EntityConfig {
        kind: EntityKind::Job,
        columns: vec![
            id_column(),
            Column::text("title", "Title").sortable(),
            Column::text("company", "Company").sortable(),
            Column::text("location", "Location"),
            Column::text("job_type", "Type"),
            Column::currency("salary", "Salary").sortable(),
            Column::badge("status", "Status", STATUS_PALETTE),
            Column::date("posted_on", "Posted").sortable(),
        ],
        filters: vec![
            FilterDescriptor::categorical("status", "Status", STATUS_VALUES),
            FilterDescriptor::categorical("job_type", "Type", TYPE_VALUES),
            FilterDescriptor::date("posted_on", "Posted"),
        ],
        search_key: "title",
        form: vec![
            FormField::text("title", "Title").required(),
            FormField::text("company", "Company").required(),
            FormField::text("location", "Location"),
            FormField::select("job_type", "Type", TYPE_VALUES),
            FormField::number("salary", "Salary"),
            FormField::select("status", "Status", STATUS_VALUES),
            FormField::date("posted_on", "Posted On"),
        ],
        title_key: "title",
    }
}
