use super::{id_column, EntityConfig};
use crate::forms::FormField;
use crate::model::EntityKind;
use crate::table::{BadgePalette, BadgeTone, CellKind, Column, FilterDescriptor};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    Draft,
    Published,
}

pub const STATUS_VALUES: &[&str] = &["draft", "published"];

const STATUS_PALETTE: BadgePalette = &[("draft", BadgeTone::Neutral), ("published", BadgeTone::Success)];

#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub category: &'static str,
    pub views: u32,
    pub status: BlogStatus,
    pub published_on: &'static str,
}

pub fn fixtures() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "BLOG001",
            title: "Getting Started with Multi-Vendor Marketplaces",
            author: "Grace Liu",
            category: "Guides",
            views: 4210,
            status: BlogStatus::Published,
            published_on: "2023-09-12",
        },
        BlogPost {
            id: "BLOG002",
            title: "Vendor Onboarding Best Practices",
            author: "Marco Bianchi",
            category: "Vendors",
            views: 1875,
            status: BlogStatus::Published,
            published_on: "2023-11-03",
        },
        BlogPost {
            id: "BLOG003",
            title: "Inventory Management for Growing Stores",
            author: "Hana Sato",
            category: "Operations",
            views: 2390,
            status: BlogStatus::Published,
            published_on: "2023-12-07",
        },
        BlogPost {
            id: "BLOG004",
            title: "Mobile Commerce Trends 2024",
            author: "Grace Liu",
            category: "Trends",
            views: 980,
            status: BlogStatus::Published,
            published_on: "2024-01-10",
        },
        BlogPost {
            id: "BLOG005",
            title: "Pricing Strategies That Convert",
            author: "Daniel Kim",
            category: "Guides",
            views: 0,
            status: BlogStatus::Draft,
            published_on: "2024-01-15",
        },
    ]
}

pub fn config() -> EntityConfig {
    EntityConfig {
        kind: EntityKind::Blog,
        columns: vec![
            id_column(),
            Column::new("title", "Title", CellKind::Truncate(40)).sortable(),
            Column::text("author", "Author").sortable(),
            Column::text("category", "Category"),
            Column::text("views", "Views").sortable().width(7),
            Column::badge("status", "Status", STATUS_PALETTE),
            Column::date("published_on", "Published").sortable(),
        ],
        filters: vec![
            FilterDescriptor::categorical("status", "Status", STATUS_VALUES),
            FilterDescriptor::categorical("category", "Category", &["Guides", "Vendors", "Operations", "Trends"]),
            FilterDescriptor::date("published_on", "Published"),
        ],
        search_key: "title",
        form: vec![
            FormField::text("title", "Title").required(),
            FormField::text("author", "Author").required(),
            FormField::text("category", "Category"),
            FormField::select("status", "Status", STATUS_VALUES),
            FormField::date("published_on", "Published On"),
        ],
        title_key: "title",
    }
}
