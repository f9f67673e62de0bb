use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The marketplace entities managed by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Asset,
    Inventory,
    Product,
    Vendor,
    Manufacturer,
    Order,
    Course,
    Job,
    Blog,
    Enrollment,
    Freelancer,
}

impl EntityKind {
    /// Sidebar order
    pub const ALL: [EntityKind; 11] = [
        Self::Asset,
        Self::Inventory,
        Self::Product,
        Self::Vendor,
        Self::Manufacturer,
        Self::Order,
        Self::Course,
        Self::Job,
        Self::Blog,
        Self::Enrollment,
        Self::Freelancer,
    ];

    /// First path segment of this entity's routes
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Asset => "assets",
            Self::Inventory => "inventory",
            Self::Product => "products",
            Self::Vendor => "vendors",
            Self::Manufacturer => "manufacturers",
            Self::Order => "orders",
            Self::Course => "courses",
            Self::Job => "jobs",
            Self::Blog => "blogs",
            Self::Enrollment => "enrollments",
            Self::Freelancer => "freelancers",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Asset => "Assets",
            Self::Inventory => "Inventory",
            Self::Product => "Products",
            Self::Vendor => "Vendors",
            Self::Manufacturer => "Manufacturers",
            Self::Order => "Orders",
            Self::Course => "Courses",
            Self::Job => "Jobs",
            Self::Blog => "Blogs",
            Self::Enrollment => "Enrollments",
            Self::Freelancer => "Freelancers",
        }
    }

    /// Singular noun used in dialogs ("Delete this vendor?")
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Inventory => "inventory item",
            Self::Product => "product",
            Self::Vendor => "vendor",
            Self::Manufacturer => "manufacturer",
            Self::Order => "order",
            Self::Course => "course",
            Self::Job => "job",
            Self::Blog => "blog post",
            Self::Enrollment => "enrollment",
            Self::Freelancer => "freelancer",
        }
    }

    /// Prefix of generated identifiers, e.g. `PROD` in `PROD007`
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::Asset => "ASSET",
            Self::Inventory => "INV",
            Self::Product => "PROD",
            Self::Vendor => "VEND",
            Self::Manufacturer => "MFR",
            Self::Order => "ORD",
            Self::Course => "COURSE",
            Self::Job => "JOB",
            Self::Blog => "BLOG",
            Self::Enrollment => "ENR",
            Self::Freelancer => "FRL",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| format!("unknown entity '{}'", s))
    }
}
