//! Navigation surface of the console.
//!
//! Every entity exposes four routes: list (`/<entity>`), detail
//! (`/<entity>/<id>`), create (`/<entity>/new`) and update
//! (`/<entity>/update/<id>`). `/` is the KPI dashboard.

use crate::model::EntityKind;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown route '{0}'")]
    Unknown(String),
    #[error("unknown entity '{0}'")]
    UnknownEntity(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    List(EntityKind),
    Detail(EntityKind, String),
    Create(EntityKind),
    Update(EntityKind, String),
}

impl Route {
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let segments: Vec<&str> = path.trim().trim_matches('/').split('/').filter(|s| !s.is_empty()).collect();

        let Some((first, rest)) = segments.split_first() else {
            return Ok(Self::Dashboard);
        };

        let kind = EntityKind::from_slug(first).ok_or_else(|| RouteError::UnknownEntity(first.to_string()))?;

        match rest {
            [] => Ok(Self::List(kind)),
            ["new"] => Ok(Self::Create(kind)),
            ["update", id] => Ok(Self::Update(kind, id.to_string())),
            [id] => Ok(Self::Detail(kind, id.to_string())),
            _ => Err(RouteError::Unknown(path.to_string())),
        }
    }

    /// Entity this route belongs to, `None` for the dashboard
    pub fn entity(&self) -> Option<EntityKind> {
        match self {
            Self::Dashboard => None,
            Self::List(kind) | Self::Create(kind) => Some(*kind),
            Self::Detail(kind, _) | Self::Update(kind, _) => Some(*kind),
        }
    }

    /// Where "back" leads from this route
    pub fn parent(&self) -> Route {
        match self.entity() {
            Some(kind) if !matches!(self, Self::List(_)) => Self::List(kind),
            _ => Self::Dashboard,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dashboard => write!(f, "/"),
            Self::List(kind) => write!(f, "/{}", kind.slug()),
            Self::Detail(kind, id) => write!(f, "/{}/{}", kind.slug(), id),
            Self::Create(kind) => write!(f, "/{}/new", kind.slug()),
            Self::Update(kind, id) => write!(f, "/{}/update/{}", kind.slug(), id),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_route_shape() {
        assert_eq!(Route::parse("/").unwrap(), Route::Dashboard);
        assert_eq!(Route::parse("/vendors").unwrap(), Route::List(EntityKind::Vendor));
        assert_eq!(Route::parse("/vendors/new").unwrap(), Route::Create(EntityKind::Vendor));
        assert_eq!(
            Route::parse("/vendors/VEND002").unwrap(),
            Route::Detail(EntityKind::Vendor, "VEND002".to_string())
        );
        assert_eq!(
            Route::parse("/vendors/update/VEND002/").unwrap(),
            Route::Update(EntityKind::Vendor, "VEND002".to_string())
        );
    }

    #[test]
    fn display_is_canonical_path() {
        for path in ["/", "/blogs", "/blogs/new", "/blogs/BLOG004", "/blogs/update/BLOG004"] {
            assert_eq!(Route::parse(path).unwrap().to_string(), path);
        }
    }

    #[test]
    fn rejects_unknown_paths() {
        assert_eq!(Route::parse("/widgets"), Err(RouteError::UnknownEntity("widgets".to_string())));
        assert!(matches!(Route::parse("/blogs/a/b/c"), Err(RouteError::Unknown(_))));
    }

    #[test]
    fn parent_of_detail_is_list() {
        let detail = Route::Detail(EntityKind::Order, "ORD001".to_string());
        assert_eq!(detail.parent(), Route::List(EntityKind::Order));
        assert_eq!(Route::List(EntityKind::Order).parent(), Route::Dashboard);
    }
}
