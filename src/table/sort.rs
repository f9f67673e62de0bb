use crate::model::Row;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => f.write_str("ascending"),
            Self::Descending => f.write_str("descending"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

/// Sort rows by the natural ordering of `state.key`.
///
/// Descending is the exact reverse of the stable ascending order, so equal
/// keys also swap places. Missing fields order first when ascending.
pub fn sort_rows<R: Row>(rows: &mut [&R], state: &SortState) {
    rows.sort_by(|a, b| match (a.field(&state.key), b.field(&state.key)) {
        (Some(x), Some(y)) => x.natural_cmp(y),
        (None, Some(_)) => std::cmp::Ordering::Less,
        (Some(_), None) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    if state.direction == SortDirection::Descending {
        rows.reverse();
    }
}
