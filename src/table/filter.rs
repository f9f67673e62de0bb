//! Filter descriptors and the set of active filter values.

use crate::model::Row;
use crate::utils::datetime::DateBucket;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Field must equal one of the selected option values
    Categorical,
    /// Field is a date that must fall into one of the selected buckets
    DateBucket,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDescriptor {
    pub key: String,
    pub label: String,
    pub kind: FilterKind,
    pub options: Vec<FilterOption>,
}

impl FilterDescriptor {
    /// Categorical filter whose labels are the values themselves
    pub fn categorical(key: &str, label: &str, values: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: FilterKind::Categorical,
            options: values.iter().map(|v| FilterOption::new(title_case(v), *v)).collect(),
        }
    }

    /// Date filter offering all relative buckets
    pub fn date(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: FilterKind::DateBucket,
            options: DateBucket::ALL
                .iter()
                .map(|bucket| FilterOption::new(bucket.label(), bucket.key()))
                .collect(),
        }
    }

    /// Whether `row` satisfies any of `selected` values for this filter.
    /// A row without the field never matches.
    fn accepts<R: Row>(&self, row: &R, selected: &BTreeSet<String>, today: NaiveDate) -> bool {
        let Some(value) = row.field(&self.key) else {
            return false;
        };
        match self.kind {
            FilterKind::Categorical => selected.iter().any(|option| value.matches_option(option)),
            FilterKind::DateBucket => {
                let Some(date) = value.as_date() else {
                    return false;
                };
                selected
                    .iter()
                    .filter_map(|option| option.parse::<DateBucket>().ok())
                    .any(|bucket| bucket.contains(date, today))
            }
        }
    }
}

/// Selected option values per filter key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFilters {
    selected: BTreeMap<String, BTreeSet<String>>,
}

impl ActiveFilters {
    /// Toggle `value` for `key`; returns whether it is now selected
    pub fn toggle(&mut self, key: &str, value: &str) -> bool {
        let values = self.selected.entry(key.to_string()).or_default();
        let now_selected = if values.remove(value) {
            false
        } else {
            values.insert(value.to_string());
            true
        };
        if values.is_empty() {
            self.selected.remove(key);
        }
        now_selected
    }

    pub fn clear_key(&mut self, key: &str) {
        self.selected.remove(key);
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        self.selected.get(key).is_some_and(|values| values.contains(value))
    }

    pub fn values(&self, key: &str) -> impl Iterator<Item = &str> {
        self.selected.get(key).into_iter().flatten().map(String::as_str)
    }

    /// Number of selected values across all keys
    pub fn count(&self) -> usize {
        self.selected.values().map(BTreeSet::len).sum()
    }

    /// Whether `row` passes every active filter. Active keys without a
    /// descriptor are treated as categorical.
    pub fn matches<R: Row>(&self, row: &R, descriptors: &[FilterDescriptor], today: NaiveDate) -> bool {
        self.selected.iter().all(|(key, values)| {
            match descriptors.iter().find(|d| &d.key == key) {
                Some(descriptor) => descriptor.accepts(row, values, today),
                None => row
                    .field(key)
                    .is_some_and(|value| values.iter().any(|option| value.matches_option(option))),
            }
        })
    }
}

fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
