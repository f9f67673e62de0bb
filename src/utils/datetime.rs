//! Date and time utility functions
//!
//! This module provides parsing of the loosely formatted date strings found in
//! record fields, display formatting, and the relative date buckets used by
//! date filters ("today", "this week", ...).

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Standard date format used for fixture data and form input
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, ISO_DATE_FORMAT)
}

/// Parse any date-like string into a calendar date.
///
/// Accepts plain ISO dates, RFC 3339 timestamps, ISO date-times without an
/// offset, and US style `MM/DD/YYYY`. Returns `None` for anything else.
pub fn parse_date_like(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = parse_date(value) {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).date_naive());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(value, "%m/%d/%Y").ok()
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(ISO_DATE_FORMAT).to_string()
}

/// Format a date-like string with the given chrono format, falling back to
/// the original text when it does not parse.
pub fn format_display_date(value: &str, format: &str) -> String {
    match parse_date_like(value) {
        Some(date) => date.format(format).to_string(),
        None => value.to_string(),
    }
}

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The most recent Sunday on or before `date`
pub fn most_recent_sunday(date: NaiveDate) -> NaiveDate {
    let days_since_sunday = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(days_since_sunday)
}

/// Named relative time windows used by date filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DateBucket {
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "thisWeek")]
    ThisWeek,
    #[serde(rename = "thisMonth")]
    ThisMonth,
    #[serde(rename = "thisYear")]
    ThisYear,
}

impl DateBucket {
    pub const ALL: [DateBucket; 4] = [Self::Today, Self::ThisWeek, Self::ThisMonth, Self::ThisYear];

    /// Wire name used in filter option values
    pub fn key(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::ThisWeek => "thisWeek",
            Self::ThisMonth => "thisMonth",
            Self::ThisYear => "thisYear",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::ThisWeek => "This week",
            Self::ThisMonth => "This month",
            Self::ThisYear => "This year",
        }
    }

    /// Whether `date` falls into this bucket relative to `today`.
    ///
    /// "This week" starts on the most recent Sunday and is open ended.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::Today => date == today,
            Self::ThisWeek => date >= most_recent_sunday(today),
            Self::ThisMonth => date.year() == today.year() && date.month() == today.month(),
            Self::ThisYear => date.year() == today.year(),
        }
    }
}

impl fmt::Display for DateBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DateBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.key() == s)
            .ok_or_else(|| format!("unknown date bucket '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sunday_is_its_own_week_start() {
        // 2024-01-14 is a Sunday
        assert_eq!(most_recent_sunday(ymd(2024, 1, 14)), ymd(2024, 1, 14));
        assert_eq!(most_recent_sunday(ymd(2024, 1, 15)), ymd(2024, 1, 14));
        assert_eq!(most_recent_sunday(ymd(2024, 1, 20)), ymd(2024, 1, 14));
    }

    #[test]
    fn bucket_round_trips_through_key() {
        for bucket in DateBucket::ALL {
            assert_eq!(bucket.key().parse::<DateBucket>(), Ok(bucket));
        }
        assert!("lastWeek".parse::<DateBucket>().is_err());
    }
}
