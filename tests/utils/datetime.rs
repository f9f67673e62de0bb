use chrono::NaiveDate;
use marketdesk::utils::datetime::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_format_ymd() {
    assert_eq!(format_ymd(date(2025, 1, 15)), "2025-01-15");
}

#[test]
fn test_parse_date_like_formats() {
    let expected = Some(date(2024, 1, 15));
    assert_eq!(parse_date_like("2024-01-15"), expected);
    assert_eq!(parse_date_like("2024-01-15T09:30:00"), expected);
    assert_eq!(parse_date_like("2024-01-15 09:30:00"), expected);
    assert_eq!(parse_date_like("01/15/2024"), expected);
    assert_eq!(parse_date_like("  2024-01-15  "), expected);
}

#[test]
fn test_parse_date_like_rejects_garbage() {
    assert_eq!(parse_date_like(""), None);
    assert_eq!(parse_date_like("next tuesday"), None);
    assert_eq!(parse_date_like("2024-13-40"), None);
}

#[test]
fn test_most_recent_sunday_crosses_year() {
    // Across a year boundary
    assert_eq!(most_recent_sunday(date(2024, 1, 2)), date(2023, 12, 31));
}

#[test]
fn test_bucket_membership_at_fixed_today() {
    let today = date(2024, 1, 15);

    assert!(DateBucket::Today.contains(date(2024, 1, 15), today));
    assert!(!DateBucket::Today.contains(date(2024, 1, 14), today));

    let old = date(2023, 12, 1);
    assert!(!DateBucket::ThisWeek.contains(old, today));
    assert!(!DateBucket::ThisMonth.contains(old, today));
    assert!(!DateBucket::ThisYear.contains(old, today));

    assert!(DateBucket::ThisMonth.contains(date(2024, 1, 1), today));
    assert!(DateBucket::ThisYear.contains(date(2024, 12, 31), today));
}

#[test]
fn test_bucket_keys_round_trip() {
    for bucket in DateBucket::ALL {
        assert_eq!(bucket.key().parse::<DateBucket>().unwrap(), bucket);
    }
    assert!("lastDecade".parse::<DateBucket>().is_err());
}

#[test]
fn test_format_display_date_falls_back_to_raw_text() {
    assert_eq!(format_display_date("2024-01-15", "%d %b %Y"), "15 Jan 2024");
    assert_eq!(format_display_date("TBD", "%d %b %Y"), "TBD");
}
