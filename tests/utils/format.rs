use marketdesk::utils::format::*;

#[test]
fn test_format_currency() {
    assert_eq!(format_currency(0.0, "$"), "$0.00");
    assert_eq!(format_currency(1234.5, "$"), "$1,234.50");
    assert_eq!(format_currency(1_000_000.0, "€"), "€1,000,000.00");
    assert_eq!(format_currency(-12.5, "$"), "-$12.50");
}

#[test]
fn test_truncate_counts_characters() {
    assert_eq!(truncate("short", 10), "short");
    let cut = truncate("Mobile Commerce Trends 2024", 10);
    assert!(cut.chars().count() <= 10);
    assert!(cut.starts_with("Mobile"));
}
