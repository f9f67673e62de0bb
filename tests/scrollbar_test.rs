use ratatui::layout::Rect;
use marketdesk::ui::components::scrollbar_helper::ScrollbarHelper;

#[test]
fn test_scrollbar_detection() {
    // 10 items in a bordered rect with 3 inner rows need a scrollbar
    let rect = Rect::new(0, 0, 50, 5);
    let (content_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, 10, 0);

    let scrollbar_rect = scrollbar_area.expect("scrollbar should be needed for 10 items in height 5");
    assert_eq!(scrollbar_rect.width, 1, "Scrollbar should be 1 column wide");
    assert!(scrollbar_rect.height <= rect.height);
    assert!(content_area.width < rect.width, "Content should make room for the scrollbar");
}

#[test]
fn test_no_scrollbar_needed() {
    // 3 items fit in 3 inner rows
    let rect = Rect::new(0, 0, 50, 5);
    let (content_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, 3, 0);

    assert!(scrollbar_area.is_none(), "Scrollbar should not be needed for 3 items in height 5");
    assert_eq!(content_area, rect);
}

#[test]
fn test_reserved_rows_reduce_capacity() {
    // A table header row leaves room for only 2 rows
    let rect = Rect::new(0, 0, 50, 5);
    assert!(ScrollbarHelper::calculate_areas(rect, 3, 1).1.is_some());
    assert!(ScrollbarHelper::calculate_areas(rect, 2, 1).1.is_none());
}

#[test]
fn test_needs_scrollbar() {
    assert!(ScrollbarHelper::needs_scrollbar(11, 10));
    assert!(!ScrollbarHelper::needs_scrollbar(10, 10));
}
