//! Layout management and calculations

use crate::constants::{MAIN_AREA_MIN_WIDTH, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into body (everything but the last line) and status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> (Rect, Rect) {
        let body_height = area.height.saturating_sub(1);
        let body = Rect::new(area.x, area.y, area.width, body_height);
        let status = Rect::new(area.x, area.y + body_height, area.width, area.height.min(1));
        (body, status)
    }

    /// Split the body into sidebar and main pane.
    ///
    /// The configured sidebar width is clamped to its limits and shrunk when
    /// the main pane would otherwise drop below its minimum width.
    #[must_use]
    pub fn body_layout(area: Rect, sidebar_width: u16) -> (Rect, Rect) {
        let wanted = sidebar_width.clamp(SIDEBAR_MIN_WIDTH, SIDEBAR_MAX_WIDTH);
        let room = area.width.saturating_sub(MAIN_AREA_MIN_WIDTH);
        let sidebar = wanted.min(room);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar), Constraint::Min(0)])
            .split(area);
        (chunks[0], chunks[1])
    }

    /// Split the main pane into a header line, content and a footer line
    #[must_use]
    pub fn page_layout(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        (chunks[0], chunks[1], chunks[2])
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Dashboard grid: `columns` cards per row, each `card_height` lines tall
    #[must_use]
    pub fn card_grid(area: Rect, count: usize, columns: u16, card_height: u16) -> Vec<Rect> {
        let columns = columns.max(1);
        let card_width = area.width / columns;

        (0..count as u16)
            .map(|index| {
                let row = index / columns;
                let col = index % columns;
                Rect::new(
                    area.x + col * card_width,
                    area.y + row * card_height,
                    card_width,
                    card_height,
                )
            })
            .take_while(|rect| rect.bottom() <= area.bottom())
            .collect()
    }
}
