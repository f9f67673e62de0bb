//! Scrollbar helper for bordered, scrollable panes.
//!
//! Shared by the data table and the detail view so both draw the same
//! scrollbar in the same place.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Sync the state with the content length and the current position
    pub fn update_state(&mut self, total_items: usize, current_position: usize, viewport_height: Option<usize>) {
        self.state = self.state.content_length(total_items).position(current_position);

        if let Some(height) = viewport_height {
            self.state = self.state.viewport_content_length(height);
        }
    }

    pub fn needs_scrollbar(total_items: usize, available_height: usize) -> bool {
        total_items > available_height
    }

    /// Split `rect` into content and, when the content overflows, a one
    /// column scrollbar inside the right border.
    ///
    /// `reserved_rows` counts lines inside the borders that do not scroll,
    /// such as a table header.
    pub fn calculate_areas(rect: Rect, total_items: usize, reserved_rows: u16) -> (Rect, Option<Rect>) {
        let available_height = rect.height.saturating_sub(2 + reserved_rows) as usize;

        if !Self::needs_scrollbar(total_items, available_height) {
            return (rect, None);
        }

        let content_area = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let scrollbar_area = Rect {
            x: rect.x + rect.width.saturating_sub(1),
            y: rect.y + 1 + reserved_rows,
            width: 1,
            height: rect.height.saturating_sub(2 + reserved_rows),
        };
        (content_area, Some(scrollbar_area))
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }

    pub fn state(&self) -> &ScrollbarState {
        &self.state
    }
}
