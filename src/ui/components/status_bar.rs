//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// What the status bar should report this frame
#[derive(Debug, Clone, Default)]
pub struct StatusInfo {
    pub route: String,
    pub saving: bool,
    pub searching: bool,
    pub message: Option<String>,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, info: &StatusInfo) {
        let status_text = if info.saving {
            format!("{}  Saving...", info.route)
        } else if info.searching {
            format!("{}  Type to search • Enter: done • Esc: clear", info.route)
        } else if let Some(message) = &info.message {
            format!("{}  {}", info.route, message)
        } else {
            // Show helpful shortcuts
            format!("{}  Tab: switch pane • /: search • f: filters • ?: help • q: quit", info.route)
        };

        let status_color = if info.saving { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
