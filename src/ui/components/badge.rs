use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::table::{BadgeTone, CellText};

/// Terminal colour for a badge tone
#[must_use]
pub fn tone_color(tone: BadgeTone) -> Color {
    match tone {
        BadgeTone::Success => Color::Green,
        BadgeTone::Warning => Color::Yellow,
        BadgeTone::Danger => Color::Red,
        BadgeTone::Info => Color::Cyan,
        BadgeTone::Neutral => Color::Gray,
    }
}

/// Create a status badge: bold text on the tone's colour
#[must_use]
pub fn create_status_badge(text: &str, tone: BadgeTone) -> Span<'static> {
    let style = Style::default()
        .bg(tone_color(tone))
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);

    Span::styled(format!(" {text} "), style)
}

/// Render a formatted cell, as a badge when it carries a tone
#[must_use]
pub fn cell_span(cell: CellText) -> Span<'static> {
    match cell.tone {
        Some(tone) if !cell.text.is_empty() => create_status_badge(&cell.text, tone),
        _ => Span::raw(cell.text),
    }
}

/// Create a count badge, e.g. for active filters
#[must_use]
pub fn create_count_badge(label: &str, count: usize) -> Span<'static> {
    Span::styled(
        format!("({label}: {count})"),
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toned_cells_become_padded_badges() {
        let span = cell_span(CellText {
            text: "pending".to_string(),
            tone: Some(BadgeTone::Warning),
        });
        assert_eq!(span.content, " pending ");
        assert_eq!(span.style.bg, Some(Color::Yellow));
    }

    #[test]
    fn plain_cells_stay_raw() {
        let span = cell_span(CellText {
            text: "Acme".to_string(),
            tone: None,
        });
        assert_eq!(span.content, "Acme");
        assert_eq!(span.style.bg, None);
    }
}
