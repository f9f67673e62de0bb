use super::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use super::scroll_behavior::ScrollBehavior;
use crate::constants::DIALOG_TITLE_DEBUG_LOGS;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    Frame,
};

const HELP_CONTENT: &str = r"
MARKETDESK - Marketplace Admin Console
======================================

NAVIGATION
----------
Tab         Switch focus between sidebar and main pane
J/K         Previous/next page in the sidebar
Enter       Open the selected page, card or row
Esc         Back to the parent page, or close dialogs

TABLES
------
j/k         Move the row cursor down/up
h/l         Move the column cursor left/right
s           Sort by the focused column (press again to reverse)
/           Search (type, Enter to keep, Esc to clear)
f           Open the filter picker
n/p         Next/previous page
Home/End    First/last page
Space       Select or deselect the row under the cursor
a           Select every row on the page (again to clear)

RECORDS
-------
Enter       View the record
e           Edit the record
c           Create a new record
d           Delete the record, or the selection (with confirmation)

FORMS
-----
Tab/↓       Next field
Shift+Tab/↑ Previous field
←/→         Change the option of a choice field
Enter       Save
Esc         Cancel

GENERAL CONTROLS
----------------
?           Toggle help panel
G           Show logs
q           Quit application
Ctrl+C      Quit application

Press 'Esc' or '?' to close this help panel
";

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, noun: &str, count: usize) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 6, area);
    f.render_widget(Clear, dialog_area);

    let message = if count == 1 {
        format!("Are you sure you want to delete this {noun}?")
    } else {
        format!("Are you sure you want to delete {count} records?")
    };

    let block = create_dialog_block(" Confirm Delete ", Color::Red);
    let inner = block.inner(dialog_area);

    let message_paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(inner);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(
        create_instructions_paragraph(&[shortcuts::ENTER_CONFIRM, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]),
        chunks[1],
    );
}

/// Info and error dialogs share one layout; only title and colour differ
pub fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    message: &str,
    scroll: &mut ScrollBehavior,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .style(Style::default().fg(color));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines: Vec<&str> = message.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height as usize;
    let text = visible_window(&lines, visible_height, scroll);

    let message_paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true });

    let instructions_paragraph = Paragraph::new("Press any key to continue • j/k to scroll if needed")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions_paragraph, instructions_area);

    if total_lines > visible_height {
        render_dialog_scrollbar(f, content_area, scroll);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut ScrollBehavior) {
    let lines: Vec<&str> = HELP_CONTENT.lines().collect();
    render_scrolled_panel(f, area, " Help - Press 'Esc' or '?' to close ", &lines, scroll);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logs: &[String], scroll: &mut ScrollBehavior) {
    let lines: Vec<&str> = if logs.is_empty() {
        vec!["No logs yet"]
    } else {
        logs.iter().map(String::as_str).collect()
    };
    let title = format!(" {DIALOG_TITLE_DEBUG_LOGS} ");
    render_scrolled_panel(f, area, &title, &lines, scroll);
}

/// Large centered panel showing `lines` from the scroll offset onwards
fn render_scrolled_panel(f: &mut Frame, area: Rect, title: &str, lines: &[&str], scroll: &mut ScrollBehavior) {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        panel_area.x + margin_x,
        panel_area.y + margin_y,
        panel_area.width.saturating_sub(margin_x * 2),
        panel_area.height.saturating_sub(margin_y * 2),
    );

    let visible_height = content_area.height.saturating_sub(2) as usize;
    let text = visible_window(lines, visible_height, scroll);

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(paragraph, content_area);

    if lines.len() > visible_height {
        render_dialog_scrollbar(f, content_area, scroll);
    }
}

/// Clamp the offset, sync the scrollbar and return the visible lines
fn visible_window(lines: &[&str], visible_height: usize, scroll: &mut ScrollBehavior) -> String {
    let total_lines = lines.len();
    let max_scroll = total_lines.saturating_sub(visible_height);
    let offset = scroll.offset.min(max_scroll);

    scroll.scrollbar = scroll
        .scrollbar
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(offset);

    lines.iter().skip(offset).take(visible_height).copied().collect::<Vec<_>>().join("\n")
}

fn render_dialog_scrollbar(f: &mut Frame, area: Rect, scroll: &mut ScrollBehavior) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(Style::default().fg(Color::Gray))
        .thumb_style(Style::default().fg(Color::White));

    f.render_stateful_widget(scrollbar, area, &mut scroll.scrollbar);
}
