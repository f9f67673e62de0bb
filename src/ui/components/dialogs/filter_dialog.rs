//! Filter picker: one checkbox per option, grouped under each filter.

use super::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::table::{ActiveFilters, FilterDescriptor};
use crate::ui::core::Action;
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState},
    Frame,
};

/// Picker state. `active` mirrors the table's filters so checkboxes
/// update immediately; the table applies the emitted actions itself.
#[derive(Debug, Clone)]
pub struct FilterPicker {
    descriptors: Vec<FilterDescriptor>,
    active: ActiveFilters,
    cursor: usize,
}

impl FilterPicker {
    pub fn new(descriptors: Vec<FilterDescriptor>, active: ActiveFilters) -> Self {
        Self {
            descriptors,
            active,
            cursor: 0,
        }
    }

    /// (filter key, option value) for every selectable line
    fn entries(&self) -> Vec<(&str, &str)> {
        self.descriptors
            .iter()
            .flat_map(|d| d.options.iter().map(move |o| (d.key.as_str(), o.value.as_str())))
            .collect()
    }

    pub fn active(&self) -> &ActiveFilters {
        &self.active
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        let count = self.entries().len();
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('f') | KeyCode::Char('q') => Action::HideDialog,
            KeyCode::Down | KeyCode::Char('j') => {
                if count > 0 {
                    self.cursor = (self.cursor + 1) % count;
                }
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if count > 0 {
                    self.cursor = (self.cursor + count - 1) % count;
                }
                Action::None
            }
            KeyCode::Char(' ') => {
                let Some((key, value)) = self.entries().get(self.cursor).map(|(k, v)| (k.to_string(), v.to_string()))
                else {
                    return Action::None;
                };
                self.active.toggle(&key, &value);
                Action::ToggleFilter { key, value }
            }
            KeyCode::Char('c') => {
                self.active.clear();
                Action::ClearFilters
            }
            _ => Action::None,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let option_lines: usize = self.descriptors.iter().map(|d| d.options.len() + 1).sum();
        let height = (option_lines as u16 + 4).min(area.height);
        let dialog_area = LayoutManager::centered_rect_lines(50, height, area);
        f.render_widget(Clear, dialog_area);

        let title = format!(" Filters ({} active) ", self.active.count());
        let block = create_dialog_block(title, Color::Cyan);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let mut items = Vec::new();
        let mut selected_line = None;
        let mut index = 0;
        for descriptor in &self.descriptors {
            items.push(ListItem::new(Line::from(Span::styled(
                descriptor.label.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))));
            for option in &descriptor.options {
                let checked = self.active.is_selected(&descriptor.key, &option.value);
                let mark = if checked { "[x]" } else { "[ ]" };
                if index == self.cursor {
                    selected_line = Some(items.len());
                }
                items.push(ListItem::new(format!("  {mark} {}", option.label)));
                index += 1;
            }
        }

        let list = List::new(items).highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
        let mut state = ListState::default().with_selected(selected_line);
        f.render_stateful_widget(list, chunks[0], &mut state);

        f.render_widget(
            create_instructions_paragraph(&[
                shortcuts::SPACE_TOGGLE,
                shortcuts::SEPARATOR,
                shortcuts::CLEAR_ALL,
                shortcuts::SEPARATOR,
                shortcuts::ESC_CANCEL,
            ]),
            chunks[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn picker() -> FilterPicker {
        FilterPicker::new(
            vec![
                FilterDescriptor::categorical("status", "Status", &["pending", "delivered"]),
                FilterDescriptor::date("date", "Date"),
            ],
            ActiveFilters::default(),
        )
    }

    #[test]
    fn space_toggles_option_under_cursor() {
        let mut picker = picker();
        picker.handle_key(key(KeyCode::Char('j')));
        match picker.handle_key(key(KeyCode::Char(' '))) {
            Action::ToggleFilter { key, value } => {
                assert_eq!(key, "status");
                assert_eq!(value, "delivered");
            }
            other => panic!("unexpected action: {:?}", other),
        }
        assert!(picker.active().is_selected("status", "delivered"));
    }

    #[test]
    fn cursor_wraps_across_filters() {
        let mut picker = picker();
        picker.handle_key(key(KeyCode::Char('k')));
        // 2 status options + 4 date buckets
        assert_eq!(picker.cursor(), 5);
    }

    #[test]
    fn clear_all_empties_selection() {
        let mut picker = picker();
        picker.handle_key(key(KeyCode::Char(' ')));
        assert!(matches!(picker.handle_key(key(KeyCode::Char('c'))), Action::ClearFilters));
        assert!(picker.active().is_empty());
    }
}
