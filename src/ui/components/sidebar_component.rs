//! Sidebar navigation component.
//!
//! Lists the dashboard followed by every entity page. `J`/`K` jump to the
//! previous/next page from anywhere; when the sidebar has focus `j`/`k`
//! move the cursor and `Enter` opens the page under it.

use crate::model::EntityKind;
use crate::routes::Route;
use crate::store::AppStore;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

/// One sidebar entry; `None` is the dashboard
pub type SidebarEntry = Option<EntityKind>;

pub struct SidebarComponent {
    /// Page currently shown in the main pane
    pub selection: SidebarEntry,
    pub focused: bool,
    items: Vec<SidebarEntry>,
    counts: Vec<usize>,
    list_state: ListState,
    scrollbar_helper: ScrollbarHelper,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarComponent {
    pub fn new() -> Self {
        let items: Vec<SidebarEntry> = std::iter::once(None).chain(EntityKind::ALL.into_iter().map(Some)).collect();
        Self {
            selection: None,
            focused: false,
            counts: vec![0; items.len()],
            items,
            list_state: ListState::default().with_selected(Some(0)),
            scrollbar_helper: ScrollbarHelper::new(),
        }
    }

    /// Refresh the record counts shown next to each entity
    pub fn update_counts(&mut self, store: &AppStore) {
        self.counts = self
            .items
            .iter()
            .map(|item| item.map_or(0, |kind| store.count(kind)))
            .collect();
    }

    /// Index of the entry under the cursor
    pub fn cursor(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    fn route_for(entry: SidebarEntry) -> Route {
        entry.map_or(Route::Dashboard, Route::List)
    }

    fn index_of(&self, entry: SidebarEntry) -> usize {
        self.items.iter().position(|item| *item == entry).unwrap_or(0)
    }

    fn move_cursor(&mut self, forward: bool) -> usize {
        let len = self.items.len();
        let current = self.cursor();
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.list_state.select(Some(next));
        next
    }

    /// Move the cursor and open the page it lands on
    fn navigate_relative(&mut self, forward: bool) -> Action {
        let index = self.move_cursor(forward);
        Action::Navigate(Self::route_for(self.items[index]))
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        let is_in_area = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;

        if !is_in_area {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if mouse.row > area.y && mouse.row < area.y + area.height - 1 {
                    let clicked_index = self.list_state.offset() + (mouse.row - area.y - 1) as usize;
                    match self.items.get(clicked_index) {
                        Some(entry) => {
                            self.list_state.select(Some(clicked_index));
                            Action::Navigate(Self::route_for(*entry))
                        }
                        // Guard against clicks beyond the available entries
                        None => Action::None,
                    }
                } else {
                    Action::None
                }
            }
            MouseEventKind::ScrollUp => self.navigate_relative(false),
            MouseEventKind::ScrollDown => self.navigate_relative(true),
            _ => Action::None,
        }
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('J') => self.navigate_relative(true),
            KeyCode::Char('K') => self.navigate_relative(false),
            KeyCode::Char('j') | KeyCode::Down if self.focused => {
                self.move_cursor(true);
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up if self.focused => {
                self.move_cursor(false);
                Action::None
            }
            KeyCode::Enter if self.focused => Action::Navigate(Self::route_for(self.items[self.cursor()])),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::Navigate(route) = &action {
            self.selection = route.entity();
            self.list_state.select(Some(self.index_of(self.selection)));
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let all_items: Vec<ListItem> = self
            .items
            .iter()
            .zip(&self.counts)
            .map(|(item, count)| {
                let is_current = *item == self.selection;
                let name_style = if is_current {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                let line = match item {
                    None => Line::from(Span::styled("Dashboard", name_style)),
                    Some(kind) => Line::from(vec![
                        Span::styled(kind.title(), name_style),
                        Span::styled(format!(" ({count})"), Style::default().fg(Color::DarkGray)),
                    ]),
                };
                ListItem::new(line)
            })
            .collect();

        let total_items = all_items.len();
        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total_items, 0);

        let available_height = rect.height.saturating_sub(2) as usize;
        self.scrollbar_helper
            .update_state(total_items, self.cursor(), Some(available_height));

        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let highlight = if self.focused {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default().bg(Color::DarkGray)
        };

        let list = List::new(all_items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title("Navigation")
                    .title_style(Style::default().fg(Color::White))
                    .border_style(Style::default().fg(border_color)),
            )
            .highlight_style(highlight)
            .style(Style::default().fg(Color::White));

        f.render_stateful_widget(list, list_area, &mut self.list_state);
        self.scrollbar_helper.render(f, scrollbar_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn shift_j_navigates_to_next_page() {
        let mut sidebar = SidebarComponent::new();
        match sidebar.handle_key_events(key(KeyCode::Char('J'))) {
            Action::Navigate(route) => assert_eq!(route, Route::List(EntityKind::Asset)),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn shift_k_wraps_to_last_entity() {
        let mut sidebar = SidebarComponent::new();
        match sidebar.handle_key_events(key(KeyCode::Char('K'))) {
            Action::Navigate(route) => assert_eq!(route, Route::List(EntityKind::Freelancer)),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn lowercase_keys_need_focus() {
        let mut sidebar = SidebarComponent::new();
        sidebar.handle_key_events(key(KeyCode::Char('j')));
        assert_eq!(sidebar.cursor(), 0);

        sidebar.focused = true;
        sidebar.handle_key_events(key(KeyCode::Char('j')));
        sidebar.handle_key_events(key(KeyCode::Char('j')));
        match sidebar.handle_key_events(key(KeyCode::Enter)) {
            Action::Navigate(route) => assert_eq!(route, Route::List(EntityKind::Inventory)),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn navigation_moves_cursor_to_entity() {
        let mut sidebar = SidebarComponent::new();
        sidebar.update(Action::Navigate(Route::Detail(EntityKind::Order, "ORD001".to_string())));
        assert_eq!(sidebar.selection, Some(EntityKind::Order));
        assert_eq!(sidebar.cursor(), 6);
    }
}
