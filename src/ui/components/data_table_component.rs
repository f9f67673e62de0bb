//! Data table component.
//!
//! Renders a [`TableView`] of records and maps keys onto its operations:
//! row and column cursors, sorting, search, filter picker, pagination,
//! selection and the per-row actions. One instance exists per entity so
//! search, filters, sort and selection survive navigation.

use crate::constants::{EMPTY_TABLE, INFO_NO_SELECTION};
use crate::entities::EntityConfig;
use crate::model::{EntityKind, Record, Row};
use crate::routes::Route;
use crate::table::{CellFormat, RowAction, TableView};
use crate::ui::components::badge::{cell_span, create_count_badge};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Cell, Paragraph, Row as TableRow, Table, TableState},
    Frame,
};
use std::sync::Arc;

/// Width of the checkbox column
const CHECKBOX_WIDTH: u16 = 3;

pub struct DataTableComponent {
    kind: EntityKind,
    view: TableView<Record>,
    format: CellFormat,
    table_state: TableState,
    focused_column: usize,
    searching: bool,
    pub focused: bool,
    scrollbar_helper: ScrollbarHelper,
    last_area: Rect,
}

impl DataTableComponent {
    pub fn new(config: &EntityConfig, rows: Arc<[Record]>, page_size: usize, format: CellFormat) -> Self {
        Self {
            kind: config.kind,
            view: TableView::new(rows, config.table_config(page_size)),
            format,
            table_state: TableState::default().with_selected(Some(0)),
            focused_column: 0,
            searching: false,
            focused: true,
            scrollbar_helper: ScrollbarHelper::new(),
            last_area: Rect::default(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn view(&self) -> &TableView<Record> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut TableView<Record> {
        &mut self.view
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn focused_column(&self) -> usize {
        self.focused_column
    }

    /// Replace the rows after a store change
    pub fn set_rows(&mut self, rows: Arc<[Record]>) {
        self.view.set_rows(rows);
        self.clamp_cursor();
    }

    /// Row index under the cursor within the current page
    pub fn cursor(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    /// Id of the record under the cursor
    pub fn cursor_id(&self) -> Option<String> {
        self.view.page_rows().get(self.cursor()).map(|row| row.id().to_string())
    }

    fn clamp_cursor(&mut self) {
        let len = self.view.page_rows().len();
        let cursor = self.cursor().min(len.saturating_sub(1));
        self.table_state.select(Some(cursor));
    }

    fn reset_cursor(&mut self) {
        self.table_state.select(Some(0));
        *self.table_state.offset_mut() = 0;
    }

    fn move_cursor(&mut self, forward: bool) {
        let len = self.view.page_rows().len();
        if len == 0 {
            return;
        }
        let current = self.cursor();
        let next = if forward {
            (current + 1).min(len - 1)
        } else {
            current.saturating_sub(1)
        };
        self.table_state.select(Some(next));
    }

    fn move_column(&mut self, forward: bool) {
        let count = self.view.columns().len();
        if count == 0 {
            return;
        }
        self.focused_column = if forward {
            (self.focused_column + 1).min(count - 1)
        } else {
            self.focused_column.saturating_sub(1)
        };
    }

    fn sort_focused_column(&mut self) {
        let Some(key) = self.view.columns().get(self.focused_column).map(|c| c.key.clone()) else {
            return;
        };
        if let Some(direction) = self.view.toggle_sort(&key) {
            log::info!("{}: sorted by {} {}", self.kind.slug(), key, direction);
            self.reset_cursor();
        }
    }

    fn row_action(&self, action: RowAction) -> Action {
        self.cursor_id()
            .and_then(|id| action.route(self.kind, &id))
            .map_or(Action::None, Action::Navigate)
    }

    fn delete_request(&self) -> Action {
        let ids: Vec<String> = if self.view.selected_count() > 0 {
            self.view.selected_ids().map(str::to_string).collect()
        } else {
            self.cursor_id().into_iter().collect()
        };
        if ids.is_empty() {
            return Action::ShowDialog(DialogType::Info(INFO_NO_SELECTION.to_string()));
        }
        Action::ShowDialog(DialogType::DeleteConfirmation { kind: self.kind, ids })
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => self.searching = false,
            KeyCode::Esc => {
                self.searching = false;
                self.view.clear_query();
            }
            KeyCode::Backspace => self.view.pop_query_char(),
            KeyCode::Char(c) => self.view.push_query_char(c),
            _ => {}
        }
        self.reset_cursor();
        Action::None
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        let area = self.last_area;
        let is_in_area = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;
        if !is_in_area {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Skip the top border and the header row
                if mouse.row > area.y + 1 && mouse.row < area.y + area.height - 1 {
                    let clicked = self.table_state.offset() + (mouse.row - area.y - 2) as usize;
                    if clicked < self.view.page_rows().len() {
                        self.table_state.select(Some(clicked));
                    }
                }
                Action::None
            }
            MouseEventKind::ScrollUp => {
                self.move_cursor(false);
                Action::None
            }
            MouseEventKind::ScrollDown => {
                self.move_cursor(true);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn header_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            self.kind.title().to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )];
        if self.searching || !self.view.query().is_empty() {
            let cursor = if self.searching { "█" } else { "" };
            spans.push(Span::styled(
                format!("  /{}{}", self.view.query(), cursor),
                Style::default().fg(Color::Yellow),
            ));
        }
        let active = self.view.filters().count();
        if active > 0 {
            spans.push(Span::raw("  "));
            spans.push(create_count_badge("filters", active));
        }
        if let Some(sort) = self.view.sort_state() {
            spans.push(Span::styled(
                format!("  sorted by {} {}", sort.key, sort.direction.arrow()),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }

    fn footer_line(&self) -> Line<'static> {
        let info = self.view.page_info();
        let mut text = format!(
            "{}-{} of {} • page {}/{}",
            info.first,
            info.last,
            info.total,
            info.page + 1,
            info.page_count
        );
        let selected = self.view.selected_count();
        if selected > 0 {
            text.push_str(&format!(" • {selected} selected"));
        }
        Line::from(Span::styled(text, Style::default().fg(Color::Gray)))
    }
}

impl Component for DataTableComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.searching {
            return self.handle_search_key(key);
        }
        if !self.focused {
            return Action::None;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_cursor(true);
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_cursor(false);
                Action::None
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.move_column(false);
                Action::None
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.move_column(true);
                Action::None
            }
            KeyCode::Char('s') => {
                self.sort_focused_column();
                Action::None
            }
            KeyCode::Char('/') => {
                self.searching = true;
                Action::None
            }
            KeyCode::Char('f') => {
                if self.view.filter_descriptors().is_empty() {
                    return Action::ShowDialog(DialogType::Info(format!("{} have no filters", self.kind.title())));
                }
                Action::ShowDialog(DialogType::Filters {
                    descriptors: self.view.filter_descriptors().to_vec(),
                    active: self.view.filters().clone(),
                })
            }
            KeyCode::Char('n') | KeyCode::PageDown => {
                if self.view.next_page() {
                    self.reset_cursor();
                }
                Action::None
            }
            KeyCode::Char('p') | KeyCode::PageUp => {
                if self.view.prev_page() {
                    self.reset_cursor();
                }
                Action::None
            }
            KeyCode::Home => {
                self.view.first_page();
                self.reset_cursor();
                Action::None
            }
            KeyCode::End => {
                self.view.last_page();
                self.reset_cursor();
                Action::None
            }
            KeyCode::Char(' ') => {
                if let Some(id) = self.cursor_id() {
                    self.view.toggle_selected(&id);
                }
                Action::None
            }
            KeyCode::Char('a') => {
                self.view.select_page();
                Action::None
            }
            KeyCode::Enter => self.row_action(RowAction::View),
            KeyCode::Char('e') => self.row_action(RowAction::Edit),
            KeyCode::Char('c') => Action::Navigate(Route::Create(self.kind)),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_request(),
            KeyCode::Esc => {
                // Unwind local state first; with nothing to unwind Esc goes back
                if !self.view.query().is_empty() {
                    self.view.clear_query();
                    self.reset_cursor();
                } else if self.view.selected_count() > 0 {
                    self.view.clear_selection();
                } else {
                    return Action::Back;
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ToggleFilter { key, value } => {
                self.view.toggle_filter(&key, &value);
                self.reset_cursor();
                Action::None
            }
            Action::ClearFilters => {
                self.view.clear_filters();
                self.reset_cursor();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (header_area, table_area, footer_area) = LayoutManager::page_layout(rect);
        self.last_area = table_area;

        f.render_widget(Paragraph::new(self.header_line()), header_area);
        f.render_widget(Paragraph::new(self.footer_line()).alignment(Alignment::Right), footer_area);

        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        let page_rows = self.view.page_rows();
        if page_rows.is_empty() {
            let empty = Paragraph::new(EMPTY_TABLE)
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, table_area);
            return;
        }

        let sort = self.view.sort_state();
        let columns = self.view.columns();

        let header_cells = std::iter::once(Cell::from("")).chain(columns.iter().enumerate().map(|(index, column)| {
            let arrow = match sort {
                Some(state) if state.key == column.key => format!(" {}", state.direction.arrow()),
                _ => String::new(),
            };
            let mut style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
            if index == self.focused_column && self.focused {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Cell::from(format!("{}{}", column.header, arrow)).style(style)
        }));
        let header = TableRow::new(header_cells).height(1);

        let rows: Vec<TableRow> = page_rows
            .iter()
            .map(|record| {
                let mark = if self.view.is_selected(record.id()) { "[x]" } else { "[ ]" };
                let cells = std::iter::once(Cell::from(mark))
                    .chain(columns.iter().map(|column| Cell::from(cell_span(column.cell(record, &self.format)))));
                TableRow::new(cells)
            })
            .collect();

        let widths: Vec<Constraint> = std::iter::once(Constraint::Length(CHECKBOX_WIDTH))
            .chain(columns.iter().map(|column| match column.width {
                Some(width) => Constraint::Length(width),
                None => Constraint::Fill(1),
            }))
            .collect();

        let total_rows = rows.len();
        let cursor = self.cursor();
        let (content_area, scrollbar_area) = ScrollbarHelper::calculate_areas(table_area, total_rows, 1);
        self.scrollbar_helper
            .update_state(total_rows, cursor, Some(table_area.height.saturating_sub(3) as usize));

        let highlight = if self.focused {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default().bg(Color::DarkGray)
        };
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .row_highlight_style(highlight);

        f.render_stateful_widget(table, content_area, &mut self.table_state);
        self.scrollbar_helper.render(f, scrollbar_area);
    }

    fn captures_input(&self) -> bool {
        self.searching
    }
}
