//! Record detail view, or a not-found screen for unknown ids.

use crate::constants::NOT_FOUND_TITLE;
use crate::entities::EntityConfig;
use crate::model::{Record, Value};
use crate::routes::Route;
use crate::table::CellFormat;
use crate::ui::components::badge::cell_span;
use crate::ui::components::dialogs::ScrollBehavior;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::utils::format::truncate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct DetailComponent {
    config: EntityConfig,
    id: String,
    record: Option<Record>,
    format: CellFormat,
    truncate_width: usize,
    scroll: ScrollBehavior,
}

impl DetailComponent {
    /// `record` is `None` when the id is unknown; the view then renders
    /// the not-found screen.
    pub fn new(
        config: EntityConfig,
        id: String,
        record: Option<Record>,
        format: CellFormat,
        truncate_width: usize,
    ) -> Self {
        Self {
            config,
            id,
            record,
            format,
            truncate_width,
            scroll: ScrollBehavior::default(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.record.is_none()
    }

    pub fn record(&self) -> Option<&Record> {
        self.record.as_ref()
    }

    /// Label/value lines: configured columns first, then any other field
    fn field_lines(&self, record: &Record) -> Vec<Line<'static>> {
        let label_width = self
            .config
            .columns
            .iter()
            .map(|c| c.header.chars().count())
            .chain(record.fields().map(|(k, _)| k.chars().count()))
            .max()
            .unwrap_or(0);
        let label_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

        let mut lines: Vec<Line<'static>> = self
            .config
            .columns
            .iter()
            .map(|column| {
                Line::from(vec![
                    Span::styled(format!("{:<label_width$}  ", column.header), label_style),
                    cell_span(column.cell(record, &self.format)),
                ])
            })
            .collect();

        for (key, value) in record.fields() {
            if self.config.columns.iter().any(|c| c.key == key) || matches!(value, Value::Null) {
                continue;
            }
            lines.push(Line::from(vec![
                Span::styled(format!("{key:<label_width$}  "), label_style),
                Span::raw(truncate(&value.to_string(), self.truncate_width)),
            ]));
        }
        lines
    }

    fn render_not_found(&self, f: &mut Frame, rect: Rect) {
        let route = Route::Detail(self.config.kind, self.id.clone());
        let text = vec![
            Line::from(Span::styled(
                NOT_FOUND_TITLE,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("No {} with id '{}' ({route})", self.config.kind.noun(), self.id)),
            Line::from(""),
            Line::from(Span::styled("Press Esc to go back", Style::default().fg(Color::Gray))),
        ];
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Red)),
            );
        f.render_widget(paragraph, rect);
    }
}

impl Component for DetailComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => Action::Back,
            KeyCode::Char('e') if self.record.is_some() => {
                Action::Navigate(Route::Update(self.config.kind, self.id.clone()))
            }
            KeyCode::Char('d') if self.record.is_some() => Action::ShowDialog(DialogType::DeleteConfirmation {
                kind: self.config.kind,
                ids: vec![self.id.clone()],
            }),
            code => {
                self.scroll.handle_key(code);
                Action::None
            }
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(record) = &self.record else {
            self.render_not_found(f, rect);
            return;
        };

        let heading = match record.text(self.config.title_key) {
            title if title.is_empty() => self.id.clone(),
            title => format!("{title} ({})", self.id),
        };
        let lines = self.field_lines(record);
        let max_scroll = lines.len().saturating_sub(rect.height.saturating_sub(2) as usize);
        let offset = self.scroll.offset.min(max_scroll) as u16;

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" {} ", heading))
                    .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(paragraph, rect);
    }
}
