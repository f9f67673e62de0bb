//! KPI dashboard: a grid of cards, each linking to an entity list.

use crate::kpi::Kpi;
use crate::routes::Route;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

const CARD_HEIGHT: u16 = 5;
const CARD_MIN_WIDTH: u16 = 24;

pub struct DashboardComponent {
    kpis: Vec<Kpi>,
    cursor: usize,
    columns: usize,
    pub focused: bool,
}

impl Default for DashboardComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self {
            kpis: Vec::new(),
            cursor: 0,
            columns: 3,
            focused: true,
        }
    }

    pub fn set_kpis(&mut self, kpis: Vec<Kpi>) {
        self.kpis = kpis;
        self.cursor = self.cursor.min(self.kpis.len().saturating_sub(1));
    }

    pub fn kpis(&self) -> &[Kpi] {
        &self.kpis
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn step(&mut self, delta: isize) {
        if self.kpis.is_empty() {
            return;
        }
        let last = self.kpis.len() as isize - 1;
        self.cursor = (self.cursor as isize + delta).clamp(0, last) as usize;
    }
}

impl Component for DashboardComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.focused {
            return Action::None;
        }
        let columns = self.columns.max(1) as isize;
        match key.code {
            KeyCode::Char('l') | KeyCode::Right => self.step(1),
            KeyCode::Char('h') | KeyCode::Left => self.step(-1),
            KeyCode::Char('j') | KeyCode::Down => self.step(columns),
            KeyCode::Char('k') | KeyCode::Up => self.step(-columns),
            KeyCode::Enter => {
                return self
                    .kpis
                    .get(self.cursor)
                    .map_or(Action::None, |kpi| Action::Navigate(Route::List(kpi.entity)));
            }
            _ => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.columns = (rect.width / CARD_MIN_WIDTH).clamp(1, 4) as usize;
        let cards = LayoutManager::card_grid(rect, self.kpis.len(), self.columns as u16, CARD_HEIGHT);

        for (index, (kpi, area)) in self.kpis.iter().zip(cards).enumerate() {
            let selected = self.focused && index == self.cursor;
            let border_color = if selected { Color::Cyan } else { Color::DarkGray };
            let text = vec![
                Line::from(Span::styled(
                    kpi.value.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("→ {}", kpi.entity.title()),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            let card = Paragraph::new(text).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" {} ", kpi.label))
                    .title_style(Style::default().fg(Color::Yellow))
                    .border_style(Style::default().fg(border_color)),
            );
            f.render_widget(card, area);
        }
    }
}
