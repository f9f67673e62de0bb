//! Create/update form.
//!
//! Owns a [`FormState`] and every key while open (except the global quit
//! chord). `Enter` asks the app to validate and save; `Esc` cancels.

use crate::forms::{FieldKind, FormState};
use crate::ui::components::dialogs::common::{
    create_input_paragraph, create_instructions_paragraph, create_selection_paragraph, shortcuts,
};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

/// Lines taken by one bordered input field
const FIELD_HEIGHT: u16 = 3;

pub struct FormComponent {
    state: FormState,
    error: Option<String>,
    saving: bool,
}

impl FormComponent {
    pub fn new(state: FormState) -> Self {
        Self {
            state,
            error: None,
            saving: false,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
        self.saving = false;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_saving(&mut self, saving: bool) {
        self.saving = saving;
        if saving {
            self.error = None;
        }
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    fn title(&self) -> String {
        match self.state.editing_id() {
            Some(id) => format!(" Edit {} {} ", self.state.kind.noun(), id),
            None => format!(" New {} ", self.state.kind.noun()),
        }
    }
}

impl Component for FormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.saving {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => Action::Back,
            KeyCode::Enter => Action::SubmitForm,
            KeyCode::Tab | KeyCode::Down => {
                self.state.focus_next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.focus_prev();
                Action::None
            }
            KeyCode::Left => {
                self.state.cycle_option(false);
                Action::None
            }
            KeyCode::Right => {
                self.state.cycle_option(true);
                Action::None
            }
            KeyCode::Backspace => {
                self.state.backspace();
                Action::None
            }
            KeyCode::Char(c) => {
                self.state.push_char(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.saving { Color::Yellow } else { Color::Cyan };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(self.title())
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        // Two lines at the bottom: status/error and instructions
        let fields_height = inner.height.saturating_sub(2);
        let per_screen = (fields_height / FIELD_HEIGHT).max(1) as usize;
        let focus = self.state.focus();
        let first = focus.saturating_sub(per_screen - 1);

        for (slot, (index, field)) in self
            .state
            .fields()
            .iter()
            .enumerate()
            .skip(first)
            .take(per_screen)
            .enumerate()
        {
            let area = Rect::new(inner.x, inner.y + slot as u16 * FIELD_HEIGHT, inner.width, FIELD_HEIGHT);
            if area.bottom() > inner.y + fields_height {
                break;
            }
            let label = if field.required {
                format!("{} *", field.label)
            } else {
                field.label.clone()
            };
            let focused = index == focus;
            let paragraph = match field.kind {
                FieldKind::Select(_) => create_selection_paragraph(self.state.input(index), &label, focused),
                _ => create_input_paragraph(self.state.input(index), &label, focused),
            };
            f.render_widget(paragraph, area);
        }

        let status_area = Rect::new(inner.x, inner.y + fields_height, inner.width, 1.min(inner.height));
        let status = if self.saving {
            Line::styled(crate::constants::INFO_SAVING, Style::default().fg(Color::Yellow))
        } else if let Some(error) = &self.error {
            Line::styled(error.clone(), Style::default().fg(Color::Red))
        } else {
            Line::from("")
        };
        f.render_widget(Paragraph::new(status), status_area);

        if inner.height >= 2 {
            let instructions_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
            f.render_widget(
                create_instructions_paragraph(&[
                    shortcuts::ENTER_SAVE,
                    shortcuts::SEPARATOR,
                    shortcuts::TAB_NEXT,
                    shortcuts::SEPARATOR,
                    shortcuts::ARROWS_CYCLE,
                    shortcuts::SEPARATOR,
                    shortcuts::ESC_CANCEL,
                ]),
                instructions_area,
            );
        }
    }

    fn captures_input(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormField;
    use crate::model::EntityKind;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn form() -> FormComponent {
        FormComponent::new(FormState::create(
            EntityKind::Manufacturer,
            vec![FormField::text("name", "Name").required(), FormField::text("country", "Country")],
        ))
    }

    #[test]
    fn typing_fills_focused_field() {
        let mut form = form();
        for c in "Bosch".chars() {
            form.handle_key_events(key(KeyCode::Char(c)));
        }
        form.handle_key_events(key(KeyCode::Tab));
        form.handle_key_events(key(KeyCode::Char('q')));
        assert_eq!(form.state().value_of("name"), Some("Bosch"));
        assert_eq!(form.state().value_of("country"), Some("q"));
    }

    #[test]
    fn enter_submits_and_escape_cancels() {
        let mut form = form();
        assert!(matches!(form.handle_key_events(key(KeyCode::Enter)), Action::SubmitForm));
        assert!(matches!(form.handle_key_events(key(KeyCode::Esc)), Action::Back));
    }

    #[test]
    fn keys_are_ignored_while_saving() {
        let mut form = form();
        form.set_saving(true);
        assert!(matches!(form.handle_key_events(key(KeyCode::Enter)), Action::None));
        form.handle_key_events(key(KeyCode::Char('x')));
        assert_eq!(form.state().value_of("name"), Some(""));
    }
}
