//! Modal dialog component.
//!
//! Hosts every modal the console shows: delete confirmation, the filter
//! picker, help, logs, and info/error messages. While a dialog is visible it
//! receives every key.

use crate::logger::Logger;
use crate::ui::components::dialogs::{system_dialogs, FilterPicker, ScrollBehavior};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, style::Color, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    filter_picker: Option<FilterPicker>,
    scroll: ScrollBehavior,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            filter_picker: None,
            scroll: ScrollBehavior::default(),
            logger: None,
        }
    }

    /// Source for the logs dialog
    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn handle_submit(&mut self) -> Action {
        match self.dialog_type.take() {
            Some(DialogType::DeleteConfirmation { kind, ids }) => {
                self.clear_dialog();
                Action::DeleteRecords { kind, ids }
            }
            other => {
                self.dialog_type = other;
                Action::None
            }
        }
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.filter_picker = None;
        self.scroll.reset();
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::Info(_)) | Some(DialogType::Error(_)) => {
                if self.scroll.handle_key(key.code) {
                    Action::None
                } else {
                    // Any other key dismisses the dialog
                    Action::HideDialog
                }
            }
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                code => {
                    self.scroll.handle_key(code);
                    Action::None
                }
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                code => {
                    self.scroll.handle_key(code);
                    Action::None
                }
            },
            Some(DialogType::DeleteConfirmation { .. }) => match key.code {
                KeyCode::Esc | KeyCode::Char('n') => Action::HideDialog,
                KeyCode::Enter | KeyCode::Char('y') => self.handle_submit(),
                _ => Action::None,
            },
            Some(DialogType::Filters { .. }) => match self.filter_picker.as_mut() {
                Some(picker) => picker.handle_key(key),
                None => Action::HideDialog,
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.scroll.reset();
                self.filter_picker = match &dialog_type {
                    DialogType::Filters { descriptors, active } => {
                        Some(FilterPicker::new(descriptors.clone(), active.clone()))
                    }
                    _ => None,
                };
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = &self.dialog_type else {
            return;
        };
        match dialog_type {
            DialogType::DeleteConfirmation { kind, ids } => {
                system_dialogs::render_delete_confirmation_dialog(f, rect, kind.noun(), ids.len());
            }
            DialogType::Filters { .. } => {
                if let Some(picker) = &self.filter_picker {
                    picker.render(f, rect);
                }
            }
            DialogType::Info(message) => {
                system_dialogs::render_message_dialog(f, rect, "Info", Color::Blue, message, &mut self.scroll);
            }
            DialogType::Error(message) => {
                system_dialogs::render_message_dialog(f, rect, "Error", Color::Red, message, &mut self.scroll);
            }
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, &mut self.scroll),
            DialogType::Logs => {
                let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
                system_dialogs::render_logs_dialog(f, rect, &logs, &mut self.scroll);
            }
        }
    }

    fn captures_input(&self) -> bool {
        self.is_visible()
    }
}
