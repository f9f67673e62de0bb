use ratatui::widgets::ScrollbarState;

/// Lines moved by PageUp/PageDown
const PAGE_STEP: usize = 10;

/// Scroll offset of a dialog body plus the scrollbar tracking it.
///
/// The offset may run past the content; renderers clamp it against the
/// visible height, so `to_bottom` simply saturates.
#[derive(Debug, Clone, Default)]
pub struct ScrollBehavior {
    pub offset: usize,
    pub scrollbar: ScrollbarState,
}

impl ScrollBehavior {
    pub fn up(&mut self) {
        self.set(self.offset.saturating_sub(1));
    }

    pub fn down(&mut self) {
        self.set(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.set(self.offset.saturating_sub(PAGE_STEP));
    }

    pub fn page_down(&mut self) {
        self.set(self.offset.saturating_add(PAGE_STEP));
    }

    pub fn to_top(&mut self) {
        self.set(0);
    }

    pub fn to_bottom(&mut self) {
        self.set(usize::MAX);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.scrollbar = self.scrollbar.position(offset);
    }

    /// Handle the shared scrolling keys; returns whether the key was used
    pub fn handle_key(&mut self, code: crossterm::event::KeyCode) -> bool {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.up(),
            KeyCode::Down | KeyCode::Char('j') => self.down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Home => self.to_top(),
            KeyCode::End => self.to_bottom(),
            _ => return false,
        }
        true
    }
}
