use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::time::Duration;

/// Polls crossterm without blocking the runtime, yielding a tick when idle
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(100), // 10 Hz for application ticks
        }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(match crossterm::event::read()? {
                // Windows reports both press and release
                Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
                Event::Mouse(mouse) => EventType::Mouse(mouse),
                Event::Resize(w, h) => EventType::Resize(w, h),
                _ => EventType::Other,
            });
        }

        // If no immediate event, wait a bit and return tick
        tokio::time::sleep(self.tick_rate).await;
        Ok(EventType::Tick)
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
