use crate::constants::{MIN_FRAME_INTERVAL, TICK_RATE};
use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::time::{Duration, Instant};

pub struct EventHandler {
    tick_rate: Duration,
    last_render_time: Instant,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_tick_rate(TICK_RATE)
    }

    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_render_time: Instant::now(),
        }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
                Event::Mouse(mouse) => EventType::Mouse(mouse),
                Event::Resize(w, h) => EventType::Resize(w, h),
                Event::FocusLost => EventType::FocusLost,
                _ => EventType::Other,
            });
        }

        // Animations need a steady tick while nothing else is happening
        tokio::time::sleep(self.tick_rate).await;
        Ok(EventType::Tick)
    }

    pub fn mark_rendered(&mut self) {
        self.last_render_time = Instant::now();
    }

    /// Get the time since last render for frame timing
    pub fn time_since_last_render(&self) -> Duration {
        self.last_render_time.elapsed()
    }

    /// Whether enough time has passed since the last frame to draw another
    pub fn should_render(&self) -> bool {
        self.time_since_last_render() >= MIN_FRAME_INTERVAL
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    FocusLost,
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
