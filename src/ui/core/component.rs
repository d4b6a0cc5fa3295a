use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use std::time::Instant;

pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn update(&mut self, action: Action) -> Action {
        // Default implementation passes action through
        action
    }

    /// Advance timers and animations.
    fn tick(&mut self, _now: Instant) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);
}

/// Scroll position of the saved-quotes list, as seen by controls that need the
/// newest entry to be visible after they add one.
pub trait ScrollAnchor {
    fn is_at_top(&self) -> bool;
    fn scroll_to_top(&mut self);
}
