use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Maps arrow keys to directional navigation.
///
/// Disabled while an overlay that consumes typed input is open.
#[derive(Debug, Clone)]
pub struct KeyboardNavigation {
    enabled: bool,
}

impl Default for KeyboardNavigation {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardNavigation {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn handle_key(&self, key: &KeyEvent) -> Option<NavDirection> {
        if !self.enabled || key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Left => Some(NavDirection::Left),
            KeyCode::Right => Some(NavDirection::Right),
            KeyCode::Up => Some(NavDirection::Up),
            KeyCode::Down => Some(NavDirection::Down),
            _ => None,
        }
    }
}
