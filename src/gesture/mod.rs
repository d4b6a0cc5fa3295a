//! Platform-agnostic swipe recognition.
//!
//! Raw pointer input (mouse drags from the terminal, or touch streams from any
//! other host) is normalized into [`input::PointerEvent`]s and fed to a
//! [`SwipeRecognizer`]. The recognizer keeps a running [`GestureState`] while a
//! session is active and classifies the final delta into at most one
//! [`SwipeDirection`] when the session ends.
//!
//! # Module Components
//!
//! - [`input`] - Pointer sources and conversion from terminal mouse events
//! - [`keyboard`] - Arrow-key navigation binding

pub mod input;
pub mod keyboard;

pub use input::{from_mouse_event, CellScale, PointerEvent, PointerEventKind, PointerSource};
pub use keyboard::{KeyboardNavigation, NavDirection};

use crate::constants::DEFAULT_SWIPE_THRESHOLD;

/// A position in gesture distance units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Offset of the current pointer position from the gesture origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    pub dx: f32,
    pub dy: f32,
}

impl Delta {
    /// Classify by dominant axis. Equal magnitudes yield [`SwipeDirection::None`].
    pub fn direction(&self) -> SwipeDirection {
        let abs_x = self.dx.abs();
        let abs_y = self.dy.abs();

        if abs_x > abs_y {
            if self.dx > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            }
        } else if abs_y > abs_x {
            if self.dy > 0.0 {
                SwipeDirection::Down
            } else {
                SwipeDirection::Up
            }
        } else {
            SwipeDirection::None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
    #[default]
    None,
}

/// Running state of a single gesture session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    pub origin: Option<Point>,
    pub delta: Delta,
    pub direction: SwipeDirection,
    pub is_active: bool,
}

/// What a pointer event did to the recognizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureUpdate {
    /// The event was outside an active session (or a hover move) and changed nothing.
    Ignored,
    Started,
    Moved(GestureState),
    /// The session ended; carries the committed direction, if any.
    Ended(Option<SwipeDirection>),
}

/// Turns a start/move/end point stream into a classified swipe.
///
/// One recognizer owns exactly one session at a time: a second `start`
/// restarts from the new origin.
#[derive(Debug, Clone)]
pub struct SwipeRecognizer {
    threshold: f32,
    state: GestureState,
    mouse_down: bool,
}

impl Default for SwipeRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeRecognizer {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            state: GestureState::default(),
            mouse_down: false,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active
    }

    /// Route a normalized pointer event to `start`, `move_to` or `end`.
    ///
    /// Mouse moves only count while the mouse button that opened the session
    /// is held, so hovering never reads as a drag. Leave behaves like up.
    pub fn handle(&mut self, event: &PointerEvent) -> GestureUpdate {
        match event.kind {
            PointerEventKind::Down => {
                self.start(event.point);
                if event.source == PointerSource::Mouse {
                    self.mouse_down = true;
                }
                GestureUpdate::Started
            }
            PointerEventKind::Move => {
                if event.source == PointerSource::Mouse && !self.mouse_down {
                    return GestureUpdate::Ignored;
                }
                match self.move_to(event.point) {
                    Some(state) => GestureUpdate::Moved(state),
                    None => GestureUpdate::Ignored,
                }
            }
            PointerEventKind::Up | PointerEventKind::Leave => {
                if !self.state.is_active {
                    return GestureUpdate::Ignored;
                }
                GestureUpdate::Ended(self.end())
            }
        }
    }

    /// Open a session at `point`, discarding any previous delta and button state.
    pub fn start(&mut self, point: Point) {
        self.mouse_down = false;
        self.state = GestureState {
            origin: Some(point),
            delta: Delta::default(),
            direction: SwipeDirection::None,
            is_active: true,
        };
    }

    /// Update the running delta. Returns the new state for live drag visuals,
    /// or `None` when no session is active.
    pub fn move_to(&mut self, point: Point) -> Option<GestureState> {
        if !self.state.is_active {
            return None;
        }
        let origin = self.state.origin?;

        let delta = Delta {
            dx: point.x - origin.x,
            dy: point.y - origin.y,
        };
        self.state.delta = delta;
        self.state.direction = delta.direction();
        Some(self.state)
    }

    /// Close the session and return the committed direction, if the dominant
    /// axis reached the threshold. State is always reset afterward.
    pub fn end(&mut self) -> Option<SwipeDirection> {
        if !self.state.is_active {
            return None;
        }

        let Delta { dx, dy } = self.state.delta;
        let abs_x = dx.abs();
        let abs_y = dy.abs();

        let committed = if abs_x >= self.threshold && abs_x > abs_y {
            Some(if dx > 0.0 { SwipeDirection::Right } else { SwipeDirection::Left })
        } else if abs_y >= self.threshold && abs_y > abs_x {
            Some(if dy > 0.0 { SwipeDirection::Down } else { SwipeDirection::Up })
        } else {
            None
        };

        self.reset();
        committed
    }

    pub fn reset(&mut self) {
        self.state = GestureState::default();
        self.mouse_down = false;
    }
}
