//! Lifecycle shared by the swipeable controls.

use std::time::{Duration, Instant};

/// A control owns one gesture session at a time. While `Animating`, new
/// pointer-downs are rejected until [`ControlPhase::finish`] sees the deadline pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlPhase {
    #[default]
    Idle,
    Dragging,
    Animating {
        until: Instant,
    },
}

impl ControlPhase {
    pub fn animate(now: Instant, duration: Duration) -> Self {
        ControlPhase::Animating { until: now + duration }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, ControlPhase::Animating { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, ControlPhase::Dragging)
    }

    /// Returns `true` exactly when an animation has run out at `now`.
    pub fn finish(&mut self, now: Instant) -> bool {
        match *self {
            ControlPhase::Animating { until } if now >= until => {
                *self = ControlPhase::Idle;
                true
            }
            _ => false,
        }
    }
}
