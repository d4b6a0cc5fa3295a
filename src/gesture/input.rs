//! Pointer input sources.
//!
//! Touch and mouse streams are reduced to the same [`PointerEvent`] shape before
//! they reach a recognizer. Terminal mouse events arrive in cell coordinates and
//! are scaled into gesture distance units with a [`CellScale`].

use super::Point;
use crate::constants::{DEFAULT_CELL_HEIGHT_UNITS, DEFAULT_CELL_WIDTH_UNITS};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub source: PointerSource,
    pub point: Point,
}

impl PointerEvent {
    pub fn mouse(kind: PointerEventKind, point: Point) -> Self {
        Self {
            kind,
            source: PointerSource::Mouse,
            point,
        }
    }

    pub fn touch(kind: PointerEventKind, point: Point) -> Self {
        Self {
            kind,
            source: PointerSource::Touch,
            point,
        }
    }

    /// Normalize a touch event carrying its active touch list. The first touch
    /// drives the gesture; a touch end usually has no touches left, so the last
    /// known point is used instead.
    pub fn from_touches(kind: PointerEventKind, touches: &[Point], last_point: Point) -> Option<Self> {
        match (kind, touches.first()) {
            (PointerEventKind::Down | PointerEventKind::Move, Some(point)) => Some(Self::touch(kind, *point)),
            (PointerEventKind::Down | PointerEventKind::Move, None) => None,
            (PointerEventKind::Up | PointerEventKind::Leave, first) => {
                Some(Self::touch(kind, first.copied().unwrap_or(last_point)))
            }
        }
    }
}

/// Size of one terminal cell in gesture distance units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellScale {
    pub unit_width: f32,
    pub unit_height: f32,
}

impl Default for CellScale {
    fn default() -> Self {
        Self {
            unit_width: DEFAULT_CELL_WIDTH_UNITS as f32,
            unit_height: DEFAULT_CELL_HEIGHT_UNITS as f32,
        }
    }
}

impl CellScale {
    pub fn new(unit_width: u16, unit_height: u16) -> Self {
        Self {
            unit_width: unit_width as f32,
            unit_height: unit_height as f32,
        }
    }

    /// Center of the cell at (`column`, `row`).
    pub fn to_point(&self, column: u16, row: u16) -> Point {
        Point::new(
            (column as f32 + 0.5) * self.unit_width,
            (row as f32 + 0.5) * self.unit_height,
        )
    }

    /// Convert a distance in units to whole terminal rows, rounding toward zero.
    pub fn units_to_rows(&self, units: f32) -> i32 {
        (units / self.unit_height) as i32
    }

    /// Convert a distance in units to whole terminal columns, rounding toward zero.
    pub fn units_to_columns(&self, units: f32) -> i32 {
        (units / self.unit_width) as i32
    }

    pub fn columns_to_units(&self, columns: u16) -> f32 {
        columns as f32 * self.unit_width
    }
}

/// Convert a terminal mouse event into a pointer event.
///
/// Only the left button drives gestures. Plain `Moved` events (no button held)
/// still come through as moves so the recognizer can reject them as hover.
pub fn from_mouse_event(mouse: &MouseEvent, scale: CellScale) -> Option<PointerEvent> {
    let kind = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerEventKind::Down,
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => PointerEventKind::Move,
        MouseEventKind::Up(MouseButton::Left) => PointerEventKind::Up,
        _ => return None,
    };
    Some(PointerEvent::mouse(kind, scale.to_point(mouse.column, mouse.row)))
}
