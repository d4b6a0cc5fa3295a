//! Horizontally scrolling row of book covers.

use crate::books::Book;
use crate::constants::{
    CAROUSEL_EDGE_SLACK, CAROUSEL_SCROLL_STEP, CAROUSEL_SMOOTHING, COVER_GAP_COLUMNS, COVER_WIDTH_COLUMNS,
    EMPTY_CAROUSEL,
};
use crate::cover_colors::EdgeColorCache;
use crate::gesture::{CellScale, KeyboardNavigation, NavDirection, PointerEvent, PointerEventKind};
use crate::ui::components::book_cover_component::BookCoverComponent;
use crate::ui::core::{Action, Component, ScrollAnchor};
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

pub struct CarouselComponent {
    covers: Vec<BookCoverComponent>,
    scroll_offset: f32,
    scroll_target: f32,
    viewport_width: f32,
    can_scroll_left: bool,
    can_scroll_right: bool,
    captured: Option<usize>,
    focused_index: usize,
    keyboard: KeyboardNavigation,
    scale: CellScale,
    area: Rect,
}

impl CarouselComponent {
    pub fn new(scale: CellScale) -> Self {
        Self {
            covers: Vec::new(),
            scroll_offset: 0.0,
            scroll_target: 0.0,
            viewport_width: 0.0,
            can_scroll_left: false,
            can_scroll_right: false,
            captured: None,
            focused_index: 0,
            keyboard: KeyboardNavigation::new(),
            scale,
            area: Rect::default(),
        }
    }

    /// Replace the covers when the book list changes. Same ids in the same
    /// order keep the current covers and their animations.
    pub fn set_books(&mut self, books: &[Book]) {
        let unchanged = self.covers.len() == books.len()
            && self.covers.iter().zip(books).all(|(cover, book)| cover.book().id == book.id);
        if unchanged {
            return;
        }

        self.covers = books.iter().cloned().map(BookCoverComponent::new).collect();
        self.captured = None;
        self.focused_index = 0;
        self.scroll_offset = 0.0;
        self.scroll_target = 0.0;
        self.update_scroll_buttons();
    }

    pub fn covers(&self) -> &[BookCoverComponent] {
        &self.covers
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn scroll_target(&self) -> f32 {
        self.scroll_target
    }

    pub fn can_scroll_left(&self) -> bool {
        self.can_scroll_left
    }

    pub fn can_scroll_right(&self) -> bool {
        self.can_scroll_right
    }

    pub fn focused_index(&self) -> usize {
        self.focused_index
    }

    pub fn set_keyboard_enabled(&mut self, enabled: bool) {
        self.keyboard.set_enabled(enabled);
    }

    /// Width of the visible strip, in distance units
    pub fn set_viewport_width(&mut self, units: f32) {
        self.viewport_width = units.max(0.0);
        self.clamp_scroll();
        self.update_scroll_buttons();
    }

    fn slot_columns() -> u16 {
        COVER_WIDTH_COLUMNS + COVER_GAP_COLUMNS
    }

    fn slot_units(&self) -> f32 {
        self.scale.columns_to_units(Self::slot_columns())
    }

    fn content_width(&self) -> f32 {
        if self.covers.is_empty() {
            return 0.0;
        }
        self.covers.len() as f32 * self.slot_units() - self.scale.columns_to_units(COVER_GAP_COLUMNS)
    }

    pub fn max_scroll(&self) -> f32 {
        (self.content_width() - self.viewport_width).max(0.0)
    }

    fn clamp_scroll(&mut self) {
        let max = self.max_scroll();
        self.scroll_target = self.scroll_target.clamp(0.0, max);
        self.scroll_offset = self.scroll_offset.clamp(0.0, max);
    }

    /// Recompute edge flags from the current scroll position
    fn update_scroll_buttons(&mut self) {
        self.can_scroll_left = self.scroll_offset > 0.0;
        self.can_scroll_right = self.scroll_offset < self.max_scroll() - CAROUSEL_EDGE_SLACK;
    }

    /// Move the scroll position directly, as a wheel or drag would.
    pub fn scroll_to(&mut self, offset: f32) {
        self.scroll_offset = offset.clamp(0.0, self.max_scroll());
        self.scroll_target = self.scroll_offset;
        self.update_scroll_buttons();
    }

    /// Start a smooth scroll by `delta` units.
    pub fn nudge(&mut self, delta: f32) {
        self.scroll_target = (self.scroll_target + delta).clamp(0.0, self.max_scroll());
    }

    pub fn focus_next(&mut self) {
        if !self.covers.is_empty() {
            self.focused_index = (self.focused_index + 1) % self.covers.len();
            self.reveal_focused();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.covers.is_empty() {
            self.focused_index = (self.focused_index + self.covers.len() - 1) % self.covers.len();
            self.reveal_focused();
        }
    }

    fn reveal_focused(&mut self) {
        let start = self.focused_index as f32 * self.slot_units();
        let end = start + self.scale.columns_to_units(COVER_WIDTH_COLUMNS);
        if start < self.scroll_target {
            self.scroll_target = start;
        } else if end > self.scroll_target + self.viewport_width {
            self.scroll_target = end - self.viewport_width;
        }
        self.scroll_target = self.scroll_target.clamp(0.0, self.max_scroll());
    }

    /// Arrow keys nudge, Tab moves focus. Returns whether the key was used.
    pub fn handle_nav_key(&mut self, key: &KeyEvent) -> bool {
        if !self.keyboard.is_enabled() {
            return false;
        }
        match self.keyboard.handle_key(key) {
            Some(NavDirection::Left) => {
                self.nudge(-CAROUSEL_SCROLL_STEP);
                return true;
            }
            Some(NavDirection::Right) => {
                self.nudge(CAROUSEL_SCROLL_STEP);
                return true;
            }
            _ => {}
        }
        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                true
            }
            KeyCode::BackTab => {
                self.focus_previous();
                true
            }
            _ => false,
        }
    }

    /// Same as an up-swipe on the focused cover
    pub fn select_focused<R: Rng + ?Sized>(
        &mut self,
        now: Instant,
        scroll: &mut dyn ScrollAnchor,
        rng: &mut R,
    ) -> Action {
        match self.covers.get_mut(self.focused_index) {
            Some(cover) => cover.select(now, scroll, rng),
            None => Action::None,
        }
    }

    /// Route a pointer event. The cover that received the down keeps the
    /// gesture until it ends, wherever the pointer goes.
    pub fn handle_pointer<R: Rng + ?Sized>(
        &mut self,
        event: &PointerEvent,
        now: Instant,
        scroll: &mut dyn ScrollAnchor,
        rng: &mut R,
    ) -> Action {
        match event.kind {
            PointerEventKind::Down => {
                let column = (event.point.x / self.scale.unit_width) as u16;
                let row = (event.point.y / self.scale.unit_height) as u16;

                if self.hit_nudge_left(column, row) {
                    self.nudge(-CAROUSEL_SCROLL_STEP);
                    return Action::None;
                }
                if self.hit_nudge_right(column, row) {
                    self.nudge(CAROUSEL_SCROLL_STEP);
                    return Action::None;
                }

                let hit = self
                    .cover_slots(self.area)
                    .into_iter()
                    .find(|(_, rect)| rect_contains(*rect, column, row))
                    .map(|(index, _)| index);

                match hit {
                    Some(index) => {
                        self.captured = Some(index);
                        self.focused_index = index;
                        self.covers[index].handle_pointer(event, now, scroll, rng)
                    }
                    None => Action::None,
                }
            }
            PointerEventKind::Move => match self.captured {
                Some(index) => match self.covers.get_mut(index) {
                    Some(cover) => cover.handle_pointer(event, now, scroll, rng),
                    None => Action::None,
                },
                None => Action::None,
            },
            PointerEventKind::Up | PointerEventKind::Leave => match self.captured.take() {
                Some(index) => match self.covers.get_mut(index) {
                    Some(cover) => cover.handle_pointer(event, now, scroll, rng),
                    None => Action::None,
                },
                None => Action::None,
            },
        }
    }

    pub fn has_capture(&self) -> bool {
        self.captured.is_some()
    }

    fn content_area(area: Rect) -> Rect {
        Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: area.height.saturating_sub(1),
        }
    }

    fn hit_nudge_left(&self, column: u16, row: u16) -> bool {
        self.can_scroll_left && column == self.area.x && row >= self.area.y && row < self.area.bottom()
    }

    fn hit_nudge_right(&self, column: u16, row: u16) -> bool {
        self.can_scroll_right
            && self.area.width > 0
            && column == self.area.right() - 1
            && row >= self.area.y
            && row < self.area.bottom()
    }

    /// Fully visible cover slots at the current scroll position
    fn cover_slots(&self, area: Rect) -> Vec<(usize, Rect)> {
        let content = Self::content_area(area);
        let scroll_columns = self.scale.units_to_columns(self.scroll_offset).max(0) as i32;

        self.covers
            .iter()
            .enumerate()
            .filter_map(|(index, _)| {
                let x = content.x as i32 + (index as i32 * Self::slot_columns() as i32) - scroll_columns;
                let right = x + COVER_WIDTH_COLUMNS as i32;
                if x < content.x as i32 || right > content.right() as i32 {
                    return None;
                }
                Some((
                    index,
                    Rect {
                        x: x as u16,
                        y: content.y,
                        width: COVER_WIDTH_COLUMNS,
                        height: content.height,
                    },
                ))
            })
            .collect()
    }

    /// Record where the carousel sits on screen, for hit testing and the viewport width.
    pub fn layout(&mut self, area: Rect) {
        self.area = area;
        let content = Self::content_area(area);
        self.set_viewport_width(self.scale.columns_to_units(content.width));
    }

    pub fn render_with_colors(&mut self, f: &mut Frame, area: Rect, colors: &EdgeColorCache) {
        self.layout(area);
        let content = Self::content_area(area);

        if self.covers.is_empty() {
            let empty = Paragraph::new(EMPTY_CAROUSEL)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(empty, content);
            return;
        }

        for (index, slot) in self.cover_slots(area) {
            let cover = &self.covers[index];
            let tint = colors.get(&cover.book().cover_ref);
            cover.render(f, slot, index == self.focused_index, tint, self.scale);
        }

        let arrow_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let arrow_row = area.y + area.height / 2;
        if self.can_scroll_left {
            f.render_widget(
                Paragraph::new("◀").style(arrow_style),
                Rect::new(area.x, arrow_row, 1, 1),
            );
        }
        if self.can_scroll_right && area.width > 0 {
            f.render_widget(
                Paragraph::new("▶").style(arrow_style),
                Rect::new(area.right() - 1, arrow_row, 1, 1),
            );
        }
    }
}

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

impl Component for CarouselComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_nav_key(&key);
        Action::None
    }

    /// Ease toward the scroll target and finish cover animations
    fn tick(&mut self, now: Instant) -> Action {
        let remaining = self.scroll_target - self.scroll_offset;
        if remaining.abs() > f32::EPSILON {
            let step = if remaining.abs() < 1.0 {
                remaining
            } else {
                remaining * CAROUSEL_SMOOTHING
            };
            self.scroll_offset = (self.scroll_offset + step).clamp(0.0, self.max_scroll());
            self.update_scroll_buttons();
        }

        for cover in &mut self.covers {
            cover.tick(now);
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.render_with_colors(f, rect, &EdgeColorCache::new());
    }
}
