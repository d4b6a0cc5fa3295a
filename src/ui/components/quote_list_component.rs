//! The saved-quotes list: cards, header controls and scroll position.

use crate::constants::{
    EMPTY_QUOTES_HINT, EMPTY_QUOTES_TITLE, FONT_SIZE_DEFAULT, FONT_SIZE_MAX, FONT_SIZE_MIN, HEADER_YOUR_QUOTES,
    INFO_NOTHING_TO_EXPORT, SCROLL_TO_TOP_THRESHOLD_ROWS,
};
use crate::cover_colors::EdgeColorCache;
use crate::gesture::{CellScale, KeyboardNavigation, NavDirection, PointerEvent, PointerEventKind};
use crate::quotes::SavedQuote;
use crate::ui::components::quote_card_component::QuoteCardComponent;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{Action, Component, DialogType, ScrollAnchor};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};
use std::collections::HashMap;
use std::time::Instant;

const CARD_GAP_ROWS: u16 = 1;
const SCROLL_TO_TOP_LABEL: &str = " ↑ Top ";
const CLEAR_ALL_LABEL: &str = "[Clear all]";
const EXPORT_LABEL: &str = "[Export]";

/// A card's vertical extent in content rows
#[derive(Debug, Clone, Copy)]
struct CardSlot {
    index: usize,
    top: u16,
    height: u16,
}

pub struct QuoteListComponent {
    cards: Vec<QuoteCardComponent>,
    font_size: u8,
    scroll_offset: usize,
    keyboard: KeyboardNavigation,
    scrollbar: ScrollbarHelper,
    scale: CellScale,
    captured: Option<usize>,

    // Layout from the last render
    list_area: Rect,
    slots: Vec<CardSlot>,
    content_rows: usize,
    slider_area: Rect,
    clear_area: Option<Rect>,
    export_area: Option<Rect>,
    scroll_top_area: Option<Rect>,
}

impl QuoteListComponent {
    pub fn new(scale: CellScale) -> Self {
        Self {
            cards: Vec::new(),
            font_size: FONT_SIZE_DEFAULT,
            scroll_offset: 0,
            keyboard: KeyboardNavigation::new(),
            scrollbar: ScrollbarHelper::new(),
            scale,
            captured: None,
            list_area: Rect::default(),
            slots: Vec::new(),
            content_rows: 0,
            slider_area: Rect::default(),
            clear_area: None,
            export_area: None,
            scroll_top_area: None,
        }
    }

    /// Sync with the saved-quotes snapshot. Cards keep their gesture and
    /// animation state across updates as long as their id survives.
    pub fn update_data(&mut self, quotes: &[SavedQuote], font_size: u8) {
        self.font_size = font_size;

        let captured_id = self
            .captured
            .take()
            .and_then(|index| self.cards.get(index))
            .map(|card| card.id().to_string());

        let mut existing: HashMap<String, QuoteCardComponent> = self
            .cards
            .drain(..)
            .filter(|card| !card.is_removed())
            .map(|card| (card.id().to_string(), card))
            .collect();

        self.cards = quotes
            .iter()
            .map(|quote| {
                existing
                    .remove(&quote.id)
                    .unwrap_or_else(|| QuoteCardComponent::new(quote.clone()))
            })
            .collect();

        self.captured = captured_id.and_then(|id| self.cards.iter().position(|card| card.id() == id));
        if self.list_area.height > 0 {
            self.layout(self.list_area);
        }
    }

    pub fn cards(&self) -> &[QuoteCardComponent] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn set_keyboard_enabled(&mut self, enabled: bool) {
        self.keyboard.set_enabled(enabled);
    }

    pub fn shows_scroll_to_top(&self) -> bool {
        self.scroll_offset > SCROLL_TO_TOP_THRESHOLD_ROWS
    }

    fn max_scroll(&self) -> usize {
        self.content_rows.saturating_sub(self.list_area.height as usize)
    }

    fn clamp_scroll(&mut self) {
        // Before the first layout there is nothing to clamp against
        if self.list_area.height > 0 {
            self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        }
    }

    pub fn scroll_by(&mut self, rows: i32) {
        let target = self.scroll_offset as i64 + rows as i64;
        self.scroll_offset = target.max(0) as usize;
        self.clamp_scroll();
    }

    /// Compute card positions inside `list_area`. One column stays free for the scrollbar.
    pub fn layout(&mut self, list_area: Rect) {
        self.list_area = list_area;
        let width = list_area.width.saturating_sub(1);
        let mut top = 0u16;
        self.slots = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| !card.is_removed())
            .map(|(index, card)| {
                let height = card.height(width);
                let slot = CardSlot { index, top, height };
                top = top.saturating_add(height + CARD_GAP_ROWS);
                slot
            })
            .collect();
        self.content_rows = top.saturating_sub(CARD_GAP_ROWS) as usize;
        self.clamp_scroll();
    }

    /// The first card that is at least partly visible
    pub fn topmost_visible(&self) -> Option<usize> {
        if self.slots.is_empty() {
            return self.cards.iter().position(|card| !card.is_removed());
        }
        self.slots
            .iter()
            .find(|slot| (slot.top + slot.height) as usize > self.scroll_offset)
            .map(|slot| slot.index)
    }

    pub fn delete_top_visible(&mut self, now: Instant) {
        if let Some(index) = self.topmost_visible() {
            self.cards[index].request_delete(now);
        }
    }

    fn font_size_action(&self, delta: i64) -> Action {
        Action::SetFontSize(self.font_size as i64 + delta)
    }

    fn export_action(&self) -> Action {
        if self.cards.is_empty() {
            Action::ShowStatus(INFO_NOTHING_TO_EXPORT.to_string())
        } else {
            Action::ShowDialog(DialogType::Export)
        }
    }

    /// Route a pointer event. Header controls act on pointer-down; a card that
    /// received the down keeps the rest of the gesture.
    pub fn handle_pointer(&mut self, event: &PointerEvent, now: Instant) -> Action {
        match event.kind {
            PointerEventKind::Down => {
                let column = (event.point.x / self.scale.unit_width) as u16;
                let row = (event.point.y / self.scale.unit_height) as u16;

                if rect_contains(self.slider_area, column, row) {
                    let step = (column - self.slider_area.x) / 2;
                    return Action::SetFontSize(FONT_SIZE_MIN as i64 + step as i64);
                }
                if self.clear_area.is_some_and(|area| rect_contains(area, column, row)) {
                    return Action::ClearAll;
                }
                if self.export_area.is_some_and(|area| rect_contains(area, column, row)) {
                    return self.export_action();
                }
                if self.scroll_top_area.is_some_and(|area| rect_contains(area, column, row)) {
                    self.scroll_to_top();
                    return Action::None;
                }
                if !rect_contains(self.list_area, column, row) {
                    return Action::None;
                }

                let content_row = (row - self.list_area.y) as usize + self.scroll_offset;
                let hit = self
                    .slots
                    .iter()
                    .find(|slot| content_row >= slot.top as usize && content_row < (slot.top + slot.height) as usize)
                    .map(|slot| slot.index);

                if let Some(index) = hit {
                    self.captured = Some(index);
                    self.cards[index].handle_pointer(event, now);
                }
                Action::None
            }
            PointerEventKind::Move => {
                if let Some(card) = self.captured.and_then(|index| self.cards.get_mut(index)) {
                    card.handle_pointer(event, now);
                }
                Action::None
            }
            PointerEventKind::Up | PointerEventKind::Leave => {
                if let Some(card) = self.captured.take().and_then(|index| self.cards.get_mut(index)) {
                    card.handle_pointer(event, now);
                }
                Action::None
            }
        }
    }

    pub fn has_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Finish delete animations, returning one [`Action::DeleteQuote`] per
    /// card that completed.
    pub fn finish_animations(&mut self, now: Instant) -> Vec<Action> {
        self.cards
            .iter_mut()
            .map(|card| card.tick(now))
            .filter(|action| !action.is_none())
            .collect()
    }

    pub fn render_with_colors(&mut self, f: &mut Frame, area: Rect, colors: &EdgeColorCache) {
        if area.height < 3 {
            return;
        }

        let header_area = Rect { height: 1, ..area };
        let list_area = Rect {
            y: area.y + 2,
            height: area.height - 2,
            ..area
        };
        self.render_header(f.buffer_mut(), header_area);
        self.layout(list_area);

        if self.cards.is_empty() {
            self.scroll_top_area = None;
            render_empty_state(f.buffer_mut(), list_area);
            return;
        }

        let (content_area, scrollbar_area) = ScrollbarHelper::calculate_areas(list_area, self.content_rows);
        self.scrollbar
            .update_state(self.content_rows, self.scroll_offset, list_area.height as usize);

        // Cards are drawn on a virtual canvas, then the visible window is copied out
        let card_width = list_area.width.saturating_sub(1);
        let canvas_height = (self.content_rows as u16).max(1);
        let mut canvas = Buffer::empty(Rect::new(0, 0, card_width, canvas_height));
        for slot in &self.slots {
            let card = &self.cards[slot.index];
            let rect = Rect::new(0, slot.top, card_width, slot.height);
            let background = colors.color_or_fallback(&card.quote().book.cover_ref);
            card.render(&mut canvas, rect, self.font_size, background, self.scale);
        }

        let buf = f.buffer_mut();
        for y in 0..content_area.height {
            let source_row = y as usize + self.scroll_offset;
            if source_row >= canvas_height as usize {
                break;
            }
            for x in 0..card_width.min(content_area.width) {
                if let Some(cell) = canvas.cell((x, source_row as u16)) {
                    let cell = cell.clone();
                    if let Some(target) = buf.cell_mut((content_area.x + x, content_area.y + y)) {
                        *target = cell;
                    }
                }
            }
        }

        self.scrollbar.render(buf, scrollbar_area);

        self.scroll_top_area = if self.shows_scroll_to_top() {
            let width = SCROLL_TO_TOP_LABEL.chars().count() as u16;
            let button = Rect {
                x: content_area.right().saturating_sub(width + 1),
                y: content_area.bottom().saturating_sub(1),
                width: width.min(content_area.width),
                height: 1,
            };
            Paragraph::new(SCROLL_TO_TOP_LABEL)
                .style(Style::default().bg(Color::Yellow).fg(Color::Black))
                .render(button, buf);
            Some(button)
        } else {
            None
        };
    }

    fn render_header(&mut self, buf: &mut Buffer, area: Rect) {
        let count = self.cards.len();
        let title = format!("{} ({})", HEADER_YOUR_QUOTES, count);
        Paragraph::new(Line::from(Span::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )))
        .render(area, buf);

        // Right-aligned controls: [font slider] [Export] [Clear all]
        let mut right = area.right();

        self.clear_area = if count > 0 {
            let width = CLEAR_ALL_LABEL.chars().count() as u16;
            right = right.saturating_sub(width);
            let rect = Rect::new(right, area.y, width, 1);
            Paragraph::new(CLEAR_ALL_LABEL)
                .style(Style::default().fg(Color::Red))
                .render(rect, buf);
            right = right.saturating_sub(1);
            Some(rect)
        } else {
            None
        };

        self.export_area = if count > 0 {
            let width = EXPORT_LABEL.chars().count() as u16;
            right = right.saturating_sub(width);
            let rect = Rect::new(right, area.y, width, 1);
            Paragraph::new(EXPORT_LABEL)
                .style(Style::default().fg(Color::Green))
                .render(rect, buf);
            right = right.saturating_sub(1);
            Some(rect)
        } else {
            None
        };

        let label = format!(" {}px", self.font_size);
        let steps = (FONT_SIZE_MAX - FONT_SIZE_MIN + 1) as u16;
        let slider_width = steps * 2;
        let total = slider_width + label.chars().count() as u16 + 2;
        right = right.saturating_sub(total);
        if right <= area.x {
            self.slider_area = Rect::default();
            return;
        }

        let mut spans = vec![Span::styled("A ", Style::default().fg(Color::DarkGray))];
        for size in FONT_SIZE_MIN..=FONT_SIZE_MAX {
            let (symbol, style) = if size == self.font_size {
                ("● ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            } else if size < self.font_size {
                ("━ ", Style::default().fg(Color::Yellow))
            } else {
                ("─ ", Style::default().fg(Color::DarkGray))
            };
            spans.push(Span::styled(symbol, style));
        }
        spans.push(Span::styled(label, Style::default().fg(Color::Gray)));
        Paragraph::new(Line::from(spans)).render(Rect::new(right, area.y, total, 1), buf);

        self.slider_area = Rect::new(right + 2, area.y, slider_width, 1);
    }
}

fn render_empty_state(buf: &mut Buffer, area: Rect) {
    let top = area.y + area.height / 3;
    let rect = Rect {
        y: top,
        height: area.bottom().saturating_sub(top).min(3),
        ..area
    };
    Paragraph::new(vec![
        Line::from(Span::styled(
            EMPTY_QUOTES_TITLE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(EMPTY_QUOTES_HINT, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
    .render(rect, buf);
}

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

impl ScrollAnchor for QuoteListComponent {
    fn is_at_top(&self) -> bool {
        self.scroll_offset == 0
    }

    fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }
}

impl Component for QuoteListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.keyboard.is_enabled() {
            match self.keyboard.handle_key(&key) {
                Some(NavDirection::Up) => {
                    self.scroll_by(-1);
                    return Action::None;
                }
                Some(NavDirection::Down) => {
                    self.scroll_by(1);
                    return Action::None;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::PageUp => {
                self.scroll_by(-(self.list_area.height.max(1) as i32));
                Action::None
            }
            KeyCode::PageDown => {
                self.scroll_by(self.list_area.height.max(1) as i32);
                Action::None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.scroll_to_top();
                Action::None
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.font_size_action(1),
            KeyCode::Char('-') => self.font_size_action(-1),
            KeyCode::Char('C') if !self.cards.is_empty() => Action::ClearAll,
            KeyCode::Char('e') => self.export_action(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.render_with_colors(f, rect, &EdgeColorCache::new());
    }
}
