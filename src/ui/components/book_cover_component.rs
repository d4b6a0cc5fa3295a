//! A book cover in the carousel that saves a random quote when swiped up.

use crate::books::Book;
use crate::constants::{
    COMMIT_ANIMATION, COVER_COMMIT_OFFSET, COVER_INDICATOR_OFFSET, COVER_MAX_DRAG_OFFSET, COVER_SWIPE_THRESHOLD,
    SWIPE_UP_INDICATOR,
};
use crate::gesture::{CellScale, GestureUpdate, PointerEvent, SwipeDirection, SwipeRecognizer};
use crate::quotes::BookSummary;
use crate::ui::components::swipe_control::ControlPhase;
use crate::ui::core::{Action, ScrollAnchor};
use crate::utils::color::{contrast_text_color, Rgb};
use log::debug;
use rand::Rng;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

/// Pick one quote uniformly at random. Books without quotes, or a pick that is
/// blank after trimming, yield `None`.
pub fn pick_quote<R: Rng + ?Sized>(book: &Book, rng: &mut R) -> Option<String> {
    if book.quotes.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..book.quotes.len());
    let quote = book.quotes[index].trim();
    if quote.is_empty() {
        None
    } else {
        Some(quote.to_string())
    }
}

pub struct BookCoverComponent {
    book: Book,
    recognizer: SwipeRecognizer,
    offset_y: f32,
    phase: ControlPhase,
}

impl BookCoverComponent {
    pub fn new(book: Book) -> Self {
        Self {
            book,
            recognizer: SwipeRecognizer::new(COVER_SWIPE_THRESHOLD),
            offset_y: 0.0,
            phase: ControlPhase::Idle,
        }
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Vertical drag offset in distance units (zero or negative)
    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    pub fn phase(&self) -> ControlPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    pub fn shows_swipe_indicator(&self) -> bool {
        self.phase.is_dragging() && self.offset_y < COVER_INDICATOR_OFFSET
    }

    /// Feed one pointer event. Returns [`Action::SelectQuote`] when an upward
    /// swipe commits and the picked quote is usable.
    pub fn handle_pointer<R: Rng + ?Sized>(
        &mut self,
        event: &PointerEvent,
        now: Instant,
        scroll: &mut dyn ScrollAnchor,
        rng: &mut R,
    ) -> Action {
        if self.phase.is_animating() {
            debug!("Cover '{}' is animating, ignoring pointer", self.book.title);
            return Action::None;
        }

        match self.recognizer.handle(event) {
            GestureUpdate::Started => {
                self.phase = ControlPhase::Dragging;
                Action::None
            }
            GestureUpdate::Moved(state) => {
                if state.delta.dy < 0.0 {
                    self.offset_y = state.delta.dy.max(COVER_MAX_DRAG_OFFSET);
                }
                Action::None
            }
            GestureUpdate::Ended(Some(SwipeDirection::Up)) => self.commit(now, scroll, rng),
            GestureUpdate::Ended(_) => {
                self.snap_back();
                Action::None
            }
            GestureUpdate::Ignored => Action::None,
        }
    }

    /// Keyboard equivalent of a committed up-swipe.
    pub fn select<R: Rng + ?Sized>(&mut self, now: Instant, scroll: &mut dyn ScrollAnchor, rng: &mut R) -> Action {
        if self.phase.is_animating() {
            return Action::None;
        }
        self.recognizer.reset();
        self.commit(now, scroll, rng)
    }

    fn commit<R: Rng + ?Sized>(&mut self, now: Instant, scroll: &mut dyn ScrollAnchor, rng: &mut R) -> Action {
        if !scroll.is_at_top() {
            scroll.scroll_to_top();
        }

        let action = match pick_quote(&self.book, rng) {
            Some(quote) => Action::SelectQuote {
                book: BookSummary::from(&self.book),
                quote,
            },
            None => {
                debug!("No usable quote picked from '{}'", self.book.title);
                Action::None
            }
        };

        self.offset_y = COVER_COMMIT_OFFSET;
        self.phase = ControlPhase::animate(now, COMMIT_ANIMATION);
        action
    }

    /// Pointer left the control mid-drag
    pub fn cancel(&mut self) {
        if self.recognizer.is_active() {
            self.recognizer.reset();
            self.snap_back();
        }
    }

    fn snap_back(&mut self) {
        self.offset_y = 0.0;
        self.phase = ControlPhase::Idle;
    }

    pub fn tick(&mut self, now: Instant) {
        if self.phase.finish(now) {
            self.offset_y = 0.0;
            self.recognizer.reset();
        }
    }

    /// Draw the cover in `slot`, lifted by the current drag offset.
    pub fn render(&self, f: &mut Frame, slot: Rect, focused: bool, tint: Option<Rgb>, scale: CellScale) {
        let lift = scale.units_to_rows(-self.offset_y).max(0) as u16;
        let area = Rect {
            y: slot.y.saturating_sub(lift),
            ..slot
        };

        let background = tint.unwrap_or_default();
        let foreground = contrast_text_color(background);
        let mut style = Style::default().bg(Color::from(background)).fg(foreground);
        if self.phase.is_animating() {
            style = style.add_modifier(Modifier::DIM);
        }

        let border_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if focused { BorderType::Thick } else { BorderType::Rounded })
            .border_style(border_style)
            .style(style);

        let text = vec![
            Line::from(Span::styled(
                self.book.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.book.author.clone(),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
        ];

        let cover = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(cover, area);

        if self.shows_swipe_indicator() && area.y > 0 {
            let indicator_area = Rect {
                x: area.x,
                y: area.y - 1,
                width: area.width,
                height: 1,
            };
            let indicator = Paragraph::new(SWIPE_UP_INDICATOR)
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center);
            f.render_widget(indicator, indicator_area);
        }
    }
}
