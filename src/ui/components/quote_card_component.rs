//! One saved quote, deleted with a leftward swipe.

use crate::constants::{DELETE_ANIMATION, QUOTE_DELETE_OFFSET, QUOTE_SWIPE_THRESHOLD};
use crate::gesture::{CellScale, GestureUpdate, PointerEvent, SwipeDirection, SwipeRecognizer};
use crate::quotes::SavedQuote;
use crate::ui::components::swipe_control::ControlPhase;
use crate::ui::core::Action;
use crate::utils::color::{contrast_text_color, Rgb};
use log::debug;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget},
};
use std::time::Instant;

const DELETE_IDLE: Rgb = Rgb { r: 60, g: 20, b: 20 };
const DELETE_ACTIVE: Rgb = Rgb { r: 220, g: 38, b: 38 };

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let mut word = word;
            while word.chars().count() > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let split = word.char_indices().nth(width).map(|(i, _)| i).unwrap_or(word.len());
                lines.push(word[..split].to_string());
                word = &word[split..];
            }
            if word.is_empty() {
                continue;
            }
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Terminal stand-in for the font size slider: small sizes render dim, large
/// sizes bold.
pub fn font_modifier(font_size: u8) -> Modifier {
    match font_size {
        0..=13 => Modifier::DIM,
        14..=16 => Modifier::empty(),
        _ => Modifier::BOLD,
    }
}

pub struct QuoteCardComponent {
    quote: SavedQuote,
    recognizer: SwipeRecognizer,
    offset_x: f32,
    phase: ControlPhase,
    removed: bool,
}

impl QuoteCardComponent {
    pub fn new(quote: SavedQuote) -> Self {
        Self {
            quote,
            recognizer: SwipeRecognizer::new(QUOTE_SWIPE_THRESHOLD),
            offset_x: 0.0,
            phase: ControlPhase::Idle,
            removed: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.quote.id
    }

    pub fn quote(&self) -> &SavedQuote {
        &self.quote
    }

    /// Horizontal drag offset in distance units (zero or negative)
    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn phase(&self) -> ControlPhase {
        self.phase
    }

    /// Opacity of the delete affordance, reaching 1.0 at the commit threshold
    pub fn delete_intensity(&self) -> f32 {
        (self.offset_x.abs() / QUOTE_SWIPE_THRESHOLD).min(1.0)
    }

    /// The delete animation finished and the delete command went out
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent, now: Instant) {
        if self.removed || self.phase.is_animating() {
            return;
        }

        match self.recognizer.handle(event) {
            GestureUpdate::Started => self.phase = ControlPhase::Dragging,
            GestureUpdate::Moved(state) => {
                if state.delta.dx < 0.0 {
                    self.offset_x = state.delta.dx;
                }
            }
            GestureUpdate::Ended(direction) => {
                if self.offset_x < -QUOTE_SWIPE_THRESHOLD || direction == Some(SwipeDirection::Left) {
                    self.start_delete(now);
                } else {
                    self.offset_x = 0.0;
                    self.phase = ControlPhase::Idle;
                }
            }
            GestureUpdate::Ignored => {}
        }
    }

    /// Delete without a gesture (keyboard)
    pub fn request_delete(&mut self, now: Instant) {
        if self.removed || self.phase.is_animating() {
            return;
        }
        self.recognizer.reset();
        self.start_delete(now);
    }

    fn start_delete(&mut self, now: Instant) {
        debug!("Deleting quote {}", self.quote.id);
        self.offset_x = QUOTE_DELETE_OFFSET;
        self.phase = ControlPhase::animate(now, DELETE_ANIMATION);
    }

    pub fn cancel(&mut self) {
        if self.recognizer.is_active() {
            self.recognizer.reset();
            self.offset_x = 0.0;
            self.phase = ControlPhase::Idle;
        }
    }

    /// Emits [`Action::DeleteQuote`] once, when the delete animation ends.
    pub fn tick(&mut self, now: Instant) -> Action {
        if self.phase.finish(now) && !self.removed {
            self.removed = true;
            return Action::DeleteQuote(self.quote.id.clone());
        }
        Action::None
    }

    /// Rows this card needs at `width` columns
    pub fn height(&self, width: u16) -> u16 {
        let text_width = width.saturating_sub(4) as usize;
        let quote_lines = wrap_lines(&self.quote.quote_text, text_width).len() as u16;
        // borders, quote, blank, attribution
        quote_lines + 4
    }

    pub fn render(&self, buf: &mut Buffer, rect: Rect, font_size: u8, background: Rgb, scale: CellScale) {
        if self.removed || rect.width == 0 || rect.height == 0 {
            return;
        }

        let shift = (scale.units_to_columns(-self.offset_x).max(0) as u16).min(rect.width);
        let card_area = Rect {
            width: rect.width - shift,
            ..rect
        };

        if shift > 0 {
            let affordance_area = Rect {
                x: rect.x + card_area.width,
                width: shift,
                ..rect
            };
            let color = DELETE_IDLE.lerp(DELETE_ACTIVE, self.delete_intensity());
            let label = if self.delete_intensity() >= 1.0 { "Delete" } else { "" };
            let affordance = Paragraph::new(vec![Line::from(""), Line::from(label)])
                .style(Style::default().bg(Color::from(color)).fg(Color::White))
                .alignment(Alignment::Center);
            affordance.render(affordance_area, buf);
        }

        if card_area.width == 0 {
            return;
        }

        let foreground = contrast_text_color(background);
        let mut style = Style::default().bg(Color::from(background)).fg(foreground);
        if self.phase.is_animating() {
            style = style.add_modifier(Modifier::DIM);
        }

        let text_width = rect.width.saturating_sub(4) as usize;
        let quote_style = Style::default().add_modifier(font_modifier(font_size) | Modifier::ITALIC);
        let mut lines: Vec<Line> = wrap_lines(&self.quote.quote_text, text_width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, quote_style)))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("— {}, {}", self.quote.book.author, self.quote.book.title),
            Style::default().add_modifier(font_modifier(font_size)),
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(foreground))
            .padding(Padding::horizontal(1))
            .style(style);

        let card = Paragraph::new(lines).block(block).scroll((0, shift));
        card.render(card_area, buf);
    }
}
