//! Rotating literary quotations shown while the book list loads.

use crate::constants::{LOADING_QUOTES, LOADING_QUOTE_FADE, LOADING_QUOTE_INTERVAL};
use crate::ui::core::{Action, Component};
use crossterm::event::KeyEvent;
use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct LoadingComponent {
    index: usize,
    next_switch: Instant,
    fade_until: Option<Instant>,
    frame: usize,
}

impl LoadingComponent {
    /// Starts on a random quotation so each session opens differently.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, now: Instant) -> Self {
        Self {
            index: rng.gen_range(0..LOADING_QUOTES.len()),
            next_switch: now + LOADING_QUOTE_INTERVAL,
            fade_until: None,
            frame: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// `(quote, author)` currently on screen
    pub fn current(&self) -> (&'static str, &'static str) {
        LOADING_QUOTES[self.index]
    }

    pub fn is_fading(&self) -> bool {
        self.fade_until.is_some()
    }

    /// Fade out when the interval elapses, then advance once the fade ends.
    pub fn advance(&mut self, now: Instant) {
        self.frame = self.frame.wrapping_add(1);

        match self.fade_until {
            Some(until) if now >= until => {
                self.index = (self.index + 1) % LOADING_QUOTES.len();
                self.fade_until = None;
                self.next_switch = now + LOADING_QUOTE_INTERVAL;
            }
            Some(_) => {}
            None if now >= self.next_switch => {
                self.fade_until = Some(now + LOADING_QUOTE_FADE);
            }
            None => {}
        }
    }
}

impl Component for LoadingComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn tick(&mut self, now: Instant) -> Action {
        self.advance(now);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let width = rect.width.saturating_mul(6) / 10;
        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(width.max(20).min(rect.width)),
            Constraint::Fill(1),
        ])
        .areas(rect);
        let [_, body, _] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(8), Constraint::Fill(1)]).areas(column);

        let (quote, author) = self.current();
        let mut quote_style = Style::default().fg(Color::White).add_modifier(Modifier::ITALIC);
        let mut author_style = Style::default().fg(Color::Gray);
        if self.is_fading() {
            quote_style = quote_style.fg(Color::DarkGray).add_modifier(Modifier::DIM);
            author_style = author_style.fg(Color::DarkGray).add_modifier(Modifier::DIM);
        }

        let spinner = SPINNER_FRAMES[(self.frame / 4) % SPINNER_FRAMES.len()];
        let text = vec![
            Line::from(Span::styled(format!("“{}”", quote), quote_style)),
            Line::from(""),
            Line::from(Span::styled(format!("— {}", author), author_style)),
            Line::from(""),
            Line::from(Span::styled(
                format!("{} Loading books...", spinner),
                Style::default().fg(Color::Yellow),
            )),
        ];

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, body);
    }
}
