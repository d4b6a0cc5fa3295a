//! Shared fixtures for the UI tests.
#![allow(dead_code)]

use async_trait::async_trait;
use ratatui::buffer::Buffer;
use swote::books::{Book, BookSource, BookSourceError};
use swote::cover_colors::{ColorError, ColorExtractor};
use swote::gesture::{Point, PointerEvent, PointerEventKind};
use swote::quotes::{BookSummary, SavedQuote};
use swote::ui::core::ScrollAnchor;
use swote::utils::color::Rgb;

pub fn book(id: &str, quotes: &[&str]) -> Book {
    Book {
        id: id.to_string(),
        title: format!("Title {}", id),
        author: format!("Author {}", id),
        cover_ref: format!("https://covers.example/{}.jpg", id),
        quotes: quotes.iter().map(|q| q.to_string()).collect(),
    }
}

pub fn books(count: usize) -> Vec<Book> {
    (0..count)
        .map(|i| book(&format!("b{}", i), &["A sentence worth keeping."]))
        .collect()
}

pub fn saved(id: &str, text: &str, saved_at: i64) -> SavedQuote {
    SavedQuote::new(BookSummary::from(&book(id, &[])), text, saved_at)
}

pub fn mouse(kind: PointerEventKind, x: f32, y: f32) -> PointerEvent {
    PointerEvent::mouse(kind, Point::new(x, y))
}

/// Text of one buffer row
pub fn row_text(buf: &Buffer, y: u16) -> String {
    (buf.area.x..buf.area.right()).map(|x| buf[(x, y)].symbol()).collect()
}

pub fn buffer_text(buf: &Buffer) -> String {
    (buf.area.y..buf.area.bottom())
        .map(|y| row_text(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Records what a cover commit asked of the quote list
#[derive(Default)]
pub struct FakeScroll {
    pub at_top: bool,
    pub scrolled_to_top: bool,
}

impl FakeScroll {
    pub fn at_top() -> Self {
        Self {
            at_top: true,
            scrolled_to_top: false,
        }
    }

    pub fn scrolled_down() -> Self {
        Self::default()
    }
}

impl ScrollAnchor for FakeScroll {
    fn is_at_top(&self) -> bool {
        self.at_top
    }

    fn scroll_to_top(&mut self) {
        self.scrolled_to_top = true;
        self.at_top = true;
    }
}

pub struct FakeBookSource(pub Result<Vec<Book>, String>);

#[async_trait]
impl BookSource for FakeBookSource {
    async fn fetch_books(&self) -> Result<Vec<Book>, BookSourceError> {
        self.0.clone().map_err(BookSourceError::Network)
    }
}

pub struct FakeColorExtractor(pub Rgb);

#[async_trait]
impl ColorExtractor for FakeColorExtractor {
    async fn edge_color(&self, _cover_ref: &str) -> Result<Rgb, ColorError> {
        Ok(self.0)
    }
}
