//! Saved quotes and user preferences.
//!
//! The serialized shape matches the records kept in local storage:
//! `{ id, quote, book: { id, title, author, cover }, savedAt, font? }`.

use crate::books::Book;
use crate::constants::{FONT_SIZE_DEFAULT, FONT_SIZE_MAX, FONT_SIZE_MIN};
use serde::{Deserialize, Serialize};

/// The parts of a [`Book`] a saved quote keeps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(rename = "cover")]
    pub cover_ref: String,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            cover_ref: book.cover_ref.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteFont {
    Playfair,
    Merriweather,
    Lora,
    Crimson,
    LibreBaskerville,
    EbGaramond,
    Cormorant,
    Spectral,
    SourceSerif,
    Bitter,
}

impl QuoteFont {
    pub const ALL: [QuoteFont; 10] = [
        QuoteFont::Playfair,
        QuoteFont::Merriweather,
        QuoteFont::Lora,
        QuoteFont::Crimson,
        QuoteFont::LibreBaskerville,
        QuoteFont::EbGaramond,
        QuoteFont::Cormorant,
        QuoteFont::Spectral,
        QuoteFont::SourceSerif,
        QuoteFont::Bitter,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            QuoteFont::Playfair => "Playfair Display",
            QuoteFont::Merriweather => "Merriweather",
            QuoteFont::Lora => "Lora",
            QuoteFont::Crimson => "Crimson Text",
            QuoteFont::LibreBaskerville => "Libre Baskerville",
            QuoteFont::EbGaramond => "EB Garamond",
            QuoteFont::Cormorant => "Cormorant",
            QuoteFont::Spectral => "Spectral",
            QuoteFont::SourceSerif => "Source Serif",
            QuoteFont::Bitter => "Bitter",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedQuote {
    /// `{book id}-{saved_at}`
    pub id: String,
    #[serde(rename = "quote")]
    pub quote_text: String,
    pub book: BookSummary,
    /// Milliseconds since the Unix epoch
    pub saved_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<QuoteFont>,
}

impl SavedQuote {
    pub fn new(book: BookSummary, quote_text: impl Into<String>, saved_at: i64) -> Self {
        Self {
            id: Self::make_id(&book.id, saved_at),
            quote_text: quote_text.into(),
            book,
            saved_at,
            font: None,
        }
    }

    pub fn make_id(book_id: &str, saved_at: i64) -> String {
        format!("{}-{}", book_id, saved_at)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub font_size: u8,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            font_size: FONT_SIZE_DEFAULT,
        }
    }
}

/// Clamp an arbitrary integer into the supported font size range.
pub fn clamp_font_size(px: i64) -> u8 {
    px.clamp(FONT_SIZE_MIN as i64, FONT_SIZE_MAX as i64) as u8
}
