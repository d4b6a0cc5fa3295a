//! Application state engine.
//!
//! [`AppState`] owns the book catalogue, the saved-quotes list and the user
//! preferences. Three concerns advance independently:
//!
//! - remote data: `Loading` then `Ready` or `Failed`
//! - local hydration: `NotHydrated` then `Hydrated`, exactly once
//! - persistence: every change after hydration is written to local storage
//!
//! Components never mutate this state directly; they emit commands that the
//! app forwards to the methods here.

use crate::books::Book;
use crate::local_storage::LocalStorage;
use crate::quotes::{clamp_font_size, BookSummary, Preferences, SavedQuote};
use log::{info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteState {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationState {
    NotHydrated,
    Hydrated,
}

/// What the top-level screen shows. Hydration never holds back `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Ready,
}

pub struct AppState {
    books: Vec<Book>,
    saved_quotes: Vec<SavedQuote>,
    preferences: Preferences,
    remote: RemoteState,
    hydration: HydrationState,
    storage: LocalStorage,
}

impl AppState {
    pub fn new(storage: LocalStorage) -> Self {
        Self {
            books: Vec::new(),
            saved_quotes: Vec::new(),
            preferences: Preferences::default(),
            remote: RemoteState::Loading,
            hydration: HydrationState::NotHydrated,
            storage,
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn saved_quotes(&self) -> &[SavedQuote] {
        &self.saved_quotes
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn font_size(&self) -> u8 {
        self.preferences.font_size
    }

    pub fn remote_state(&self) -> RemoteState {
        self.remote
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydration == HydrationState::Hydrated
    }

    pub fn screen(&self) -> Screen {
        match self.remote {
            RemoteState::Loading => Screen::Loading,
            RemoteState::Ready | RemoteState::Failed => Screen::Ready,
        }
    }

    /// Load saved quotes and font size from local storage. Runs once; later
    /// calls are ignored.
    pub fn hydrate(&mut self) {
        if self.is_hydrated() {
            return;
        }

        self.saved_quotes = self.storage.load_saved_quotes();
        self.preferences.font_size = self.storage.load_font_size();
        self.hydration = HydrationState::Hydrated;
        info!(
            "Hydrated {} saved quotes, font size {}",
            self.saved_quotes.len(),
            self.preferences.font_size
        );
    }

    /// Accept the fetched catalogue, shuffled once for the session.
    pub fn books_loaded<R: Rng + ?Sized>(&mut self, mut books: Vec<Book>, rng: &mut R) {
        if self.remote != RemoteState::Loading {
            warn!("Ignoring book list received after loading finished");
            return;
        }
        books.shuffle(rng);
        info!("Loaded {} books", books.len());
        self.books = books;
        self.remote = RemoteState::Ready;
    }

    /// Degrade to an empty catalogue; loading still finishes.
    pub fn books_failed(&mut self, error: &str) {
        if self.remote != RemoteState::Loading {
            return;
        }
        warn!("Failed to load books: {}", error);
        self.books.clear();
        self.remote = RemoteState::Failed;
    }

    /// Prepend a new saved quote. Whitespace-only text is ignored.
    ///
    /// Returns the id of the new entry.
    pub fn select_quote(&mut self, book: BookSummary, quote_text: &str, now_ms: i64) -> Option<String> {
        let text = quote_text.trim();
        if text.is_empty() {
            return None;
        }

        let mut saved_at = now_ms;
        while self
            .saved_quotes
            .iter()
            .any(|q| q.id == SavedQuote::make_id(&book.id, saved_at))
        {
            saved_at += 1;
        }

        let quote = SavedQuote::new(book, text, saved_at);
        let id = quote.id.clone();
        info!("Saved quote {} from '{}'", id, quote.book.title);
        self.saved_quotes.insert(0, quote);
        self.persist_quotes();
        Some(id)
    }

    /// Remove the entry with `id`. Returns whether anything was removed.
    pub fn delete_quote(&mut self, id: &str) -> bool {
        let before = self.saved_quotes.len();
        self.saved_quotes.retain(|q| q.id != id);
        let removed = self.saved_quotes.len() != before;
        if removed {
            info!("Deleted quote {}", id);
            self.persist_quotes();
        }
        removed
    }

    pub fn clear_all(&mut self) {
        info!("Clearing {} saved quotes", self.saved_quotes.len());
        self.saved_quotes.clear();
        self.persist_quotes();
    }

    /// Update the font size (clamped to the slider range) and persist it.
    pub fn set_font_size(&mut self, px: i64) -> u8 {
        let size = clamp_font_size(px);
        if size != self.preferences.font_size {
            self.preferences.font_size = size;
            self.persist_font_size();
        }
        size
    }

    fn persist_quotes(&mut self) {
        if !self.is_hydrated() {
            return;
        }
        if let Err(e) = self.storage.save_saved_quotes(&self.saved_quotes) {
            warn!("Failed to persist saved quotes: {}", e);
        }
    }

    fn persist_font_size(&mut self) {
        if !self.is_hydrated() {
            return;
        }
        if let Err(e) = self.storage.save_font_size(self.preferences.font_size) {
            warn!("Failed to persist font size: {}", e);
        }
    }
}
