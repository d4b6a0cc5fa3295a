//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

use std::time::Duration;

// Gesture thresholds (distance units)
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;
pub const COVER_SWIPE_THRESHOLD: f32 = 40.0;
pub const QUOTE_SWIPE_THRESHOLD: f32 = 80.0;
/// Upward drag on a cover is clamped to this offset
pub const COVER_MAX_DRAG_OFFSET: f32 = -100.0;
/// Cover offset while the commit animation plays
pub const COVER_COMMIT_OFFSET: f32 = -200.0;
/// Upward drag beyond this shows the swipe-up indicator
pub const COVER_INDICATOR_OFFSET: f32 = -10.0;
/// Quote card offset while the delete animation plays
pub const QUOTE_DELETE_OFFSET: f32 = -400.0;

// Animation timing
pub const COMMIT_ANIMATION: Duration = Duration::from_millis(200);
pub const DELETE_ANIMATION: Duration = Duration::from_millis(200);
pub const LOADING_QUOTE_INTERVAL: Duration = Duration::from_secs(10);
pub const LOADING_QUOTE_FADE: Duration = Duration::from_millis(500);
/// Event loop tick while idle
pub const TICK_RATE: Duration = Duration::from_millis(16);
/// Frames are capped at about 60 per second
pub const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Fraction of the remaining distance the carousel covers per tick
pub const CAROUSEL_SMOOTHING: f32 = 0.35;
/// How long a status line message stays visible
pub const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

// Terminal cell scale (distance units per cell)
pub const DEFAULT_CELL_WIDTH_UNITS: u16 = 8;
pub const DEFAULT_CELL_HEIGHT_UNITS: u16 = 16;
pub const MIN_CELL_UNITS: u16 = 1;
pub const MAX_CELL_UNITS: u16 = 64;

// Carousel
pub const CAROUSEL_SCROLL_STEP: f32 = 200.0;
/// Slack before the right edge counts as reached
pub const CAROUSEL_EDGE_SLACK: f32 = 10.0;
pub const COVER_WIDTH_COLUMNS: u16 = 12;
pub const COVER_GAP_COLUMNS: u16 = 2;

// Quote list
/// Rows scrolled before the scroll-to-top affordance appears
pub const SCROLL_TO_TOP_THRESHOLD_ROWS: usize = 5;

// Preferences
pub const FONT_SIZE_MIN: u8 = 12;
pub const FONT_SIZE_MAX: u8 = 20;
pub const FONT_SIZE_DEFAULT: u8 = 14;

// Local storage keys
pub const STORAGE_KEY_SAVED_QUOTES: &str = "swote-saved-quotes";
pub const STORAGE_KEY_FONT_SIZE: &str = "swote-font-size";

// Remote defaults
pub const DEFAULT_BOOKS_URL: &str = "http://localhost:3000/api/books";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;
pub const MAX_FETCH_TIMEOUT_SECS: u64 = 300;

// Edge color sampling
pub const EDGE_SAMPLE_COLUMNS: u32 = 5;
pub const EDGE_SAMPLE_STRIDE: usize = 4;
pub const FALLBACK_EDGE_COLOR: (u8, u8, u8) = (100, 100, 100);
pub const CONTRAST_LUMINANCE_THRESHOLD: f64 = 0.4;

// UI text
pub const HEADER_YOUR_QUOTES: &str = "Your Quotes";
pub const EMPTY_QUOTES_TITLE: &str = "No quotes yet";
pub const EMPTY_QUOTES_HINT: &str = "Swipe up on a book below to save a quote";
pub const EMPTY_CAROUSEL: &str = "No books to show";
pub const SWIPE_UP_INDICATOR: &str = "⇡ swipe up ⇡";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - 'c' to clear, 'Esc', 'G' or 'q' to close";
pub const DIALOG_TITLE_EXPORT: &str = "📋 Copy quotes as…";

// Status messages
pub const SUCCESS_EXPORT_COPIED: &str = "✅ Copied to clipboard";
pub const SUCCESS_CLEARED: &str = "✅ Cleared all quotes";
pub const ERROR_CLIPBOARD_FAILED: &str = "❌ Clipboard unavailable";
pub const INFO_NOTHING_TO_EXPORT: &str = "Nothing to export";

// Misc
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const LOG_FILE_NAME: &str = "swote.log";

/// Filler quotations shown while books load.
pub const LOADING_QUOTES: &[(&str, &str)] = &[
    (
        "A reader lives a thousand lives before he dies. The man who never reads lives only one.",
        "George R.R. Martin",
    ),
    ("So many books, so little time.", "Frank Zappa"),
    ("A room without books is like a body without a soul.", "Cicero"),
    (
        "The only thing that you absolutely have to know, is the location of the library.",
        "Albert Einstein",
    ),
    (
        "I have always imagined that Paradise will be a kind of library.",
        "Jorge Luis Borges",
    ),
    ("There is no friend as loyal as a book.", "Ernest Hemingway"),
    (
        "Until I feared I would lose it, I never loved to read. One does not love breathing.",
        "Harper Lee",
    ),
    ("Books are a uniquely portable magic.", "Stephen King"),
    (
        "Reading is essential for those who seek to rise above the ordinary.",
        "Jim Rohn",
    ),
    ("A book is a dream that you hold in your hand.", "Neil Gaiman"),
];
