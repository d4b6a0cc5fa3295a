//! Swote - Swipe quotes out of books
//!
//! A terminal app that shows a carousel of book covers. Swiping a cover up
//! saves a random quote from that book to your list; swiping a saved quote left
//! deletes it. The list and the font size survive restarts, and the list can be
//! exported to the clipboard in several formats.
//!
//! # Modules
//!
//! * [`gesture`] - Platform-agnostic swipe recognition and pointer normalization
//! * [`books`] - Book model and the remote catalogue
//! * [`quotes`] - Saved quotes and preferences
//! * [`state`] - Application state engine
//! * [`local_storage`] - Durable key/value records
//! * [`cover_colors`] - Cover edge-color extraction and cache
//! * [`export`] - Clipboard export formats
//! * [`ui`] - Terminal user interface components
//! * [`config`] - Application configuration management

/// Book model and remote catalogue source
pub mod books;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Cover edge colors for quote card backgrounds
pub mod cover_colors;

/// Pure export of the saved-quotes list
pub mod export;

/// Swipe gesture recognition
pub mod gesture;

/// Local persistence of saved quotes and preferences
pub mod local_storage;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Saved quote and preference models
pub mod quotes;

/// Application state engine
pub mod state;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for colors
pub mod utils;
