//! Utility modules for the Swote application.
//!
//! - [`color`] - RGB helpers, hex formatting and text contrast

pub mod color;
