//! UI module for Swote
//!
//! A ratatui front end: the saved-quotes list above a carousel of book covers,
//! driven by mouse drags (swipes) and the keyboard.

pub mod app_component;
pub mod clipboard;
pub mod components;
pub mod core;
pub mod renderer;

pub use app_component::{AppComponent, AppServices};
pub use renderer::run_app;
