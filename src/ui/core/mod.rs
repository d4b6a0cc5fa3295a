//! Core UI functionality for Swote.
//!
//! This module contains the building blocks the components share: the
//! [`Action`] commands components emit, the [`Component`] trait, the terminal
//! event pump and the background task manager.
//!
//! # Module Components
//!
//! - [`actions`] - Commands flowing from components to the application
//! - [`component`] - Base component trait and the [`ScrollAnchor`] collaborator
//! - [`event_handler`] - Keyboard, mouse, focus and tick events
//! - [`task_manager`] - Background book fetch and cover color extraction
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** are the only way a component asks for a state change
//! 3. **Events** are processed through the [`EventHandler`] system
//! 4. **Tasks** run asynchronously via the [`TaskManager`] and report back as actions

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType};
pub use component::{Component, ScrollAnchor};
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
