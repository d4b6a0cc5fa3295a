//! System clipboard access for exports.

use anyhow::Result;
use std::sync::{Arc, Mutex};

pub trait Clipboard {
    fn set_text(&mut self, text: String) -> Result<()>;
}

/// The desktop clipboard via `arboard`. A handle is opened per copy so a
/// missing clipboard (e.g. over SSH) only fails that copy.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: String) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

/// Keeps the last copied text in memory. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|contents| contents.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: String) -> Result<()> {
        if let Ok(mut contents) = self.contents.lock() {
            *contents = Some(text);
        }
        Ok(())
    }
}
