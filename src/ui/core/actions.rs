use crate::books::Book;
use crate::export::ExportFormat;
use crate::quotes::BookSummary;
use crate::utils::color::Rgb;

#[derive(Debug, Clone)]
pub enum Action {
    // Quote commands
    SelectQuote {
        book: BookSummary,
        quote: String,
    },
    DeleteQuote(String),
    ClearAll,
    SetFontSize(i64),
    Export(ExportFormat),

    // Background results
    BooksLoaded(Vec<Book>),
    BooksFailed(String),
    EdgeColorResolved {
        cover_ref: String,
        color: Rgb,
    },

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    ShowStatus(String),

    // App control
    Quit,
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Export,
    Logs,
}
