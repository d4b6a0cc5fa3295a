//! Clipboard export formats for the saved-quotes list.
//!
//! Every format is a pure function of the list; an empty list exports as the
//! empty string.

use crate::quotes::SavedQuote;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Json,
    Quiz,
    Deeper,
    Similarity,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Markdown,
        ExportFormat::Json,
        ExportFormat::Quiz,
        ExportFormat::Deeper,
        ExportFormat::Similarity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "Markdown",
            ExportFormat::Json => "JSON",
            ExportFormat::Quiz => "Quiz prompt",
            ExportFormat::Deeper => "Go deeper prompt",
            ExportFormat::Similarity => "Similarity prompt",
        }
    }

    fn preamble(&self) -> Option<&'static str> {
        match self {
            ExportFormat::Markdown | ExportFormat::Json => None,
            ExportFormat::Quiz => Some(
                "Quiz me on the following quotes. For each one, ask me which book and author it \
                 comes from, wait for my answer, then tell me whether I was right and share a \
                 little context about the passage.",
            ),
            ExportFormat::Deeper => Some(
                "Help me go deeper on the following quotes. For each one, explain the idea it \
                 expresses and how it fits into the book's larger argument or story, then give me \
                 one question worth reflecting on.",
            ),
            ExportFormat::Similarity => Some(
                "Find the common threads between the following quotes. Group them by shared \
                 themes, point out where they agree or disagree, and suggest other books that \
                 explore similar ideas.",
            ),
        }
    }
}

/// One entry of the `json` export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedQuote {
    pub quote: String,
    pub author: String,
    pub title: String,
}

impl From<&SavedQuote> for ExportedQuote {
    fn from(saved: &SavedQuote) -> Self {
        Self {
            quote: saved.quote_text.clone(),
            author: saved.book.author.clone(),
            title: saved.book.title.clone(),
        }
    }
}

pub fn export(quotes: &[SavedQuote], format: ExportFormat) -> String {
    if quotes.is_empty() {
        return String::new();
    }

    match format {
        ExportFormat::Json => {
            let entries: Vec<ExportedQuote> = quotes.iter().map(ExportedQuote::from).collect();
            serde_json::to_string_pretty(&entries).unwrap_or_default()
        }
        ExportFormat::Markdown => citation_blocks(quotes),
        prompt => match prompt.preamble() {
            Some(preamble) => format!("{}\n\n{}", preamble, citation_blocks(quotes)),
            None => citation_blocks(quotes),
        },
    }
}

fn citation_blocks(quotes: &[SavedQuote]) -> String {
    quotes.iter().map(citation_block).collect::<Vec<_>>().join("\n\n")
}

fn citation_block(saved: &SavedQuote) -> String {
    let quoted: Vec<String> = saved.quote_text.lines().map(|line| format!("> {}", line)).collect();
    format!(
        "{}\n>\n> — {}, *{}*",
        quoted.join("\n"),
        saved.book.author,
        saved.book.title
    )
}
