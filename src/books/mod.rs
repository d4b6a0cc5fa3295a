//! Remote book catalogue.
//!
//! Books and their quotes are fetched once per session through a [`BookSource`].
//! The application never writes books back and never persists them locally.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod http;

pub use http::HttpBookSource;

/// Errors produced while fetching the catalogue.
#[derive(Debug, thiserror::Error)]
pub enum BookSourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// A book with its quotes, as served by `GET /books`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(rename = "cover")]
    pub cover_ref: String,
    #[serde(default)]
    pub quotes: Vec<String>,
}

/// Successful `GET /books` body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BooksResponse {
    pub books: Vec<Book>,
}

/// Failed `GET /books` body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[async_trait]
pub trait BookSource: Send + Sync {
    async fn fetch_books(&self) -> Result<Vec<Book>, BookSourceError>;
}

/// Interpret a `GET /books` response.
///
/// Anything other than 200 is an error; the `{ error }` message is carried
/// along when the body has one.
pub fn parse_books_response(status: u16, body: &str) -> Result<Vec<Book>, BookSourceError> {
    if status != 200 {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|e| e.error)
            .unwrap_or_else(|_| body.chars().take(200).collect());
        return Err(BookSourceError::Status { status, message });
    }

    serde_json::from_str::<BooksResponse>(body)
        .map(|response| response.books)
        .map_err(|e| BookSourceError::InvalidData(e.to_string()))
}
