//! HTTP book source.

use super::{parse_books_response, Book, BookSource, BookSourceError};
use async_trait::async_trait;
use log::{debug, info};
use std::time::Duration;

/// Fetches the catalogue from the books endpoint over HTTP.
pub struct HttpBookSource {
    client: reqwest::Client,
    url: String,
}

impl HttpBookSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, BookSourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BookSourceError::Network(e.to_string()))?;

        Ok(Self { client, url: url.into() })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl BookSource for HttpBookSource {
    async fn fetch_books(&self) -> Result<Vec<Book>, BookSourceError> {
        debug!("Fetching books from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| BookSourceError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| BookSourceError::Network(e.to_string()))?;

        let books = parse_books_response(status, &body)?;
        info!("Fetched {} books", books.len());
        Ok(books)
    }
}
