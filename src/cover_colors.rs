//! Cover edge colors.
//!
//! A quote card is painted with the color found along the right edge of its
//! book's cover. Extraction is asynchronous and goes through a
//! [`ColorExtractor`]; results land in an [`EdgeColorCache`] owned by the
//! application for the lifetime of the session. The cache only grows.

use crate::constants::{EDGE_SAMPLE_COLUMNS, EDGE_SAMPLE_STRIDE};
use crate::utils::color::Rgb;
use async_trait::async_trait;
use image::RgbaImage;
use log::{debug, warn};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("Failed to fetch cover: {0}")]
    Fetch(String),

    #[error("Failed to decode cover: {0}")]
    Decode(String),

    #[error("Cover image is empty")]
    Empty,
}

#[async_trait]
pub trait ColorExtractor: Send + Sync {
    async fn edge_color(&self, cover_ref: &str) -> Result<Rgb, ColorError>;
}

/// Average the right-most columns of `image`, taking every fourth pixel.
pub fn sample_edge_color(image: &RgbaImage) -> Option<Rgb> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return None;
    }

    let sample_width = EDGE_SAMPLE_COLUMNS.min(width);
    let start_x = width - sample_width;

    let (mut total_r, mut total_g, mut total_b, mut count) = (0u64, 0u64, 0u64, 0u64);
    let region = (0..height).flat_map(|y| (start_x..width).map(move |x| (x, y)));
    for (x, y) in region.step_by(EDGE_SAMPLE_STRIDE) {
        let pixel = image.get_pixel(x, y);
        total_r += pixel[0] as u64;
        total_g += pixel[1] as u64;
        total_b += pixel[2] as u64;
        count += 1;
    }

    if count == 0 {
        return None;
    }

    let average = |total: u64| ((total as f64 / count as f64).round()) as u8;
    Some(Rgb::new(average(total_r), average(total_g), average(total_b)))
}

/// Downloads covers over HTTP and samples their edge.
pub struct HttpColorExtractor {
    client: reqwest::Client,
}

impl HttpColorExtractor {
    pub fn new(timeout: Duration) -> Result<Self, ColorError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ColorError::Fetch(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ColorExtractor for HttpColorExtractor {
    async fn edge_color(&self, cover_ref: &str) -> Result<Rgb, ColorError> {
        let bytes = self
            .client
            .get(cover_ref)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| ColorError::Fetch(e.to_string()))?
            .bytes()
            .await
            .map_err(|e| ColorError::Fetch(e.to_string()))?;

        let image = image::load_from_memory(&bytes)
            .map_err(|e| ColorError::Decode(e.to_string()))?
            .to_rgba8();

        sample_edge_color(&image).ok_or(ColorError::Empty)
    }
}

/// Extract a cover color, falling back to neutral gray on any failure.
pub async fn resolve_edge_color(extractor: &dyn ColorExtractor, cover_ref: &str) -> Rgb {
    match extractor.edge_color(cover_ref).await {
        Ok(color) => {
            debug!("Edge color for {}: {:?}", cover_ref, color);
            color
        }
        Err(e) => {
            warn!("Using fallback color for {}: {}", cover_ref, e);
            Rgb::fallback()
        }
    }
}

/// Session-scoped, append-only map from cover reference to edge color.
#[derive(Debug, Default)]
pub struct EdgeColorCache {
    colors: HashMap<String, Rgb>,
    pending: HashSet<String>,
}

impl EdgeColorCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, cover_ref: &str) -> Option<Rgb> {
        self.colors.get(cover_ref).copied()
    }

    pub fn color_or_fallback(&self, cover_ref: &str) -> Rgb {
        self.get(cover_ref).unwrap_or_else(Rgb::fallback)
    }

    /// Mark `cover_ref` as being extracted. Returns `false` when it is already
    /// cached or in flight, so callers start at most one extraction per cover.
    pub fn begin(&mut self, cover_ref: &str) -> bool {
        if self.colors.contains_key(cover_ref) {
            return false;
        }
        self.pending.insert(cover_ref.to_string())
    }

    /// Record an extracted color. The first color stored for a cover wins.
    pub fn insert(&mut self, cover_ref: &str, color: Rgb) {
        self.pending.remove(cover_ref);
        self.colors.entry(cover_ref.to_string()).or_insert(color);
    }

    pub fn is_pending(&self, cover_ref: &str) -> bool {
        self.pending.contains(cover_ref)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
