//! Error types for carousel construction.

use thiserror::Error;

/// Result type for swiper operations.
pub type SwiperResult<T> = Result<T, SwiperError>;

/// Errors that can occur while building a carousel.
///
/// Once a [`Carousel`](crate::Carousel) exists, none of its operations fail:
/// out-of-range indices are clamped instead.
#[derive(Debug, Error)]
pub enum SwiperError {
    /// A carousel needs at least one slide.
    #[error("Carousel requires at least one slide")]
    EmptySlides,

    /// Configuration value out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Slide or config JSON could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
