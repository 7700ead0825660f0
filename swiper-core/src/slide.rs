//! Slide content.

use serde::{Deserialize, Serialize};

use crate::SwiperResult;

/// Number of slides in the demo set.
pub const DEMO_SLIDE_COUNT: usize = 10;

/// One carousel item. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Text shown inside the item cell.
    pub content: String,
}

impl Slide {
    /// Create a slide with the given text.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Parse a JSON array of `{ "content": ... }` objects.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not an array of slides.
    pub fn list_from_json(json: &str) -> SwiperResult<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Slides labelled `Slide 1` through `Slide {count}`.
#[must_use]
pub fn sample_slides(count: usize) -> Vec<Slide> {
    (1..=count)
        .map(|n| Slide::new(format!("Slide {n}")))
        .collect()
}
