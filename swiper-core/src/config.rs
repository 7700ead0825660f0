//! Carousel tuning.

use serde::{Deserialize, Serialize};

use crate::{SwiperError, SwiperResult};

/// Fraction of the viewport width used both as the elastic overscroll
/// allowance and as the commit threshold for a swipe.
pub const SWIPE_LIMIT: f64 = 0.6;

/// Tunable carousel behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Overscroll allowance and commit threshold, as a fraction of the
    /// viewport width. Must be in `(0, 1]`.
    pub swipe_limit: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            swipe_limit: SWIPE_LIMIT,
        }
    }
}

impl SwipeConfig {
    /// Parse and validate a config from JSON. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> SwiperResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`SwiperError::InvalidConfig`] if `swipe_limit` is not a
    /// finite number in `(0, 1]`.
    pub fn validate(&self) -> SwiperResult<()> {
        if !self.swipe_limit.is_finite() || self.swipe_limit <= 0.0 || self.swipe_limit > 1.0 {
            return Err(SwiperError::InvalidConfig(format!(
                "swipe_limit must be in (0, 1], got {}",
                self.swipe_limit
            )));
        }
        Ok(())
    }
}
