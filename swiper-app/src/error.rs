//! Errors raised while mounting the widget.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors that can occur while mounting a swiper into the page.
#[derive(Debug, Error)]
pub enum MountError {
    /// No `window` or `document` (e.g., running in a worker).
    #[error("No {0} object")]
    NoGlobal(&'static str),

    /// The host element id did not resolve.
    #[error("Container element '{0}' not found")]
    ContainerNotFound(String),

    /// A DOM call threw.
    #[error("DOM error: {0}")]
    Dom(String),

    /// The slides or config were rejected.
    #[error(transparent)]
    Core(#[from] swiper_core::SwiperError),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
