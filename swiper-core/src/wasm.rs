//! WebAssembly bindings for swiper-core.
//!
//! This module exposes the bare state machine to JavaScript hosts that
//! render the strip themselves. Sizes are passed in as numbers on each
//! call that needs them.

use wasm_bindgen::prelude::*;

use crate::{Carousel, MeasuredStrip, Slide, SwipeConfig};

/// Initialize the swiper WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();
}

/// Headless carousel instance for WASM.
#[wasm_bindgen]
pub struct WasmCarousel {
    carousel: Carousel,
}

#[wasm_bindgen]
impl WasmCarousel {
    /// Create a carousel from a JSON array of slides.
    ///
    /// # Errors
    ///
    /// Returns an error string if the JSON is invalid or the array is empty.
    #[wasm_bindgen(constructor)]
    pub fn new(slides_json: &str) -> Result<WasmCarousel, String> {
        let slides = Slide::list_from_json(slides_json).map_err(|e| e.to_string())?;
        let carousel = Carousel::new(slides).map_err(|e| e.to_string())?;
        Ok(Self { carousel })
    }

    /// Create a carousel with a JSON config such as `{"swipe_limit":0.5}`.
    ///
    /// # Errors
    ///
    /// Returns an error string if either JSON document is invalid.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(slides_json: &str, config_json: &str) -> Result<WasmCarousel, String> {
        let slides = Slide::list_from_json(slides_json).map_err(|e| e.to_string())?;
        let config = SwipeConfig::from_json(config_json).map_err(|e| e.to_string())?;
        let carousel = Carousel::with_config(slides, config).map_err(|e| e.to_string())?;
        Ok(Self { carousel })
    }

    /// Start a drag at pointer `x`.
    #[wasm_bindgen(js_name = beginDrag)]
    pub fn begin_drag(&mut self, x: f64, container_width: f64, scroll_width: f64) {
        self.carousel.begin_drag(
            x,
            &MeasuredStrip {
                container_width,
                scroll_width,
            },
        );
    }

    /// Follow the pointer to `x`. Returns the new strip offset.
    #[wasm_bindgen(js_name = dragTo)]
    pub fn drag_to(&mut self, x: f64) -> f64 {
        self.carousel.drag_to(x)
    }

    /// Release the drag. Returns the resting offset, or `undefined` if no
    /// drag was active.
    #[wasm_bindgen(js_name = endDrag)]
    pub fn end_drag(&mut self) -> Option<f64> {
        self.carousel.end_drag().map(|outcome| outcome.offset_x)
    }

    /// Jump to slide `index`, clamped to the valid range.
    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&mut self, index: isize, container_width: f64) {
        let strip = self.strip_for(container_width);
        self.carousel.go_to(index, &strip);
    }

    /// Step back one slide.
    pub fn prev(&mut self, container_width: f64) {
        let strip = self.strip_for(container_width);
        self.carousel.prev(&strip);
    }

    /// Step forward one slide.
    pub fn next(&mut self, container_width: f64) {
        let strip = self.strip_for(container_width);
        self.carousel.next(&strip);
    }

    /// Index of the current slide.
    #[wasm_bindgen(js_name = activeIndex)]
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.carousel.active_index()
    }

    /// Current strip offset in pixels.
    #[wasm_bindgen(js_name = offsetX)]
    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.carousel.offset_x()
    }

    /// Get the full state as JSON.
    #[wasm_bindgen(js_name = getStateJson)]
    #[must_use]
    pub fn get_state_json(&self) -> String {
        serde_json::to_string(self.carousel.state()).unwrap_or_default()
    }

    /// Get the view model as JSON.
    #[wasm_bindgen(js_name = getViewJson)]
    #[must_use]
    pub fn get_view_json(&self) -> String {
        serde_json::to_string(&self.carousel.view()).unwrap_or_default()
    }

    fn strip_for(&self, container_width: f64) -> MeasuredStrip {
        #[allow(clippy::cast_precision_loss)]
        let scroll_width = container_width * self.carousel.slide_count() as f64;
        MeasuredStrip {
            container_width,
            scroll_width,
        }
    }
}
