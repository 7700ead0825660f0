//! Presentation derived from carousel state.

use serde::{Deserialize, Serialize};

use crate::CarouselState;

/// Class on the outer element that receives pointer-down.
pub const CONTAINER_CLASS: &str = "swiper-container";
/// Class on the translated item strip.
pub const LIST_CLASS: &str = "swiper-list";
/// Added to the strip while a drag is in progress.
pub const SWIPING_CLASS: &str = "is-swiping";
/// Class on each item cell.
pub const ITEM_CLASS: &str = "swiper-item-container";
/// Class on the text inside an item cell.
pub const ITEM_CONTENT_CLASS: &str = "swiper-item-content";
/// Class on the "previous" control.
pub const PREV_CLASS: &str = "swiper-button-prev";
/// Class on the "next" control.
pub const NEXT_CLASS: &str = "swiper-button-next";
/// Added to a control that cannot move further.
pub const DISABLED_CLASS: &str = "disabled";

/// Everything a host needs to draw the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselView {
    /// Horizontal translation of the strip in pixels.
    pub offset_x: f64,
    /// Index of the current slide.
    pub active_index: usize,
    /// Whether a drag is in progress.
    pub is_swiping: bool,
    /// Whether the "previous" control is inert.
    pub prev_disabled: bool,
    /// Whether the "next" control is inert.
    pub next_disabled: bool,
}

impl CarouselView {
    /// Derive the view for a carousel of `slide_count` slides.
    #[must_use]
    pub fn from_state(state: &CarouselState, slide_count: usize) -> Self {
        Self {
            offset_x: state.offset_x,
            active_index: state.active_index,
            is_swiping: state.is_dragging(),
            prev_disabled: state.active_index == 0,
            next_disabled: state.active_index + 1 >= slide_count,
        }
    }

    /// CSS `transform` for the strip.
    #[must_use]
    pub fn strip_transform(&self) -> String {
        format!("translate3d({}px, 0, 0)", self.offset_x)
    }

    /// CSS classes for the strip.
    #[must_use]
    pub fn strip_class(&self) -> String {
        with_modifier(LIST_CLASS, self.is_swiping.then_some(SWIPING_CLASS))
    }

    /// CSS classes for the "previous" control.
    #[must_use]
    pub fn prev_class(&self) -> String {
        with_modifier(PREV_CLASS, self.prev_disabled.then_some(DISABLED_CLASS))
    }

    /// CSS classes for the "next" control.
    #[must_use]
    pub fn next_class(&self) -> String {
        with_modifier(NEXT_CLASS, self.next_disabled.then_some(DISABLED_CLASS))
    }
}

fn with_modifier(base: &str, modifier: Option<&str>) -> String {
    match modifier {
        Some(modifier) => format!("{base} {modifier}"),
        None => base.to_string(),
    }
}
