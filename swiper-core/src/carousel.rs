//! The carousel state machine.
//!
//! A [`Carousel`] owns its slides and a [`CarouselState`]. Hosts feed it
//! pointer positions and strip measurements; it answers with the offset to
//! translate the strip by and the slide that is currently active.

use serde::{Deserialize, Serialize};

use crate::{
    snap::{clamp_drag_offset, index_for_offset, offset_for_index, snap_target},
    CarouselView, PointerEvent, PointerPhase, Slide, StripMetrics, SwipeConfig, SwiperError,
    SwiperResult,
};

/// Whether a drag gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum GesturePhase {
    /// No pointer is held on the strip.
    Idle,
    /// The strip follows the pointer.
    Dragging {
        /// Pointer X when the drag began.
        anchor_x: f64,
        /// Strip offset when the drag began.
        offset_at_start: f64,
    },
}

/// Mutable carousel state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselState {
    /// Horizontal translation of the strip in pixels.
    pub offset_x: f64,
    /// Index of the current slide.
    pub active_index: usize,
    /// Viewport width captured at the last drag start or navigation.
    pub container_width: f64,
    /// Most negative resting offset, captured with `container_width`.
    pub min_offset_x: f64,
    /// Current gesture.
    pub gesture: GesturePhase,
}

impl CarouselState {
    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, GesturePhase::Dragging { .. })
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            active_index: 0,
            container_width: 0.0,
            min_offset_x: 0.0,
            gesture: GesturePhase::Idle,
        }
    }
}

/// Result of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapOutcome {
    /// Offset the strip now rests at.
    pub offset_x: f64,
    /// Slide shown at that offset.
    pub active_index: usize,
    /// Whether the drag crossed the commit threshold.
    pub committed: bool,
}

/// A draggable, snap-to-slide carousel.
#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Vec<Slide>,
    config: SwipeConfig,
    state: CarouselState,
}

impl Carousel {
    /// Create a carousel over `slides` with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SwiperError::EmptySlides`] if `slides` is empty.
    pub fn new(slides: Vec<Slide>) -> SwiperResult<Self> {
        Self::with_config(slides, SwipeConfig::default())
    }

    /// Create a carousel with explicit tuning.
    ///
    /// # Errors
    ///
    /// Returns an error if `slides` is empty or `config` is invalid.
    pub fn with_config(slides: Vec<Slide>, config: SwipeConfig) -> SwiperResult<Self> {
        if slides.is_empty() {
            return Err(SwiperError::EmptySlides);
        }
        config.validate()?;
        Ok(Self {
            slides,
            config,
            state: CarouselState::default(),
        })
    }

    /// The slides, in display order.
    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Active tuning.
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Current strip offset in pixels.
    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.state.offset_x
    }

    /// Index of the current slide.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Whether "previous" would move.
    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.state.active_index > 0
    }

    /// Whether "next" would move.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.state.active_index + 1 < self.slides.len()
    }

    /// Start following the pointer.
    ///
    /// Starting while already dragging re-anchors at the new position.
    pub fn begin_drag(&mut self, pointer_x: f64, metrics: &impl StripMetrics) {
        if self.state.is_dragging() {
            tracing::debug!("Drag restarted at x={pointer_x}, re-anchoring");
        }

        self.state.container_width = metrics.container_width();
        self.state.min_offset_x = metrics.min_offset_x();
        self.state.gesture = GesturePhase::Dragging {
            anchor_x: pointer_x,
            offset_at_start: self.state.offset_x,
        };

        tracing::debug!(
            "Drag start: x={pointer_x} offset={} width={} min_offset={}",
            self.state.offset_x,
            self.state.container_width,
            self.state.min_offset_x
        );
    }

    /// Move the strip with the pointer. Ignored unless a drag is active.
    ///
    /// Returns the offset after elastic clamping.
    pub fn drag_to(&mut self, pointer_x: f64) -> f64 {
        let GesturePhase::Dragging {
            anchor_x,
            offset_at_start,
        } = self.state.gesture
        else {
            return self.state.offset_x;
        };

        let diff = anchor_x - pointer_x;
        self.state.offset_x = clamp_drag_offset(
            offset_at_start - diff,
            self.state.container_width,
            self.state.min_offset_x,
            self.config.swipe_limit,
        );
        self.state.offset_x
    }

    /// Release the strip and snap it to a slide boundary.
    ///
    /// Returns `None` if no drag was active.
    pub fn end_drag(&mut self) -> Option<SnapOutcome> {
        let GesturePhase::Dragging {
            offset_at_start, ..
        } = self.state.gesture
        else {
            return None;
        };

        let snap = snap_target(
            self.state.offset_x,
            offset_at_start,
            self.state.container_width,
            self.state.min_offset_x,
            self.config.swipe_limit,
        );

        self.state.offset_x = snap.offset_x;
        self.state.active_index =
            index_for_offset(snap.offset_x, self.state.container_width, self.slides.len());
        self.state.gesture = GesturePhase::Idle;

        let outcome = SnapOutcome {
            offset_x: snap.offset_x,
            active_index: self.state.active_index,
            committed: snap.committed,
        };
        tracing::debug!("Drag end: {:?}", outcome);
        Some(outcome)
    }

    /// Jump to slide `index`, clamping out-of-range values to the first or
    /// last slide.
    pub fn go_to(&mut self, index: isize, metrics: &impl StripMetrics) {
        let last = self.slides.len() - 1;
        let target = usize::try_from(index).map_or(0, |idx| idx.min(last));

        self.state.container_width = metrics.container_width();
        self.state.min_offset_x = metrics.min_offset_x();
        self.state.active_index = target;
        self.state.offset_x = offset_for_index(target, self.state.container_width);
    }

    /// Step back one slide.
    pub fn prev(&mut self, metrics: &impl StripMetrics) {
        self.go_to(self.signed_index() - 1, metrics);
    }

    /// Step forward one slide.
    pub fn next(&mut self, metrics: &impl StripMetrics) {
        self.go_to(self.signed_index() + 1, metrics);
    }

    /// Route a pointer event to the matching gesture transition.
    ///
    /// Returns `true` if the event changed the state.
    pub fn handle_pointer(&mut self, event: &PointerEvent, metrics: &impl StripMetrics) -> bool {
        match (event.phase, event.client_x) {
            (PointerPhase::Start, Some(x)) => {
                self.begin_drag(x, metrics);
                true
            }
            (PointerPhase::Move, Some(x)) if self.is_dragging() => {
                let before = self.state.offset_x;
                self.drag_to(x) != before
            }
            (PointerPhase::End | PointerPhase::Cancel, _) => self.end_drag().is_some(),
            _ => false,
        }
    }

    /// Presentation of the current state.
    #[must_use]
    pub fn view(&self) -> CarouselView {
        CarouselView::from_state(&self.state, self.slides.len())
    }

    fn signed_index(&self) -> isize {
        isize::try_from(self.state.active_index).unwrap_or(isize::MAX - 1)
    }
}
