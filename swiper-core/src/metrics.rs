//! Strip measurement.

/// Rendered sizes of the carousel viewport and its item strip.
///
/// Hosts implement this over whatever they render into. The carousel reads
/// it at drag start and on indicator navigation, never during a move.
pub trait StripMetrics {
    /// Visible width of the viewport, in pixels.
    fn container_width(&self) -> f64;

    /// Full scrollable width of the item strip, in pixels.
    fn scroll_width(&self) -> f64;

    /// Most negative offset the strip may rest at.
    fn min_offset_x(&self) -> f64 {
        self.container_width() - self.scroll_width()
    }
}

/// Equal-width slides filling a fixed viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStrip {
    /// Viewport width in pixels.
    pub container_width: f64,
    /// Number of slides on the strip.
    pub slide_count: usize,
}

impl FixedStrip {
    /// Create metrics for `slide_count` slides each `container_width` wide.
    #[must_use]
    pub fn new(container_width: f64, slide_count: usize) -> Self {
        Self {
            container_width,
            slide_count,
        }
    }
}

impl StripMetrics for FixedStrip {
    fn container_width(&self) -> f64 {
        self.container_width
    }

    #[allow(clippy::cast_precision_loss)]
    fn scroll_width(&self) -> f64 {
        self.container_width * self.slide_count as f64
    }
}

/// Sizes measured by the host and handed over as plain numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredStrip {
    /// Viewport width in pixels.
    pub container_width: f64,
    /// Strip scroll width in pixels.
    pub scroll_width: f64,
}

impl StripMetrics for MeasuredStrip {
    fn container_width(&self) -> f64 {
        self.container_width
    }

    fn scroll_width(&self) -> f64 {
        self.scroll_width
    }
}
