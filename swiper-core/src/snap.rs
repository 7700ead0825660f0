//! Offset arithmetic: elastic clamping while dragging and snapping on release.
//!
//! All functions are pure so the rules can be checked without a gesture in
//! flight. Offsets are in pixels, `0` is the first slide and more negative
//! values scroll later slides into view.

/// Round half toward positive infinity, as browsers do for `Math.round`.
///
/// `f64::round` rounds half away from zero, which would push `-1.5` to `-2`
/// and move the carousel one slide further than a browser host expects.
#[must_use]
pub fn js_round(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Clamp a candidate drag offset, allowing a rubber-band excursion of
/// `container_width * swipe_limit` past either edge.
#[must_use]
pub fn clamp_drag_offset(
    candidate: f64,
    container_width: f64,
    min_offset_x: f64,
    swipe_limit: f64,
) -> f64 {
    let allowance = container_width * swipe_limit;
    let mut offset = candidate;

    if offset > 0.0 {
        offset = offset.min(allowance);
    }

    if offset < min_offset_x {
        offset = min_offset_x.min(offset.max(min_offset_x - allowance));
    }

    offset
}

/// Where a released strip comes to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snap {
    /// Resting offset, a multiple of the container width or the end bound.
    pub offset_x: f64,
    /// Whether the drag crossed the commit threshold.
    pub committed: bool,
}

/// Compute the resting offset for a strip released at `offset_x` after a
/// drag that began at `offset_at_start`.
///
/// A drag that travelled at least `swipe_limit` of the viewport commits and
/// moves to the next boundary in the drag direction. Anything shorter
/// settles on the nearest boundary. The result always lies in
/// `[min_offset_x, 0]`, so overscroll past either edge is reverted.
#[must_use]
pub fn snap_target(
    offset_x: f64,
    offset_at_start: f64,
    container_width: f64,
    min_offset_x: f64,
    swipe_limit: f64,
) -> Snap {
    if offset_x > 0.0 || container_width <= 0.0 {
        return Snap {
            offset_x: 0.0,
            committed: false,
        };
    }

    let diff = offset_at_start - offset_x;
    let committed = diff.abs().floor() >= (container_width * swipe_limit).floor();

    let target = if committed {
        if diff < 0.0 {
            (offset_x / container_width).ceil() * container_width
        } else if offset_x >= min_offset_x {
            (offset_x / container_width).floor() * container_width
        } else {
            min_offset_x
        }
    } else {
        js_round(offset_x / container_width) * container_width
    };
    let target = target.max(min_offset_x).min(0.0);

    Snap {
        // Normalise -0.0 so the first slide always renders as `0px`.
        offset_x: target + 0.0,
        committed,
    }
}

/// Slide index shown at a resting offset, clamped to `[0, slide_count - 1]`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn index_for_offset(offset_x: f64, container_width: f64, slide_count: usize) -> usize {
    if container_width <= 0.0 || slide_count == 0 {
        return 0;
    }
    let raw = (offset_x / container_width).abs().round();
    let last = slide_count - 1;
    if raw >= last as f64 {
        last
    } else {
        raw as usize
    }
}

/// Resting offset for slide `index`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn offset_for_index(index: usize, container_width: f64) -> f64 {
    -(container_width * index as f64) + 0.0
}
