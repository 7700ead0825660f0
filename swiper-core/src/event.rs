//! Pointer input for carousel dragging.
//!
//! Mouse and touch input are reduced to one shape, [`PointerEvent`], that
//! carries only what the drag logic needs: a phase and a horizontal client
//! coordinate.

use serde::{Deserialize, Serialize};

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    /// Button pressed or finger down.
    Start,
    /// Pointer moved while pressed.
    Move,
    /// Button released or finger lifted.
    End,
    /// Touch cancelled by the platform (e.g., palm rejection).
    Cancel,
}

impl PointerPhase {
    /// Whether this phase finishes a gesture.
    #[must_use]
    pub fn is_release(self) -> bool {
        matches!(self, Self::End | Self::Cancel)
    }
}

/// Device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerSource {
    /// Mouse (or pen reported as mouse).
    Mouse,
    /// Touch screen.
    Touch,
}

/// A single changed touch. Only the horizontal coordinate drives the strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    /// X position in client coordinates.
    pub x: f64,
}

/// A mouse or touch event reduced to its horizontal coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Phase of this event.
    pub phase: PointerPhase,
    /// Device that fired the event.
    pub source: PointerSource,
    /// Horizontal client coordinate, if the event carried one.
    pub client_x: Option<f64>,
}

impl PointerEvent {
    /// Create a mouse event at the given client X.
    #[must_use]
    pub fn mouse(phase: PointerPhase, client_x: f64) -> Self {
        Self {
            phase,
            source: PointerSource::Mouse,
            client_x: Some(client_x),
        }
    }

    /// Create a touch event from the touches that changed in it.
    ///
    /// Only the first changed touch is used; a multi-finger drag follows
    /// whichever finger the platform lists first.
    #[must_use]
    pub fn touch(phase: PointerPhase, changed_touches: &[TouchPoint]) -> Self {
        Self {
            phase,
            source: PointerSource::Touch,
            client_x: changed_touches.first().map(|t| t.x),
        }
    }

    /// Create a release event that carries no coordinate.
    #[must_use]
    pub fn release(source: PointerSource, phase: PointerPhase) -> Self {
        debug_assert!(phase.is_release());
        Self {
            phase,
            source,
            client_x: None,
        }
    }
}
