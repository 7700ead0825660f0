//! Window listeners scoped to a single drag.

use gloo::events::EventListener;
use swiper_core::{PointerEvent, PointerPhase, PointerSource};
use web_sys::EventTarget;

use crate::dom::pointer_event;

/// Window events that continue or finish a drag.
const GESTURE_EVENTS: [(&str, PointerSource, PointerPhase); 5] = [
    ("mousemove", PointerSource::Mouse, PointerPhase::Move),
    ("touchmove", PointerSource::Touch, PointerPhase::Move),
    ("mouseup", PointerSource::Mouse, PointerPhase::End),
    ("touchend", PointerSource::Touch, PointerPhase::End),
    ("touchcancel", PointerSource::Touch, PointerPhase::Cancel),
];

/// Move and release listeners on the window for one drag.
///
/// Listening on the window keeps the drag alive when the pointer leaves the
/// widget. Dropping the subscription removes every listener.
pub(crate) struct GestureSubscription {
    _listeners: Vec<EventListener>,
}

impl GestureSubscription {
    /// Attach listeners to `target`, forwarding translated events to `on_event`.
    pub(crate) fn attach<F>(target: &EventTarget, on_event: F) -> Self
    where
        F: Fn(PointerEvent) + Clone + 'static,
    {
        let listeners = GESTURE_EVENTS
            .iter()
            .map(|&(event_type, source, phase)| {
                let on_event = on_event.clone();
                EventListener::new(target, event_type, move |event| {
                    if let Some(pointer) = pointer_event(event, source, phase) {
                        on_event(pointer);
                    }
                })
            })
            .collect();

        tracing::debug!("Gesture listeners attached");
        Self {
            _listeners: listeners,
        }
    }
}

impl Drop for GestureSubscription {
    fn drop(&mut self) {
        tracing::debug!("Gesture listeners released");
    }
}
