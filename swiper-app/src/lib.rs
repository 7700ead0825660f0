//! # Swiper WASM Application
//!
//! This crate mounts the Swiper carousel into a web page: it builds the
//! strip and controls with `web-sys`, feeds mouse and touch input into
//! `swiper-core`, and writes the resulting view back to the DOM.
//!
//! ## Usage
//!
//! Build for WASM:
//! ```bash
//! wasm-pack build --target web swiper-app
//! ```
//!
//! Then import in JavaScript:
//! ```javascript
//! import init, { SwiperApp, mountDemo } from './pkg/swiper_app.js';
//!
//! await init();
//! const swiper = new SwiperApp('gallery', JSON.stringify([
//!     { content: 'First' },
//!     { content: 'Second' },
//! ]));
//! swiper.next();
//!
//! // Or ten numbered sample slides:
//! mountDemo('demo');
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod dom;
mod error;
mod gesture;

pub use error::MountError;

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use gloo::events::EventListener;
use swiper_core::{
    sample_slides, Carousel, PointerEvent, PointerPhase, PointerSource, Slide, SwipeConfig,
    DEMO_SLIDE_COUNT,
};
use wasm_bindgen::prelude::*;

use crate::{
    dom::{pointer_event, SwiperDom},
    gesture::GestureSubscription,
};

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init_wasm() {
    console_error_panic_hook::set_once();
    tracing::info!("Swiper WASM initialized");
}

type SwiperHandle = Rc<RefCell<SwiperState>>;

/// Everything the event handlers mutate.
struct SwiperState {
    carousel: Carousel,
    dom: SwiperDom,
    /// Present only while a drag is in progress.
    gesture: Option<GestureSubscription>,
}

impl SwiperState {
    fn render(&self) {
        self.dom.apply(&self.carousel.view());
    }
}

/// A carousel mounted into the page.
#[wasm_bindgen]
pub struct SwiperApp {
    handle: SwiperHandle,
    /// Pointer-down and indicator listeners; live as long as the app.
    _listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl SwiperApp {
    /// Mount a carousel inside the element with id `container_id`.
    ///
    /// `slides_json` is an array of `{ "content": string }` objects.
    ///
    /// # Errors
    ///
    /// Returns an error if the container is missing, the JSON is invalid, or
    /// the slide list is empty.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str, slides_json: &str) -> Result<SwiperApp, JsValue> {
        let slides = Slide::list_from_json(slides_json).map_err(MountError::from)?;
        Ok(Self::mount(container_id, slides, SwipeConfig::default())?)
    }

    /// Mount a carousel with a JSON config such as `{"swipe_limit":0.5}`.
    ///
    /// # Errors
    ///
    /// Returns an error if mounting fails or the config is invalid.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(
        container_id: &str,
        slides_json: &str,
        config_json: &str,
    ) -> Result<SwiperApp, JsValue> {
        let slides = Slide::list_from_json(slides_json).map_err(MountError::from)?;
        let config = SwipeConfig::from_json(config_json).map_err(MountError::from)?;
        Ok(Self::mount(container_id, slides, config)?)
    }

    /// Step back one slide.
    pub fn prev(&self) {
        step(&self.handle, -1);
    }

    /// Step forward one slide.
    pub fn next(&self) {
        step(&self.handle, 1);
    }

    /// Jump to slide `index`, clamped to the valid range.
    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&self, index: isize) {
        if let Ok(mut state) = self.handle.try_borrow_mut() {
            let SwiperState { carousel, dom, .. } = &mut *state;
            carousel.go_to(index, &dom.metrics());
            state.render();
        }
    }

    /// Index of the current slide.
    #[wasm_bindgen(js_name = activeIndex)]
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.handle
            .try_borrow()
            .map(|state| state.carousel.active_index())
            .unwrap_or_default()
    }

    /// Current strip offset in pixels.
    #[wasm_bindgen(js_name = offsetX)]
    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.handle
            .try_borrow()
            .map(|state| state.carousel.offset_x())
            .unwrap_or_default()
    }

    /// Whether a drag is in progress.
    #[wasm_bindgen(js_name = isSwiping)]
    #[must_use]
    pub fn is_swiping(&self) -> bool {
        self.handle
            .try_borrow()
            .map(|state| state.carousel.is_dragging())
            .unwrap_or(false)
    }

    /// Number of slides.
    #[wasm_bindgen(js_name = slideCount)]
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.handle
            .try_borrow()
            .map(|state| state.carousel.slide_count())
            .unwrap_or_default()
    }

    /// Get the current view as a JS object:
    /// `{ offsetX, activeIndex, isSwiping, prevDisabled, nextDisabled }`.
    ///
    /// Returns null if the state is borrowed by an in-flight handler.
    #[wasm_bindgen(js_name = getState)]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn get_state(&self) -> JsValue {
        let Ok(state) = self.handle.try_borrow() else {
            return JsValue::NULL;
        };
        let view = state.carousel.view();

        let obj = js_sys::Object::new();
        let fields = [
            ("offsetX", JsValue::from_f64(view.offset_x)),
            ("activeIndex", JsValue::from_f64(view.active_index as f64)),
            ("isSwiping", JsValue::from_bool(view.is_swiping)),
            ("prevDisabled", JsValue::from_bool(view.prev_disabled)),
            ("nextDisabled", JsValue::from_bool(view.next_disabled)),
        ];
        for (key, value) in fields {
            let _ = js_sys::Reflect::set(&obj, &JsValue::from_str(key), &value);
        }
        obj.into()
    }

    /// Get the full carousel state as JSON.
    #[wasm_bindgen(js_name = getStateJson)]
    #[must_use]
    pub fn get_state_json(&self) -> String {
        self.handle
            .try_borrow()
            .ok()
            .and_then(|state| serde_json::to_string(state.carousel.state()).ok())
            .unwrap_or_default()
    }
}

impl SwiperApp {
    fn mount(
        container_id: &str,
        slides: Vec<Slide>,
        config: SwipeConfig,
    ) -> Result<Self, MountError> {
        let carousel = Carousel::with_config(slides, config)?;

        let window = web_sys::window().ok_or(MountError::NoGlobal("window"))?;
        let document = window.document().ok_or(MountError::NoGlobal("document"))?;
        let host = document
            .get_element_by_id(container_id)
            .ok_or_else(|| MountError::ContainerNotFound(container_id.to_string()))?;

        let dom = SwiperDom::build(&document, &host, carousel.slides())?;
        let state = SwiperState {
            carousel,
            dom,
            gesture: None,
        };
        state.render();
        let handle = Rc::new(RefCell::new(state));

        let listeners = {
            let state = handle.borrow();
            let root = &state.dom.root;
            vec![
                press_listener(root, "mousedown", PointerSource::Mouse, &handle),
                press_listener(root, "touchstart", PointerSource::Touch, &handle),
                indicator_listener(&state.dom.prev, -1, &handle),
                indicator_listener(&state.dom.next, 1, &handle),
            ]
        };

        tracing::info!(
            "Swiper mounted in '{}' with {} slides",
            container_id,
            handle.borrow().carousel.slide_count()
        );

        Ok(Self {
            handle,
            _listeners: listeners,
        })
    }
}

impl Drop for SwiperApp {
    fn drop(&mut self) {
        if let Ok(mut state) = self.handle.try_borrow_mut() {
            state.gesture = None;
            state.dom.remove();
        }
    }
}

/// Mount a carousel of numbered sample slides.
///
/// # Errors
///
/// Returns an error if the container element is not found.
#[wasm_bindgen(js_name = mountDemo)]
pub fn mount_demo(container_id: &str) -> Result<SwiperApp, JsValue> {
    Ok(SwiperApp::mount(
        container_id,
        sample_slides(DEMO_SLIDE_COUNT),
        SwipeConfig::default(),
    )?)
}

/// Pointer-down on the widget: start a drag and subscribe to window events.
fn press_listener(
    root: &web_sys::HtmlElement,
    event_type: &'static str,
    source: PointerSource,
    handle: &SwiperHandle,
) -> EventListener {
    let weak = Rc::downgrade(handle);
    EventListener::new(root, event_type, move |event| {
        if let Some(pointer) = pointer_event(event, source, PointerPhase::Start) {
            on_press(&weak, &pointer);
        }
    })
}

fn on_press(weak: &Weak<RefCell<SwiperState>>, pointer: &PointerEvent) {
    let Some(handle) = weak.upgrade() else {
        return;
    };
    let Ok(mut state) = handle.try_borrow_mut() else {
        return;
    };
    let Some(window) = web_sys::window() else {
        tracing::warn!("No window object; drag ignored");
        return;
    };

    let SwiperState { carousel, dom, .. } = &mut *state;
    if !carousel.handle_pointer(pointer, &dom.metrics()) {
        return;
    }

    // Replacing an existing subscription drops its listeners first.
    state.gesture = None;
    let weak = weak.clone();
    state.gesture = Some(GestureSubscription::attach(&window, move |event| {
        on_gesture_event(&weak, &event);
    }));
    state.render();
}

fn on_gesture_event(weak: &Weak<RefCell<SwiperState>>, pointer: &PointerEvent) {
    let Some(handle) = weak.upgrade() else {
        return;
    };
    let Ok(mut state) = handle.try_borrow_mut() else {
        return;
    };

    let SwiperState { carousel, dom, .. } = &mut *state;
    let changed = carousel.handle_pointer(pointer, &dom.metrics());

    if pointer.phase.is_release() {
        state.gesture = None;
    }
    if changed {
        state.render();
    }
}

/// Click on a prev/next control.
fn indicator_listener(
    control: &web_sys::HtmlElement,
    delta: isize,
    handle: &SwiperHandle,
) -> EventListener {
    let weak = Rc::downgrade(handle);
    EventListener::new(control, "click", move |_event| {
        if let Some(handle) = weak.upgrade() {
            step(&handle, delta);
        }
    })
}

fn step(handle: &SwiperHandle, delta: isize) {
    if let Ok(mut state) = handle.try_borrow_mut() {
        let SwiperState { carousel, dom, .. } = &mut *state;
        let metrics = dom.metrics();
        if delta < 0 {
            carousel.prev(&metrics);
        } else {
            carousel.next(&metrics);
        }
        state.render();
    }
}
