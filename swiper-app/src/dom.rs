//! DOM construction and event translation.

use swiper_core::{
    view::{
        CONTAINER_CLASS, ITEM_CLASS, ITEM_CONTENT_CLASS, LIST_CLASS, NEXT_CLASS, PREV_CLASS,
    },
    CarouselView, PointerEvent, PointerPhase, PointerSource, Slide, StripMetrics, TouchPoint,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent};

use crate::MountError;

/// Elements making up one mounted swiper.
pub(crate) struct SwiperDom {
    /// Outer container; receives pointer-down.
    pub(crate) root: HtmlElement,
    /// Translated item strip.
    pub(crate) list: HtmlElement,
    pub(crate) prev: HtmlElement,
    pub(crate) next: HtmlElement,
}

impl SwiperDom {
    /// Build the widget under `host`.
    pub(crate) fn build(
        document: &Document,
        host: &Element,
        slides: &[Slide],
    ) -> Result<Self, MountError> {
        let root = create(document, "div", CONTAINER_CLASS)?;
        let list = create(document, "ul", LIST_CLASS)?;

        for slide in slides {
            let item = render_item(document, slide)?;
            list.append_child(&item)?;
        }

        let prev = create(document, "div", PREV_CLASS)?;
        let next = create(document, "div", NEXT_CLASS)?;

        root.append_child(&list)?;
        root.append_child(&prev)?;
        root.append_child(&next)?;
        host.append_child(&root)?;

        Ok(Self {
            root,
            list,
            prev,
            next,
        })
    }

    /// Measurements of the strip as currently laid out.
    pub(crate) fn metrics(&self) -> DomStrip<'_> {
        DomStrip { list: &self.list }
    }

    /// Push a view onto the elements.
    pub(crate) fn apply(&self, view: &CarouselView) {
        if let Err(e) = self
            .list
            .style()
            .set_property("transform", &view.strip_transform())
        {
            tracing::warn!("Failed to set strip transform: {:?}", e);
        }
        self.list.set_class_name(&view.strip_class());
        self.prev.set_class_name(&view.prev_class());
        self.next.set_class_name(&view.next_class());
    }

    /// Detach the widget from the page.
    pub(crate) fn remove(&self) {
        self.root.remove();
    }
}

/// One `<li>` cell showing a slide's text.
fn render_item(document: &Document, slide: &Slide) -> Result<HtmlElement, MountError> {
    let item = create(document, "li", ITEM_CLASS)?;
    let content = create(document, "span", ITEM_CONTENT_CLASS)?;
    content.set_text_content(Some(&slide.content));
    item.append_child(&content)?;
    Ok(item)
}

fn create(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, MountError> {
    let element = document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::Dom(format!("<{tag}> is not an HTML element")))?;
    element.set_class_name(class);
    Ok(element)
}

/// Live measurements of the `<ul>` strip.
pub(crate) struct DomStrip<'a> {
    list: &'a HtmlElement,
}

impl StripMetrics for DomStrip<'_> {
    fn container_width(&self) -> f64 {
        f64::from(self.list.offset_width())
    }

    fn scroll_width(&self) -> f64 {
        f64::from(self.list.scroll_width())
    }
}

/// Reduce a DOM mouse or touch event to a [`PointerEvent`].
///
/// Returns `None` if the event is not of the type `source` implies.
pub(crate) fn pointer_event(
    event: &Event,
    source: PointerSource,
    phase: PointerPhase,
) -> Option<PointerEvent> {
    match source {
        PointerSource::Mouse => event
            .dyn_ref::<MouseEvent>()
            .map(|mouse| PointerEvent::mouse(phase, f64::from(mouse.client_x()))),
        PointerSource::Touch => {
            let touch = event.dyn_ref::<web_sys::TouchEvent>()?;
            let changed = touch.changed_touches();
            let points: Vec<TouchPoint> = (0..changed.length())
                .filter_map(|i| changed.get(i))
                .map(|t| TouchPoint {
                    x: f64::from(t.client_x()),
                })
                .collect();
            Some(PointerEvent::touch(phase, &points))
        }
    }
}
