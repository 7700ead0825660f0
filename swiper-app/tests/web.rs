//! Browser tests for the mounted swiper.
//!
//! Run with `wasm-pack test --headless --firefox swiper-app`.

#![cfg(target_arch = "wasm32")]

use swiper_app::{mount_demo, SwiperApp};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

/// Create a fixed-width host element with the given id.
fn host(id: &str) -> HtmlElement {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("document");
    let host = document
        .create_element("div")
        .expect("create div")
        .dyn_into::<HtmlElement>()
        .expect("html element");
    host.set_id(id);
    host.style().set_property("width", "300px").expect("style");
    document.body().expect("body").append_child(&host).expect("append");
    host
}

fn query(host: &HtmlElement, selector: &str) -> HtmlElement {
    host.query_selector(selector)
        .expect("valid selector")
        .expect("element present")
        .dyn_into::<HtmlElement>()
        .expect("html element")
}

fn mouse(event_type: &str, client_x: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_client_x(client_x);
    MouseEvent::new_with_mouse_event_init_dict(event_type, &init).expect("mouse event")
}

#[wasm_bindgen_test]
fn demo_mounts_ten_items() {
    let host = host("swiper-demo");
    let app = mount_demo("swiper-demo").expect("mounted");

    assert_eq!(app.slide_count(), 10);
    let items = host
        .query_selector_all(".swiper-item-container")
        .expect("valid selector");
    assert_eq!(items.length(), 10);
    assert_eq!(
        query(&host, ".swiper-button-prev").class_name(),
        "swiper-button-prev disabled"
    );
}

#[wasm_bindgen_test]
fn missing_container_is_an_error() {
    assert!(mount_demo("no-such-element").is_err());
}

#[wasm_bindgen_test]
fn empty_slides_are_rejected() {
    host("swiper-empty");
    assert!(SwiperApp::new("swiper-empty", "[]").is_err());
}

#[wasm_bindgen_test]
fn next_control_moves_strip() {
    let host = host("swiper-next");
    let app = SwiperApp::new(
        "swiper-next",
        r#"[{"content":"a"},{"content":"b"},{"content":"c"}]"#,
    )
    .expect("mounted");

    query(&host, ".swiper-button-next").click();
    assert_eq!(app.active_index(), 1);

    let transform = query(&host, ".swiper-list")
        .style()
        .get_property_value("transform")
        .expect("transform");
    assert!(transform.starts_with("translate3d(-"), "{transform}");
}

#[wasm_bindgen_test]
fn drag_marks_strip_until_release() {
    let host = host("swiper-drag");
    let app = mount_demo("swiper-drag").expect("mounted");
    let root = query(&host, ".swiper-container");
    let window = web_sys::window().expect("window");

    root.dispatch_event(&mouse("mousedown", 200)).expect("dispatch");
    assert!(app.is_swiping());
    assert!(query(&host, ".swiper-list")
        .class_name()
        .contains("is-swiping"));

    window
        .dispatch_event(&mouse("mousemove", 190))
        .expect("dispatch");
    window
        .dispatch_event(&mouse("mouseup", 190))
        .expect("dispatch");
    assert!(!app.is_swiping());
    assert_eq!(app.active_index(), 0);
}

#[wasm_bindgen_test]
fn dropping_app_removes_widget() {
    let host = host("swiper-drop");
    let app = mount_demo("swiper-drop").expect("mounted");
    drop(app);
    assert!(host
        .query_selector(".swiper-container")
        .expect("valid selector")
        .is_none());
}
