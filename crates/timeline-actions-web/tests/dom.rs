//! Browser checks for the DOM-backed view and the exported entry points.
//!
//! Run with `wasm-pack test --headless --firefox crates/timeline-actions-web`.

#![cfg(target_arch = "wasm32")]

use timeline_actions::{DisplayMode, View, ViewError};
use tracing::level_filters::LevelFilter;
use timeline_actions_web::{DomView, configure, submit_reply, toggle_reply_form};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Event, EventInit, HtmlElement, HtmlTextAreaElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Render the reply form markup for `post` into the body.
fn render_post(post: &str) {
    let document = document();
    let form = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    form.set_id(&format!("reply-form-{post}"));
    form.style().set_property("display", "none").unwrap();

    let text = document
        .create_element("textarea")
        .unwrap()
        .dyn_into::<HtmlTextAreaElement>()
        .unwrap();
    text.set_id(&format!("reply-text-{post}"));

    form.append_child(&text).unwrap();
    document.body().unwrap().append_child(&form).unwrap();
}

fn display_of(id: &str) -> String {
    document()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap()
}

#[wasm_bindgen_test]
fn toggle_export_shows_form() {
    render_post("w1");
    render_post("w2");

    toggle_reply_form("w1".into()).unwrap();

    assert_eq!(display_of("reply-form-w1"), "block");
    assert_eq!(display_of("reply-form-w2"), "none");
}

#[wasm_bindgen_test]
fn toggle_export_throws_for_missing_form() {
    assert!(toggle_reply_form("absent".into()).is_err());
}

#[wasm_bindgen_test]
fn dom_view_reads_and_clears_textarea() {
    render_post("w3");
    let view = DomView::new(document());
    view.set_text_value("reply-text-w3", "draft").unwrap();

    assert_eq!(view.text_value("reply-text-w3").unwrap(), "draft");
    view.set_text_value("reply-text-w3", "").unwrap();
    assert_eq!(view.text_value("reply-text-w3").unwrap(), "");

    view.set_display("reply-form-w3", DisplayMode::Hidden).unwrap();
    assert_eq!(display_of("reply-form-w3"), "none");
}

#[wasm_bindgen_test]
fn dom_view_rejects_non_text_elements() {
    render_post("w4");
    let view = DomView::new(document());

    assert_eq!(
        view.text_value("reply-form-w4"),
        Err(ViewError::WrongKind {
            id: "reply-form-w4".into(),
            expected: "text input",
        })
    );
    assert_eq!(
        view.text_value("nope"),
        Err(ViewError::MissingElement { id: "nope".into() })
    );
}

#[wasm_bindgen_test]
fn configure_accepts_string_or_object() {
    configure(JsValue::from_str(r#"{"baseUrl":"/ui"}"#)).unwrap();
    configure(JsValue::UNDEFINED).unwrap();

    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"logLevel".into(), &"debug".into()).unwrap();
    configure(options.into()).unwrap();

    assert!(configure(JsValue::from_str(r#"{"logLevel":"loud"}"#)).is_err());
}

#[wasm_bindgen_test]
fn submit_export_cancels_form_navigation() {
    let init = EventInit::new();
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();

    // No textarea is rendered for this post, so no request goes out.
    submit_reply(event.clone(), "alice".into(), "unrendered".into()).unwrap();

    assert!(event.default_prevented());
}

#[wasm_bindgen_test]
fn rejected_configure_keeps_log_level() {
    configure(JsValue::from_str(r#"{"logLevel":"warn"}"#)).unwrap();
    assert_eq!(LevelFilter::current(), LevelFilter::WARN);

    assert!(configure(JsValue::from_str(r#"{"baseUrl":"/other","logLevel":"loud"}"#)).is_err());
    assert_eq!(LevelFilter::current(), LevelFilter::WARN);
}
