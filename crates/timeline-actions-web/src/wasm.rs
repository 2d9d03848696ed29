#![forbid(unsafe_code)]

//! `wasm-bindgen` exports and the `web-sys` implementations of the handler
//! capabilities. Only compiled on `wasm32` targets.

use core::future::Future;
use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{JSON, Reflect};
use timeline_actions::{
    DisplayMode, HandlerConfig, JsonRequest, Notifier, PageHandler, PostId, StatusCode,
    Transport, TransportError, View, ViewError,
};
use tracing::{Level, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    Document, Element, Event, Headers, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
    Request, RequestCredentials, RequestInit, Response, Window,
};

use crate::console::{ConsoleMethod, ConsoleSink, LevelHandle, console_subscriber, set_level};

type WebHandler = PageHandler<DomView, AlertNotifier, FetchTransport>;

thread_local! {
    static HANDLER: RefCell<Option<Rc<WebHandler>>> = const { RefCell::new(None) };
    static LOG_LEVEL: RefCell<Option<LevelHandle>> = const { RefCell::new(None) };
}

fn console_call(method: &str, msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(func) = Reflect::get(&console, &method.into()) else {
        return;
    };
    let Ok(func) = func.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = func.call1(&console, &JsValue::from_str(msg));
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = if let Some(loc) = info.location() {
                format!(
                    "panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                )
            } else {
                format!("panic: {info}")
            };
            console_call("error", &msg);
        }));
    });
}

#[derive(Debug, Clone, Copy, Default)]
struct JsConsole;

impl ConsoleSink for JsConsole {
    fn emit(&self, method: ConsoleMethod, line: &str) {
        console_call(method.name(), line);
    }
}

/// Install the console subscriber, or adjust its level if already installed.
fn install_logging(level: Level) {
    LOG_LEVEL.with(|slot| {
        let mut slot = slot.borrow_mut();
        if let Some(handle) = slot.as_ref() {
            if let Err(err) = set_level(handle, level) {
                console_call("error", &format!("failed to change log level: {err}"));
            }
            return;
        }
        let (subscriber, handle) = console_subscriber(JsConsole, level);
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            *slot = Some(handle);
        }
    });
}

/// Best-effort text for a thrown JS value.
fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

fn to_js(err: impl core::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// [`View`] over the live document.
pub struct DomView {
    document: Document,
}

impl DomView {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Result<Element, ViewError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| ViewError::MissingElement { id: id.to_owned() })
    }
}

impl View for DomView {
    fn set_display(&self, id: &str, mode: DisplayMode) -> Result<(), ViewError> {
        let element = self
            .element(id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ViewError::WrongKind {
                id: id.to_owned(),
                expected: "HTML element",
            })?;
        element
            .style()
            .set_property("display", mode.as_css())
            .map_err(|err| ViewError::Host(describe(&err)))
    }

    fn text_value(&self, id: &str) -> Result<String, ViewError> {
        let element = self.element(id)?;
        if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            return Ok(area.value());
        }
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Ok(input.value());
        }
        Err(ViewError::WrongKind {
            id: id.to_owned(),
            expected: "text input",
        })
    }

    fn set_text_value(&self, id: &str, value: &str) -> Result<(), ViewError> {
        let element = self.element(id)?;
        if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
            return Ok(());
        }
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
            return Ok(());
        }
        Err(ViewError::WrongKind {
            id: id.to_owned(),
            expected: "text input",
        })
    }
}

/// [`Notifier`] backed by `window.alert`.
pub struct AlertNotifier {
    window: Window,
}

impl AlertNotifier {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            warn!(error = %describe(&err), text = message, "alert failed");
        }
    }
}

/// [`Transport`] backed by `window.fetch`.
///
/// Same-origin credentials are included so the session cookie reaches the
/// server; no other headers are added.
pub struct FetchTransport {
    window: Window,
}

impl FetchTransport {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Transport for FetchTransport {
    fn post_json(
        &self,
        request: JsonRequest,
    ) -> impl Future<Output = Result<StatusCode, TransportError>> {
        fetch(self.window.clone(), request)
    }
}

async fn fetch(window: Window, request: JsonRequest) -> Result<StatusCode, TransportError> {
    let host = |err: JsValue| TransportError::Host(describe(&err));

    let headers = Headers::new().map_err(host)?;
    headers
        .set("Content-Type", request.content_type())
        .map_err(host)?;

    let init = RequestInit::new();
    init.set_method(request.method());
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&request.body));
    init.set_credentials(RequestCredentials::SameOrigin);

    let fetch_request = Request::new_with_str_and_init(&request.url, &init).map_err(host)?;
    let response = JsFuture::from(window.fetch_with_request(&fetch_request))
        .await
        .map_err(|err| TransportError::Network(describe(&err)))?;
    let response = response.dyn_into::<Response>().map_err(host)?;
    Ok(StatusCode::new(response.status()))
}

// ---------------------------------------------------------------------------
// Handler lifecycle
// ---------------------------------------------------------------------------

fn build_handler(config: HandlerConfig) -> Result<WebHandler, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    Ok(PageHandler::with_config(
        DomView::new(document),
        AlertNotifier::new(window.clone()),
        FetchTransport::new(window),
        config,
    ))
}

/// The shared handler, built with the default configuration on first use.
fn handler() -> Result<Rc<WebHandler>, JsValue> {
    let existing = HANDLER.with(|slot| slot.borrow().clone());
    if let Some(handler) = existing {
        return Ok(handler);
    }
    let handler = Rc::new(build_handler(HandlerConfig::default())?);
    HANDLER.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&handler)));
    Ok(handler)
}

fn parse_options(options: &JsValue) -> Result<HandlerConfig, JsValue> {
    let json = if options.is_undefined() || options.is_null() {
        "{}".to_owned()
    } else if let Some(text) = options.as_string() {
        text
    } else {
        JSON::stringify(options).map(String::from)?
    };
    HandlerConfig::from_json(&json).map_err(to_js)
}

// ---------------------------------------------------------------------------
// Exports
// ---------------------------------------------------------------------------

#[wasm_bindgen(start)]
pub fn wasm_start() {
    install_panic_hook();
    install_logging(Level::INFO);
}

/// Replace the handler configuration.
///
/// Accepts a JSON string or a plain object (`{ baseUrl, logLevel }`).
/// Nothing changes unless the whole configuration is valid. Requests already in flight finish with the configuration they started
/// with.
#[wasm_bindgen]
pub fn configure(options: JsValue) -> Result<(), JsValue> {
    let config = parse_options(&options)?;
    let level = config.level().map_err(to_js)?;
    let handler = Rc::new(build_handler(config)?);
    install_logging(level);
    HANDLER.with(|slot| *slot.borrow_mut() = Some(handler));
    Ok(())
}

/// Reveal the reply form of post `post_id`. Throws if the form is missing.
#[wasm_bindgen(js_name = toggleReplyForm)]
pub fn toggle_reply_form(post_id: String) -> Result<(), JsValue> {
    handler()?
        .toggle_reply_form(&PostId::new(post_id))
        .map_err(to_js)
}

/// Form `onsubmit` handler: suppresses navigation and sends the reply.
#[wasm_bindgen(js_name = submitReply)]
pub fn submit_reply(event: Event, username: String, post_id: String) -> Result<(), JsValue> {
    event.prevent_default();
    let handler = handler()?;
    spawn_local(async move {
        let post = PostId::new(post_id);
        if let Err(err) = handler.submit_reply(&username, &post).await {
            warn!(%post, error = %err, "reply not completed");
        }
    });
    Ok(())
}

#[wasm_bindgen]
pub fn boost(id: String) -> Result<(), JsValue> {
    let handler = handler()?;
    spawn_local(async move {
        let post = PostId::new(id);
        if let Err(err) = handler.boost(&post).await {
            warn!(%post, error = %err, "boost not completed");
        }
    });
    Ok(())
}

#[wasm_bindgen]
pub fn favourite(id: String) -> Result<(), JsValue> {
    let handler = handler()?;
    spawn_local(async move {
        let post = PostId::new(id);
        if let Err(err) = handler.favourite(&post).await {
            warn!(%post, error = %err, "favourite not completed");
        }
    });
    Ok(())
}
