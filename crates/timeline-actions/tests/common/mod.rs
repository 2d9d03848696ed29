//! In-memory page, notifier, and transport for handler tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::future::{Future, ready};

use timeline_actions::{
    DisplayMode, JsonRequest, Notifier, PostId, StatusCode, Transport, TransportError, View,
    ViewError,
};
use tracing::Level;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(Level::DEBUG)
        .try_init();
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Element {
    display: Option<String>,
    value: Option<String>,
}

/// Element store keyed by id. Elements with a `value` behave as text inputs.
#[derive(Debug, Default)]
pub struct RecordingView {
    elements: RefCell<BTreeMap<String, Element>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render what the timeline template renders for one post: a hidden
    /// reply form and an empty textarea.
    pub fn with_post(self, post: &str) -> Self {
        let post = PostId::new(post);
        {
            let mut elements = self.elements.borrow_mut();
            elements.insert(
                post.reply_form_id(),
                Element {
                    display: Some("none".into()),
                    value: None,
                },
            );
            elements.insert(
                post.reply_text_id(),
                Element {
                    display: None,
                    value: Some(String::new()),
                },
            );
        }
        self
    }

    pub fn with_container(self, id: &str) -> Self {
        self.elements
            .borrow_mut()
            .insert(id.to_owned(), Element::default());
        self
    }

    pub fn remove(&self, id: &str) {
        self.elements.borrow_mut().remove(id);
    }

    pub fn type_text(&self, id: &str, text: &str) {
        if let Some(element) = self.elements.borrow_mut().get_mut(id) {
            element.value = Some(text.to_owned());
        }
    }

    pub fn display(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).and_then(|e| e.display.clone())
    }

    pub fn value(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).and_then(|e| e.value.clone())
    }
}

impl View for RecordingView {
    fn set_display(&self, id: &str, mode: DisplayMode) -> Result<(), ViewError> {
        let mut elements = self.elements.borrow_mut();
        let element = elements
            .get_mut(id)
            .ok_or_else(|| ViewError::MissingElement { id: id.to_owned() })?;
        element.display = Some(mode.as_css().to_owned());
        Ok(())
    }

    fn text_value(&self, id: &str) -> Result<String, ViewError> {
        let elements = self.elements.borrow();
        let element = elements
            .get(id)
            .ok_or_else(|| ViewError::MissingElement { id: id.to_owned() })?;
        element.value.clone().ok_or_else(|| ViewError::WrongKind {
            id: id.to_owned(),
            expected: "text input",
        })
    }

    fn set_text_value(&self, id: &str, value: &str) -> Result<(), ViewError> {
        let mut elements = self.elements.borrow_mut();
        let element = elements
            .get_mut(id)
            .ok_or_else(|| ViewError::MissingElement { id: id.to_owned() })?;
        match element.value.as_mut() {
            Some(current) => {
                value.clone_into(current);
                Ok(())
            }
            None => Err(ViewError::WrongKind {
                id: id.to_owned(),
                expected: "text input",
            }),
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_owned());
    }
}

/// Records every request and answers from a script, falling back to a
/// fixed response once the script is exhausted.
#[derive(Debug)]
pub struct ScriptedTransport {
    script: RefCell<VecDeque<Result<StatusCode, TransportError>>>,
    fallback: Result<StatusCode, TransportError>,
    sent: RefCell<Vec<JsonRequest>>,
}

impl ScriptedTransport {
    pub fn responding(status: u16) -> Self {
        Self {
            script: RefCell::new(VecDeque::new()),
            fallback: Ok(StatusCode::new(status)),
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(err: TransportError) -> Self {
        Self {
            script: RefCell::new(VecDeque::new()),
            fallback: Err(err),
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn then(self, response: Result<StatusCode, TransportError>) -> Self {
        self.script.borrow_mut().push_back(response);
        self
    }

    pub fn sent(&self) -> Vec<JsonRequest> {
        self.sent.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    fn post_json(
        &self,
        request: JsonRequest,
    ) -> impl Future<Output = Result<StatusCode, TransportError>> {
        self.sent.borrow_mut().push(request);
        let response = self
            .script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        ready(response)
    }
}
