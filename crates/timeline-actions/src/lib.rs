#![forbid(unsafe_code)]

//! Interaction handlers for the server-rendered timeline page.
//!
//! Each post on the page carries three affordances: reply, boost, and
//! favourite. This crate implements what happens when one of them is
//! clicked, independent of any browser API:
//!
//! - [`PageHandler::toggle_reply_form`] reveals the post's reply form.
//! - [`PageHandler::submit_reply`] posts `{id, replyText}` to `/reply` and,
//!   on success, clears and hides the form.
//! - [`PageHandler::boost`] / [`PageHandler::favourite`] post `{id}` to
//!   `/boost` / `/favourite`.
//!
//! The host supplies three capabilities: a [`View`] (element lookup and
//! mutation), a [`Notifier`] (blocking user message), and a [`Transport`]
//! (JSON POST returning only the HTTP status). `timeline-actions-web` wires
//! these to `web-sys`; tests wire them to in-memory fakes.
//!
//! Every network call resolves to an [`ActionOutcome`]. A transport failure
//! produces the same "Failed to ..." notification as a non-success status.

pub mod action;
pub mod config;
pub mod handler;
pub mod payload;
pub mod post;
pub mod transport;
pub mod view;

pub use action::{ActionOutcome, PostAction};
pub use config::{ConfigError, HandlerConfig};
pub use handler::{HandlerError, PageHandler};
pub use payload::{ActionPayload, ReplyPayload};
pub use post::PostId;
pub use transport::{JSON_CONTENT_TYPE, JsonRequest, StatusCode, Transport, TransportError};
pub use view::{DisplayMode, Notifier, View, ViewError};
