#![forbid(unsafe_code)]

//! Browser bindings for the timeline page handlers.
//!
//! The server-rendered timeline calls these from inline handlers:
//!
//! ```html
//! <span onclick="toggleReplyForm('{{.ID}}')">↩️</span>
//! <span onclick="boost('{{.ID}}')">🔄</span>
//! <span onclick="favourite('{{.ID}}')">⭐</span>
//! <form onsubmit="submitReply(event, '{{.Account.Username}}', '{{.ID}}'); return false;">
//! ```
//!
//! Each export wraps a shared [`timeline_actions::PageHandler`] backed by
//! the document ([`DomView`]), `window.alert` ([`AlertNotifier`]), and
//! `window.fetch` ([`FetchTransport`]). Network actions are spawned on the
//! JS event loop and return immediately.
//!
//! [`console`] holds the `tracing` sink; it is platform-independent so it
//! can be tested natively.

pub mod console;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{
    AlertNotifier, DomView, FetchTransport, boost, configure, favourite, submit_reply,
    toggle_reply_form,
};
