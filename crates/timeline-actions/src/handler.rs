//! Click handlers for the timeline page.
//!
//! The handlers hold no state between invocations. Each one runs
//! synchronously up to the network call, suspends until the response
//! arrives, then performs its view update and notification. Concurrent
//! invocations are independent: nothing is queued, deduplicated, or
//! cancelled.

use core::fmt;

use serde::Serialize;
use tracing::{Instrument, debug, debug_span, info, warn};

use crate::action::{ActionOutcome, PostAction};
use crate::config::HandlerConfig;
use crate::payload::{ActionPayload, ReplyPayload};
use crate::post::PostId;
use crate::transport::{JsonRequest, Transport};
use crate::view::{DisplayMode, Notifier, View, ViewError};

/// Errors that abort a handler before or after the network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// An element the handler needed was absent or of the wrong kind.
    View(ViewError),
    /// The request body could not be serialized.
    Encode(String),
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View(err) => write!(f, "{err}"),
            Self::Encode(msg) => write!(f, "failed to encode request body: {msg}"),
        }
    }
}

impl std::error::Error for HandlerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::View(err) => Some(err),
            Self::Encode(_) => None,
        }
    }
}

impl From<ViewError> for HandlerError {
    fn from(err: ViewError) -> Self {
        Self::View(err)
    }
}

/// Page interaction handler over injected view, notifier, and transport.
pub struct PageHandler<V, N, T> {
    view: V,
    notifier: N,
    transport: T,
    config: HandlerConfig,
}

impl<V, N, T> PageHandler<V, N, T>
where
    V: View,
    N: Notifier,
    T: Transport,
{
    pub fn new(view: V, notifier: N, transport: T) -> Self {
        Self::with_config(view, notifier, transport, HandlerConfig::default())
    }

    pub fn with_config(view: V, notifier: N, transport: T, config: HandlerConfig) -> Self {
        Self {
            view,
            notifier,
            transport,
            config,
        }
    }

    /// Reveal the reply form of `post`.
    ///
    /// Only ever shows the form; hiding happens after a successful reply.
    pub fn toggle_reply_form(&self, post: &PostId) -> Result<(), ViewError> {
        self.view
            .set_display(&post.reply_form_id(), DisplayMode::Block)
            .inspect_err(|err| warn!(%post, error = %err, "reply form toggle failed"))
    }

    /// Send the reply typed into `post`'s textarea, mentioning `username`.
    ///
    /// On acceptance the textarea is cleared and the form hidden. On any
    /// failure the form is left as-is so the text can be resent.
    pub async fn submit_reply(
        &self,
        username: &str,
        post: &PostId,
    ) -> Result<ActionOutcome, HandlerError> {
        let text_id = post.reply_text_id();
        let text = self
            .view
            .text_value(&text_id)
            .inspect_err(|err| warn!(%post, error = %err, "reply text lookup failed"))?;
        let payload = ReplyPayload::mention(post.clone(), username, &text);

        let outcome = self.post_action(PostAction::Reply, post, &payload).await?;
        if outcome.is_accepted() {
            self.view.set_text_value(&text_id, "")?;
            self.view
                .set_display(&post.reply_form_id(), DisplayMode::Hidden)?;
        }
        Ok(outcome)
    }

    pub async fn boost(&self, post: &PostId) -> Result<ActionOutcome, HandlerError> {
        self.post_action(PostAction::Boost, post, &ActionPayload::new(post.clone()))
            .await
    }

    pub async fn favourite(&self, post: &PostId) -> Result<ActionOutcome, HandlerError> {
        self.post_action(PostAction::Favourite, post, &ActionPayload::new(post.clone()))
            .await
    }

    /// POST `payload` to `action`'s endpoint and notify the outcome.
    async fn post_action<P: Serialize>(
        &self,
        action: PostAction,
        post: &PostId,
        payload: &P,
    ) -> Result<ActionOutcome, HandlerError> {
        let body = serde_json::to_string(payload).map_err(|e| HandlerError::Encode(e.to_string()))?;
        let request = JsonRequest::new(self.config.url_for(action), body);
        let span = debug_span!("post_action", action = action.name(), %post);

        async move {
            debug!(url = %request.url, "sending");
            let outcome = ActionOutcome::from_response(self.transport.post_json(request).await);
            match &outcome {
                ActionOutcome::Accepted(status) => info!(%status, "accepted"),
                ActionOutcome::Rejected(status) => warn!(%status, "rejected"),
                ActionOutcome::TransportFailed(err) => warn!(error = %err, "no response"),
            }
            self.notifier.notify(outcome.message(action));
            Ok(outcome)
        }
        .instrument(span)
        .await
    }
}
