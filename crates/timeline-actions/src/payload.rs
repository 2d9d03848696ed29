//! JSON request bodies.

use serde::Serialize;

use crate::post::PostId;

/// Body of `POST /reply`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyPayload {
    pub id: PostId,
    #[serde(rename = "replyText")]
    pub reply_text: String,
}

impl ReplyPayload {
    /// Build a reply that mentions `username` ahead of the user's text.
    ///
    /// The text is used verbatim: no trimming, no escaping, and an empty
    /// input still yields `"@username "`.
    #[must_use]
    pub fn mention(id: PostId, username: &str, text: &str) -> Self {
        Self {
            id,
            reply_text: format!("@{username} {text}"),
        }
    }
}

/// Body of `POST /boost` and `POST /favourite`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionPayload {
    pub id: PostId,
}

impl ActionPayload {
    #[must_use]
    pub fn new(id: PostId) -> Self {
        Self { id }
    }
}
