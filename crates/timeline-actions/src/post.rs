//! Post identifiers and the element ids the page template derives from them.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Prefix of the (initially hidden) reply form container.
pub const REPLY_FORM_PREFIX: &str = "reply-form-";
/// Prefix of the reply textarea.
pub const REPLY_TEXT_PREFIX: &str = "reply-text-";

/// Opaque identifier of a timeline post.
///
/// The value is whatever the server rendered into the page; it is never
/// parsed or normalized. Serializes as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Element id of the reply form container (`reply-form-<id>`).
    #[must_use]
    pub fn reply_form_id(&self) -> String {
        format!("{REPLY_FORM_PREFIX}{}", self.0)
    }

    /// Element id of the reply textarea (`reply-text-<id>`).
    #[must_use]
    pub fn reply_text_id(&self) -> String {
        format!("{REPLY_TEXT_PREFIX}{}", self.0)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for PostId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
