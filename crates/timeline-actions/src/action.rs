//! The three post actions and how their responses are classified.

use crate::transport::{StatusCode, TransportError};

/// A server-side action on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostAction {
    Reply,
    Boost,
    Favourite,
}

impl PostAction {
    pub const ALL: [Self; 3] = [Self::Reply, Self::Boost, Self::Favourite];

    /// Endpoint path, relative to the configured base URL.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Reply => "/reply",
            Self::Boost => "/boost",
            Self::Favourite => "/favourite",
        }
    }

    #[must_use]
    pub const fn success_message(self) -> &'static str {
        match self {
            Self::Reply => "Replied successfully",
            Self::Boost => "Boosted successfully",
            Self::Favourite => "Favourited successfully",
        }
    }

    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Reply => "Failed to reply",
            Self::Boost => "Failed to boost",
            Self::Favourite => "Failed to favourite",
        }
    }

    /// Short name for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reply => "reply",
            Self::Boost => "boost",
            Self::Favourite => "favourite",
        }
    }
}

/// Result of sending an action to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The server answered with a 2xx status.
    Accepted(StatusCode),
    /// The server answered with any other status.
    Rejected(StatusCode),
    /// No response was received.
    TransportFailed(TransportError),
}

impl ActionOutcome {
    #[must_use]
    pub fn from_response(response: Result<StatusCode, TransportError>) -> Self {
        match response {
            Ok(status) if status.is_success() => Self::Accepted(status),
            Ok(status) => Self::Rejected(status),
            Err(err) => Self::TransportFailed(err),
        }
    }

    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The notification shown for this outcome of `action`.
    #[must_use]
    pub const fn message(&self, action: PostAction) -> &'static str {
        match self {
            Self::Accepted(_) => action.success_message(),
            Self::Rejected(_) | Self::TransportFailed(_) => action.failure_message(),
        }
    }
}
