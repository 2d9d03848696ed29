//! The network boundary: JSON POSTs that report only the HTTP status.

use core::fmt;
use core::future::Future;

/// `Content-Type` sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A JSON POST ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonRequest {
    /// Absolute or page-relative URL.
    pub url: String,
    /// UTF-8 JSON body.
    pub body: String,
}

impl JsonRequest {
    #[must_use]
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
        }
    }

    #[must_use]
    pub const fn method(&self) -> &'static str {
        "POST"
    }

    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        JSON_CONTENT_TYPE
    }
}

/// HTTP status of a completed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatusCode(u16);

impl StatusCode {
    pub const OK: Self = Self(200);
    pub const INTERNAL_SERVER_ERROR: Self = Self(500);

    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// 200–299, matching the Fetch API's `Response.ok`.
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 >= 200 && self.0 <= 299
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// DNS, connection, CORS, or similar network-level failure.
    Network(String),
    /// The request could not be built or the response could not be read.
    Host(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Host(msg) => write!(f, "request error: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Sends JSON POSTs.
///
/// No `Send` bound: on wasm the future holds JS handles and is driven by the
/// single-threaded event loop.
pub trait Transport {
    fn post_json(
        &self,
        request: JsonRequest,
    ) -> impl Future<Output = Result<StatusCode, TransportError>>;
}

impl<T: Transport> Transport for &T {
    fn post_json(
        &self,
        request: JsonRequest,
    ) -> impl Future<Output = Result<StatusCode, TransportError>> {
        (**self).post_json(request)
    }
}
