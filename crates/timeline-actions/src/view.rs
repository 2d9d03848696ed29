//! Host capabilities for reading and mutating the page.

use core::fmt;

/// CSS `display` values the handlers assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Block,
    Hidden,
}

impl DisplayMode {
    /// The CSS value written to `style.display`.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Hidden => "none",
        }
    }
}

/// Errors from resolving or mutating an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// No element with this id exists in the current view.
    MissingElement { id: String },
    /// The element exists but is not the expected kind.
    WrongKind { id: String, expected: &'static str },
    /// The host rejected the mutation.
    Host(String),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement { id } => write!(f, "no element with id '{id}'"),
            Self::WrongKind { id, expected } => {
                write!(f, "element '{id}' is not a {expected}")
            }
            Self::Host(msg) => write!(f, "view error: {msg}"),
        }
    }
}

impl std::error::Error for ViewError {}

/// Scoped element lookup and mutation, by element id.
///
/// Methods take `&self`: the underlying page is shared, and several
/// handlers may be in flight at once.
pub trait View {
    /// Set the element's `display` style.
    fn set_display(&self, id: &str, mode: DisplayMode) -> Result<(), ViewError>;

    /// Current value of a text input or textarea.
    fn text_value(&self, id: &str) -> Result<String, ViewError>;

    /// Replace the value of a text input or textarea.
    fn set_text_value(&self, id: &str, value: &str) -> Result<(), ViewError>;
}

/// Blocking user-facing message (a modal alert in the browser).
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<V: View + ?Sized> View for &V {
    fn set_display(&self, id: &str, mode: DisplayMode) -> Result<(), ViewError> {
        (**self).set_display(id, mode)
    }

    fn text_value(&self, id: &str) -> Result<String, ViewError> {
        (**self).text_value(id)
    }

    fn set_text_value(&self, id: &str, value: &str) -> Result<(), ViewError> {
        (**self).set_text_value(id, value)
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}
