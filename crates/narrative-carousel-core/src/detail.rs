//! Detail (popup) presentation port.

use serde::Serialize;

/// Copy shown inside a detail popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailContent {
    /// Popup title.
    pub title: String,
    /// Popup body.
    pub body: String,
}

/// Host capability that opens a modal detail view.
///
/// The host reports the popup's "opened" and "closed" signals back to the
/// component as separate inputs.
pub trait DetailPresenter: Send + Sync {
    /// Opens a popup showing `content`.
    fn open_detail(&self, content: DetailContent);
}
