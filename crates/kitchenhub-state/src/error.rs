//! Screen-state error types.
//!
//! Validation failures are caught before any network call; API failures
//! wrap the client error. No error here escalates into a panic - callers
//! either keep previous state or show the message.

use kitchenhub_client::HubApiError;

/// Errors surfaced by screen-state operations.
#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    /// Comment text was empty or whitespace-only; nothing was sent.
    #[error("comment text must not be empty")]
    EmptyComment,
    /// A required name field was empty; nothing was changed.
    #[error("a name is required")]
    MissingName,
    /// The backend call failed.
    #[error(transparent)]
    Api(#[from] HubApiError),
}
