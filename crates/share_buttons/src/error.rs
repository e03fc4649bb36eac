//! Error kinds surfaced by the dispatcher.

use serde::Serialize;
use thiserror::Error;

/// Failures that reach the user as a transient error notification.
///
/// Both are recovered at the point of the failed operation; neither
/// propagates further up the UI and neither is fatal. A blocked popup
/// is deliberately not represented here — it is a named outcome
/// ([`crate::platform::PopupOutcome::Blocked`]) and stays silent.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ShareError {
    #[error("failed to copy the share link to the clipboard: {0}")]
    ClipboardWriteFailed(String),
    #[error("native share failed: {0}")]
    NativeShareFailed(String),
}
