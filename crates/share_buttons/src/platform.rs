//! The platform capability seam.
//!
//! Everything the dispatcher needs from the host platform lives
//! behind [`SharePlatform`]: the user-agent string, the native-share
//! capability probe, the async clipboard, the native share sheet, and
//! popup windows. The browser implementation is in the
//! `share_buttons_web` crate; tests drive the dispatcher with a fake.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::request::ShareRequest;

/// What the platform offers for the local share action.
///
/// Probed once per render by the dispatcher, never re-checked per
/// press, so the offered control and the dispatched action cannot
/// disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShareCapability {
    /// The platform exposes a native share sheet.
    NativeShareAvailable,
    /// No native share; offer the clipboard-copy fallback instead.
    ClipboardOnly,
}

/// Outcome of presenting the native share sheet.
///
/// Cancellation is a distinguished outcome, not an error: a dismissed
/// share sheet raises no notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NativeShareResult {
    Completed,
    Cancelled,
    Failed(String),
}

/// Outcome of opening an external share window.
///
/// `Blocked` (a popup blocker, usually) is silently inert: the
/// browser security model owns that failure, so the component neither
/// notifies nor retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PopupOutcome {
    Opened,
    Blocked,
}

/// Window name and dimensions for a sized share popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupOptions {
    pub window_name: String,
    pub width: u32,
    pub height: u32,
}

impl PopupOptions {
    /// The standard 600×400 share popup.
    pub fn share_window(window_name: impl Into<String>) -> Self {
        Self {
            window_name: window_name.into(),
            width: 600,
            height: 400,
        }
    }

    /// The `window.open` feature string, e.g. `width=600,height=400`.
    pub fn features(&self) -> String {
        format!("width={},height={}", self.width, self.height)
    }
}

/// Host platform surface the dispatcher runs against.
///
/// The component is single-threaded and event-driven; each operation
/// is an independent fire-and-forget future triggered by a discrete
/// press, so the futures are `?Send` (the browser main thread is not
/// `Send`).
#[async_trait(?Send)]
pub trait SharePlatform {
    /// The client's platform identifier string (user agent).
    fn user_agent(&self) -> String;

    /// Probe for the native share capability.
    fn share_capability(&self) -> ShareCapability;

    /// Place `text` on the system clipboard.
    async fn write_clipboard(&self, text: &str) -> anyhow::Result<()>;

    /// Present the native share sheet for `request`.
    async fn native_share(&self, request: &ShareRequest) -> NativeShareResult;

    /// Open `url` in a new window — sized and named when `options` is
    /// given, a plain `window.open(url)` otherwise.
    fn open_popup(&self, url: &str, options: Option<&PopupOptions>) -> PopupOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_features_string() {
        let options = PopupOptions::share_window("facebook-share");
        assert_eq!(options.features(), "width=600,height=400");
        assert_eq!(options.window_name, "facebook-share");
    }
}
