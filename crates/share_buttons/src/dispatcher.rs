//! Share dispatch — one operation per channel, plus the notification
//! policy from the component contract.

use std::rc::Rc;

use serde::Serialize;

use crate::controls::{ShareChannel, ShareControl, compose_controls};
use crate::error::ShareError;
use crate::notify::{Notifier, messages};
use crate::platform::{
    NativeShareResult, PopupOptions, PopupOutcome, ShareCapability, SharePlatform,
};
use crate::request::ShareRequest;
use crate::urls;

/// Outcome of the clipboard-copy action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CopyOutcome {
    Copied,
    Failed(ShareError),
}

/// Outcome of a dispatched control press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DispatchOutcome {
    Popup(PopupOutcome),
    NativeShare(NativeShareResult),
    Copy(CopyOutcome),
}

/// Dispatches share actions for one rendered control row.
///
/// Construction probes the platform capability exactly once; every
/// press during the render uses the probed value.
pub struct ShareDispatcher {
    platform: Rc<dyn SharePlatform>,
    notifier: Rc<dyn Notifier>,
    capability: ShareCapability,
}

impl ShareDispatcher {
    pub fn new(platform: Rc<dyn SharePlatform>, notifier: Rc<dyn Notifier>) -> Self {
        let capability = platform.share_capability();
        log::debug!("share capability probe: {capability:?}");
        Self {
            platform,
            notifier,
            capability,
        }
    }

    pub fn capability(&self) -> ShareCapability {
        self.capability
    }

    /// The control row for `request`'s presentation mode.
    pub fn controls(&self, request: &ShareRequest) -> Vec<ShareControl> {
        compose_controls(request.presentation, self.capability)
    }

    /// Route a pressed control to its operation.
    pub async fn dispatch(
        &self,
        request: &ShareRequest,
        channel: ShareChannel,
    ) -> DispatchOutcome {
        match channel {
            ShareChannel::Facebook => DispatchOutcome::Popup(self.open_facebook_share(request)),
            ShareChannel::Twitter => DispatchOutcome::Popup(self.open_twitter_share(request)),
            ShareChannel::Messaging => DispatchOutcome::Popup(self.open_messaging_share(request)),
            ShareChannel::NativeShare => {
                DispatchOutcome::NativeShare(self.native_share(request).await)
            }
            ShareChannel::CopyLink => DispatchOutcome::Copy(self.copy_link(request).await),
        }
    }

    /// Open the Facebook sharer in a sized popup.
    pub fn open_facebook_share(&self, request: &ShareRequest) -> PopupOutcome {
        self.open_sized(urls::facebook_share_url(request), "facebook-share")
    }

    /// Open the Twitter intent in a sized popup.
    pub fn open_twitter_share(&self, request: &ShareRequest) -> PopupOutcome {
        self.open_sized(urls::twitter_share_url(request), "twitter-share")
    }

    /// Open the WhatsApp link — the deep link on mobile agents, the
    /// web client otherwise — as a plain, unsized window.
    pub fn open_messaging_share(&self, request: &ShareRequest) -> PopupOutcome {
        let mobile = urls::is_mobile_user_agent(&self.platform.user_agent());
        let url = urls::messaging_share_url(request, mobile);
        let outcome = self.platform.open_popup(&url, None);
        if outcome == PopupOutcome::Blocked {
            log::debug!("messaging share window blocked");
        }
        outcome
    }

    // A blocked popup is silently inert: no toast, no retry.
    fn open_sized(&self, url: String, window_name: &str) -> PopupOutcome {
        let options = PopupOptions::share_window(window_name);
        let outcome = self.platform.open_popup(&url, Some(&options));
        if outcome == PopupOutcome::Blocked {
            log::debug!("{window_name} window blocked");
        }
        outcome
    }

    /// Present the native share sheet. A dismissed sheet raises
    /// nothing; any other failure raises exactly one error toast.
    pub async fn native_share(&self, request: &ShareRequest) -> NativeShareResult {
        let result = self.platform.native_share(request).await;
        match &result {
            NativeShareResult::Completed => {}
            NativeShareResult::Cancelled => {
                log::debug!("native share dismissed");
            }
            NativeShareResult::Failed(reason) => {
                let error = ShareError::NativeShareFailed(reason.clone());
                log::warn!("{error}");
                self.notifier
                    .show_error(messages::ERROR_TITLE, messages::SHARE_FAILURE_BODY);
            }
        }
        result
    }

    /// Copy the canonical URL to the clipboard. Exactly one toast
    /// either way: info on success, error on failure.
    pub async fn copy_link(&self, request: &ShareRequest) -> CopyOutcome {
        match self.platform.write_clipboard(&request.url).await {
            Ok(()) => {
                self.notifier
                    .show_info(messages::COPY_SUCCESS_TITLE, messages::COPY_SUCCESS_BODY);
                CopyOutcome::Copied
            }
            Err(error) => {
                let error = ShareError::ClipboardWriteFailed(format!("{error:#}"));
                log::warn!("{error}");
                self.notifier
                    .show_error(messages::ERROR_TITLE, messages::COPY_FAILURE_BODY);
                CopyOutcome::Failed(error)
            }
        }
    }
}
