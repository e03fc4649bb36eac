//! [`SharePlatform`] backed by the browser window.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use share_buttons::{
    NativeShareResult, PopupOptions, PopupOutcome, ShareCapability, SharePlatform, ShareRequest,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{DomException, ShareData};

/// The browser platform. Stateless; every call goes through the
/// current `window`.
#[derive(Debug, Default)]
pub struct WebSharePlatform;

impl WebSharePlatform {
    pub fn new() -> Self {
        Self
    }

    fn window() -> Result<web_sys::Window> {
        web_sys::window().ok_or_else(|| anyhow!("no window in this context"))
    }
}

fn js_error(value: JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .unwrap_or_else(|| format!("{value:?}"))
}

// The Web Share API rejects with an `AbortError` DOMException when
// the user dismisses the share sheet.
fn is_abort_error(value: &JsValue) -> bool {
    value
        .dyn_ref::<DomException>()
        .is_some_and(|exception| exception.name() == "AbortError")
}

#[async_trait(?Send)]
impl SharePlatform for WebSharePlatform {
    fn user_agent(&self) -> String {
        web_sys::window()
            .and_then(|window| window.navigator().user_agent().ok())
            .unwrap_or_default()
    }

    fn share_capability(&self) -> ShareCapability {
        let has_native_share = web_sys::window().is_some_and(|window| {
            let navigator = window.navigator();
            js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("share"))
                .unwrap_or(false)
        });
        if has_native_share {
            ShareCapability::NativeShareAvailable
        } else {
            ShareCapability::ClipboardOnly
        }
    }

    async fn write_clipboard(&self, text: &str) -> Result<()> {
        let window = Self::window()?;
        let clipboard = window.navigator().clipboard();
        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|error| anyhow!(js_error(error)))
            .context("clipboard write rejected")
    }

    async fn native_share(&self, request: &ShareRequest) -> NativeShareResult {
        let Ok(window) = Self::window() else {
            return NativeShareResult::Failed("no window in this context".into());
        };
        let data = ShareData::new();
        data.set_title(&request.title);
        data.set_text(&request.description);
        data.set_url(&request.url);
        match JsFuture::from(window.navigator().share_with_data(&data)).await {
            Ok(_) => NativeShareResult::Completed,
            Err(error) if is_abort_error(&error) => NativeShareResult::Cancelled,
            Err(error) => NativeShareResult::Failed(js_error(error)),
        }
    }

    fn open_popup(&self, url: &str, options: Option<&PopupOptions>) -> PopupOutcome {
        let Ok(window) = Self::window() else {
            return PopupOutcome::Blocked;
        };
        let opened = match options {
            Some(options) => window.open_with_url_and_target_and_features(
                url,
                &options.window_name,
                &options.features(),
            ),
            None => window.open_with_url(url),
        };
        match opened {
            Ok(Some(_)) => PopupOutcome::Opened,
            // `window.open` returning null means the popup was
            // blocked. Silently inert per the component contract.
            Ok(None) => {
                log::debug!("window.open returned null for {url}");
                PopupOutcome::Blocked
            }
            Err(error) => {
                log::warn!("window.open failed: {}", js_error(error));
                PopupOutcome::Blocked
            }
        }
    }
}
