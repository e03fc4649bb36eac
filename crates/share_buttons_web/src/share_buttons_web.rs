//! share_buttons_web — Browser adapter for the share-buttons component.
//!
//! Implements [`share_buttons::SharePlatform`] on top of the Web
//! platform surfaces: the async Clipboard API, the Web Share API
//! (`navigator.share`), `window.open`, and `navigator.userAgent`.
//! Compiles to nothing off wasm.

#![cfg(target_family = "wasm")]

mod platform;

pub use platform::WebSharePlatform;
