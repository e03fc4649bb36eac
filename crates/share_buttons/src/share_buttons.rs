//! share_buttons — Share content to social platforms and local share targets.
//!
//! A headless share-buttons component. Given a [`ShareRequest`] it
//! composes the row of share controls (Facebook, Twitter, WhatsApp,
//! and either the native share sheet or a clipboard-copy fallback)
//! and dispatches each press:
//! - URL builders for the external sharing endpoints are pure
//!   functions in [`urls`].
//! - Platform capabilities (clipboard, native share, popup windows,
//!   user agent) sit behind the [`SharePlatform`] trait.
//! - The toast surface is a host collaborator behind [`Notifier`].
//!
//! `share_buttons_web` provides the browser implementation of the
//! platform seam.

pub mod controls;
pub mod dispatcher;
pub mod error;
pub mod notify;
pub mod platform;
pub mod request;
pub mod urls;

pub use controls::{ControlSize, ShareChannel, ShareControl, ShareIcon, compose_controls};
pub use dispatcher::{CopyOutcome, DispatchOutcome, ShareDispatcher};
pub use error::ShareError;
pub use notify::Notifier;
pub use platform::{NativeShareResult, PopupOptions, PopupOutcome, ShareCapability, SharePlatform};
pub use request::{PresentationMode, ShareRequest};
