//! Control-row composition.
//!
//! The component renders a horizontal row of pressable controls. The
//! row's composition depends on the presentation mode (sizing, label
//! visibility) and the platform capability (native share vs. the
//! clipboard fallback — never both).

use serde::{Deserialize, Serialize};

use crate::platform::ShareCapability;
use crate::request::PresentationMode;

/// A channel a share control dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShareChannel {
    Facebook,
    Twitter,
    /// WhatsApp, via deep link or web client.
    Messaging,
    /// The platform's native share sheet.
    NativeShare,
    /// Clipboard-copy fallback when native share is unavailable.
    CopyLink,
}

impl ShareChannel {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::Messaging => "WhatsApp",
            Self::NativeShare => "Share",
            Self::CopyLink => "Copy link",
        }
    }

    pub fn icon(&self) -> ShareIcon {
        match self {
            Self::Facebook => ShareIcon::Facebook,
            Self::Twitter => ShareIcon::Twitter,
            Self::Messaging => ShareIcon::MessageCircle,
            Self::NativeShare => ShareIcon::Share,
            Self::CopyLink => ShareIcon::Link,
        }
    }
}

/// Icon glyph for a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShareIcon {
    Facebook,
    Twitter,
    MessageCircle,
    Share,
    Link,
}

/// Control sizing per presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlSize {
    /// Small outline button with a visible label.
    Small,
    /// Compact ghost icon button.
    IconOnly,
}

/// One pressable control in the share row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareControl {
    pub channel: ShareChannel,
    pub label: &'static str,
    pub icon: ShareIcon,
    pub size: ControlSize,
    pub show_label: bool,
}

/// Compose the control row: the three external channels in fixed
/// order, then exactly one local action — the native share sheet when
/// the capability probe found one, the clipboard fallback otherwise.
pub fn compose_controls(
    mode: PresentationMode,
    capability: ShareCapability,
) -> Vec<ShareControl> {
    let (size, show_label) = match mode {
        PresentationMode::Default => (ControlSize::Small, true),
        PresentationMode::Minimal => (ControlSize::IconOnly, false),
    };
    let local_action = match capability {
        ShareCapability::NativeShareAvailable => ShareChannel::NativeShare,
        ShareCapability::ClipboardOnly => ShareChannel::CopyLink,
    };
    [
        ShareChannel::Facebook,
        ShareChannel::Twitter,
        ShareChannel::Messaging,
        local_action,
    ]
    .into_iter()
    .map(|channel| ShareControl {
        channel,
        label: channel.display_name(),
        icon: channel.icon(),
        size,
        show_label,
    })
    .collect()
}
