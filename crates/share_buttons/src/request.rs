//! The share request value object.

use serde::{Deserialize, Serialize};

/// How the share controls are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationMode {
    /// Full-size buttons with visible labels; the Twitter intent
    /// carries both title and description.
    #[default]
    Default,
    /// Compact icon-only buttons; the Twitter intent carries the
    /// title only.
    Minimal,
}

/// Content to share.
///
/// Constructed by the caller per render and has no lifecycle of its
/// own — it lives exactly as long as the enclosing render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareRequest {
    /// Human-readable headline.
    pub title: String,
    /// Human-readable summary.
    pub description: String,
    /// Preview image URL. Not used by dispatch; reserved for share
    /// metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Canonical URL of the shared resource. Expected to be a valid
    /// URL; the builders encode it verbatim.
    pub url: String,
    /// Which controls are rendered and at what size.
    #[serde(default)]
    pub presentation: PresentationMode,
}

impl ShareRequest {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image: None,
            url: url.into(),
            presentation: PresentationMode::default(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_presentation(mut self, presentation: PresentationMode) -> Self {
        self.presentation = presentation;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_roundtrip() {
        let request = ShareRequest::new("Post A", "Desc", "https://example.com/a")
            .with_presentation(PresentationMode::Minimal);
        let json = serde_json::to_string(&request).unwrap();
        let parsed: ShareRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.title, "Post A");
        assert_eq!(parsed.presentation, PresentationMode::Minimal);
        assert!(parsed.image.is_none());
    }

    #[test]
    fn test_presentation_defaults_when_absent() {
        let parsed: ShareRequest = serde_json::from_str(
            r#"{"title": "t", "description": "d", "url": "https://example.com"}"#,
        )
        .unwrap();
        assert_eq!(parsed.presentation, PresentationMode::Default);
    }
}
