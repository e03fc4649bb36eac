//! Pure URL builders for the external sharing endpoints.
//!
//! The exact query-parameter names and encodings matter: the target
//! services parse these templates as-is, so every builder is a free
//! function over the request data and nothing else.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::request::{PresentationMode, ShareRequest};

/// Bytes escaped by `encodeURIComponent`: everything except ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Platform identifier substrings that route the messaging link to
/// the mobile deep-link scheme.
const MOBILE_UA_MARKERS: [&str; 4] = ["iphone", "ipad", "ipod", "android"];

/// Percent-encode `text` with `encodeURIComponent` semantics.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Best-effort mobile detection by substring match on the client's
/// platform identifier. This is a heuristic, not a guarantee —
/// unknown agents fall through to the desktop endpoints.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let user_agent = user_agent.to_ascii_lowercase();
    MOBILE_UA_MARKERS
        .iter()
        .any(|marker| user_agent.contains(marker))
}

/// `https://www.facebook.com/sharer/sharer.php?u=<url>&quote=<title>`.
pub fn facebook_share_url(request: &ShareRequest) -> String {
    format!(
        "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
        encode_component(&request.url),
        encode_component(&request.title),
    )
}

/// `https://twitter.com/intent/tweet?url=<url>&text=<title>`.
///
/// In [`PresentationMode::Default`] the tweet text continues with a
/// blank line and the description; the minimal presentation carries
/// the title only.
pub fn twitter_share_url(request: &ShareRequest) -> String {
    let mut url = format!(
        "https://twitter.com/intent/tweet?url={}&text={}",
        encode_component(&request.url),
        encode_component(&request.title),
    );
    if request.presentation == PresentationMode::Default {
        url.push_str("%0A%0A");
        url.push_str(&encode_component(&request.description));
    }
    url
}

/// WhatsApp share link: the `whatsapp://` deep link for mobile
/// agents, the web client otherwise. The message body is title,
/// description, and URL separated by blank lines.
pub fn messaging_share_url(request: &ShareRequest, mobile: bool) -> String {
    let text = format!(
        "{}\n\n{}\n\n{}",
        request.title, request.description, request.url
    );
    let encoded = encode_component(&text);
    if mobile {
        format!("whatsapp://send?text={encoded}")
    } else {
        format!("https://web.whatsapp.com/send?text={encoded}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn request() -> ShareRequest {
        ShareRequest::new("Post A", "Desc", "https://example.com/a")
    }

    fn occurrences(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_encode_component_matches_encode_uri_component() {
        assert_eq!(encode_component("Post A"), "Post%20A");
        assert_eq!(encode_component("a\n\nb"), "a%0A%0Ab");
        assert_eq!(
            encode_component("https://example.com/a?x=1&y=2"),
            "https%3A%2F%2Fexample.com%2Fa%3Fx%3D1%26y%3D2"
        );
        // The characters encodeURIComponent leaves alone.
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("çay & tea"), "%C3%A7ay%20%26%20tea");
    }

    #[test]
    fn test_facebook_url_contains_each_part_exactly_once() {
        let url = facebook_share_url(&request());
        assert_eq!(
            url,
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.com%2Fa&quote=Post%20A"
        );
        assert_eq!(occurrences(&url, "https%3A%2F%2Fexample.com%2Fa"), 1);
        assert_eq!(occurrences(&url, "Post%20A"), 1);
    }

    #[test]
    fn test_twitter_url_full_mode_has_title_then_description() {
        let url = twitter_share_url(&request());
        assert_eq!(
            url,
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Fexample.com%2Fa&text=Post%20A%0A%0ADesc"
        );
        let title_at = url.find("Post%20A").unwrap();
        let description_at = url.find("Desc").unwrap();
        assert!(title_at < description_at);
    }

    #[test]
    fn test_twitter_url_minimal_mode_omits_description() {
        let request = request().with_presentation(PresentationMode::Minimal);
        let url = twitter_share_url(&request);
        assert_eq!(
            url,
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Fexample.com%2Fa&text=Post%20A"
        );
        assert!(!url.contains("Desc"));
    }

    #[test]
    fn test_mobile_user_agent_markers() {
        for agent in [
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)",
            "Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X)",
            "Mozilla/5.0 (iPod touch; CPU iPhone OS 15_0 like Mac OS X)",
            "Mozilla/5.0 (Linux; Android 14; Pixel 8)",
            "mozilla/5.0 (linux; ANDROID 14)",
        ] {
            assert!(is_mobile_user_agent(agent), "expected mobile: {agent}");
        }
        for agent in [
            "Mozilla/5.0 (Windows NT 10.0)",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0)",
            "Mozilla/5.0 (X11; Linux x86_64)",
            "",
        ] {
            assert!(!is_mobile_user_agent(agent), "expected desktop: {agent}");
        }
    }

    #[test]
    fn test_messaging_url_selects_scheme_by_platform() {
        let request = request();
        let mobile = messaging_share_url(&request, true);
        let desktop = messaging_share_url(&request, false);
        assert!(mobile.starts_with("whatsapp://send?text="));
        assert!(desktop.starts_with("https://web.whatsapp.com/send?text="));
        // Same payload either way.
        assert_eq!(
            mobile.trim_start_matches("whatsapp://send?text="),
            desktop.trim_start_matches("https://web.whatsapp.com/send?text=")
        );
    }

    #[test]
    fn test_messaging_url_desktop_end_to_end() {
        let url = messaging_share_url(&request(), false);
        assert_eq!(
            url,
            "https://web.whatsapp.com/send?text=Post%20A%0A%0ADesc%0A%0Ahttps%3A%2F%2Fexample.com%2Fa"
        );
    }
}
