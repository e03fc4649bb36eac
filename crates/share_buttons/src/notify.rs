//! The transient-notification seam.
//!
//! The toast subsystem itself belongs to the host; the dispatcher
//! only needs the two presentation variants.

/// Host toast surface. Both variants are short-lived, non-blocking
/// messages that dismiss themselves.
pub trait Notifier {
    /// Informational toast.
    fn show_info(&self, title: &str, description: &str);
    /// Error toast.
    fn show_error(&self, title: &str, description: &str);
}

/// Toast copy used by the dispatcher. Hosts that localize can wrap
/// [`Notifier`] and translate on the way through.
pub mod messages {
    pub const COPY_SUCCESS_TITLE: &str = "Link copied!";
    pub const COPY_SUCCESS_BODY: &str = "The share link was copied to your clipboard.";
    pub const ERROR_TITLE: &str = "Error!";
    pub const COPY_FAILURE_BODY: &str = "Something went wrong while copying the link.";
    pub const SHARE_FAILURE_BODY: &str = "Something went wrong while sharing.";
}
