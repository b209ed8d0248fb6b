//! User-triggered actions: following a link, sharing the page

use crate::clipboard::Clipboard;
use crate::notify::{Notification, Notifier};
use linkcard_validation::is_valid_outbound_url;

/// Shown when a link click is blocked
pub const INVALID_LINK_MESSAGE: &str = "Invalid link URL";
/// Shown after the page URL was copied
pub const SHARE_SUCCESS_MESSAGE: &str = "Link copied to clipboard!";
/// Shown when the page URL could not be copied
pub const SHARE_FAILURE_MESSAGE: &str =
    "Failed to copy. Please copy the URL manually from your browser.";

/// Outcome of a link click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkDecision {
    /// Open this URL
    Navigate(String),
    /// Navigation blocked
    Suppressed,
}

impl LinkDecision {
    /// Whether navigation goes ahead
    #[inline]
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Navigate(_))
    }
}

/// Guard a link click
///
/// Invalid targets are suppressed with an error notification.
pub fn follow_link(url: &str, notifier: &dyn Notifier) -> LinkDecision {
    if is_valid_outbound_url(url) {
        LinkDecision::Navigate(url.trim().to_string())
    } else {
        tracing::debug!("Blocked navigation to {:?}", url);
        notifier.notify(Notification::error(INVALID_LINK_MESSAGE));
        LinkDecision::Suppressed
    }
}

/// Copy the page URL and report the result
///
/// Returns whether the copy succeeded. The profile is not touched.
pub async fn share_profile(
    page_url: &str,
    clipboard: &dyn Clipboard,
    notifier: &dyn Notifier,
) -> bool {
    match clipboard.copy(page_url).await {
        Ok(()) => {
            notifier.notify(Notification::success(SHARE_SUCCESS_MESSAGE));
            true
        }
        Err(e) => {
            tracing::warn!("Failed to copy page url: {}", e);
            notifier.notify(Notification::error(SHARE_FAILURE_MESSAGE));
            false
        }
    }
}
