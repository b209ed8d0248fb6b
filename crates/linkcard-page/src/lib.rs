//! LinkCard Page
//!
//! The contract between the profile store and whatever draws the card.
//!
//! # Overview
//!
//! - **ProfileCard**: which actions render, in which order
//! - **follow_link**: live guard before honoring a link click
//! - **share_profile**: copy the page URL and notify the outcome
//! - **Clipboard** / **Notifier**: collaborators supplied by the host UI

#![warn(missing_docs)]

pub mod actions;
pub mod card;
pub mod clipboard;
pub mod config;
pub mod notify;

// Re-exports
pub use actions::{
    follow_link, share_profile, LinkDecision, INVALID_LINK_MESSAGE, SHARE_FAILURE_MESSAGE,
    SHARE_SUCCESS_MESSAGE,
};
pub use card::{CardAction, ProfileCard};
pub use clipboard::{Clipboard, ClipboardError};
pub use config::{FeaturedLink, PageConfig, INSTAGRAM_URL};
pub use notify::{Notification, NotificationKind, Notifier, TracingNotifier, TOAST_DURATION};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
