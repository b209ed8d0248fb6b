//! Card view model
//!
//! Decides which actions a profile renders. Presentation is left to the UI.

use crate::config::PageConfig;
use linkcard_profile::{is_excluded, ProfileRecord};
use linkcard_validation::{
    create_safe_mailto_link, create_tel_link, is_valid_outbound_url, validate_email,
};
use serde::Serialize;

/// One button on the card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardAction {
    /// Dial the profile's phone number
    Call {
        /// `tel:` link
        href: String,
    },
    /// Write to the profile's email address
    Email {
        /// `mailto:` link
        href: String,
    },
    /// Dedicated social button
    Featured {
        /// Button text
        label: String,
        /// Target
        href: String,
    },
    /// Stored outbound link
    Link {
        /// Index in the stored link list
        index: usize,
        /// Button text
        label: String,
        /// Raw target, checked again when followed
        href: String,
    },
}

impl CardAction {
    /// Button text
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Call { .. } => "Call me",
            Self::Email { .. } => "Send email",
            Self::Featured { label, .. } | Self::Link { label, .. } => label,
        }
    }

    /// Link target
    #[must_use]
    pub fn href(&self) -> &str {
        match self {
            Self::Call { href }
            | Self::Email { href }
            | Self::Featured { href, .. }
            | Self::Link { href, .. } => href,
        }
    }
}

/// Everything the UI needs to draw the card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCard {
    /// Card title
    pub display_name: String,
    /// Bio text
    pub bio: String,
    /// Buttons in display order
    pub actions: Vec<CardAction>,
}

impl ProfileCard {
    /// Build the card for `profile`
    ///
    /// Order: call, email, featured button, then stored links that survive
    /// the exclusion rules. Call needs a non-empty phone with at least one
    /// digit; email needs a non-empty address that passes validation.
    #[must_use]
    pub fn build(profile: &ProfileRecord, config: &PageConfig) -> Self {
        let mut actions = Vec::new();

        if profile.has_phone() {
            if let Some(href) = create_tel_link(&profile.phone) {
                actions.push(CardAction::Call { href });
            }
        }

        if let Some(email) = profile.email.as_deref() {
            if !email.trim().is_empty() && validate_email(email).is_ok() {
                actions.push(CardAction::Email {
                    href: create_safe_mailto_link(email),
                });
            }
        }

        if let Some(featured) = &config.featured {
            if is_valid_outbound_url(&featured.url) {
                actions.push(CardAction::Featured {
                    label: featured.label.clone(),
                    href: featured.url.clone(),
                });
            } else {
                tracing::warn!("Featured link has an invalid url: {}", featured.url);
            }
        }

        actions.extend(
            profile
                .links
                .iter()
                .enumerate()
                .filter(|(_, link)| !is_excluded(&config.exclusions, link))
                .map(|(index, link)| CardAction::Link {
                    index,
                    label: link.label.clone(),
                    href: link.url.clone(),
                }),
        );

        Self {
            display_name: profile.display_name.clone(),
            bio: profile.bio.clone(),
            actions,
        }
    }

    /// Stored-link actions only
    pub fn links(&self) -> impl Iterator<Item = &CardAction> {
        self.actions
            .iter()
            .filter(|a| matches!(a, CardAction::Link { .. }))
    }
}
