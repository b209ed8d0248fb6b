//! Canonical default profile
//!
//! [`ProfileDefaults`] is the only place the default record comes from: the
//! loader falls back to it and the email backfill reads its address.

use crate::record::{LinkEntry, ProfileRecord};
use serde::{Deserialize, Serialize};

/// Default display name
pub const DEFAULT_DISPLAY_NAME: &str = "Jujara Irfan shokat";
/// Current default bio
pub const DEFAULT_BIO: &str = "Creative professional & digital enthusiast. Let's connect!";
/// Bio shipped by earlier versions, refreshed on load
pub const LEGACY_DEFAULT_BIO: &str =
    "Welcome to my page! Connect with me through the links below.";
/// Default phone number
pub const DEFAULT_PHONE: &str = "9687626609";
/// Default contact email
pub const DEFAULT_EMAIL: &str = "ae560919@gmail.com";
/// Label of the link every profile carries
pub const SNAPCHAT_LABEL: &str = "Snapchat";
/// URL of the link every profile carries
pub const SNAPCHAT_URL: &str =
    "https://www.snapchat.com/add/irfan_jujara1?share_id=C0cEQ9XkCtE&locale=en-US";

/// Factory for the default profile record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileDefaults {
    profile: ProfileRecord,
}

impl ProfileDefaults {
    /// Defaults shipped with the page
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            profile: ProfileRecord {
                display_name: DEFAULT_DISPLAY_NAME.to_string(),
                bio: DEFAULT_BIO.to_string(),
                phone: DEFAULT_PHONE.to_string(),
                email: Some(DEFAULT_EMAIL.to_string()),
                links: vec![LinkEntry::new(SNAPCHAT_LABEL, SNAPCHAT_URL)],
            },
        }
    }

    /// Use a custom default record
    #[inline]
    #[must_use]
    pub fn new(profile: ProfileRecord) -> Self {
        Self { profile }
    }

    /// Fresh copy of the default record
    #[inline]
    #[must_use]
    pub fn profile(&self) -> ProfileRecord {
        self.profile.clone()
    }

    /// Default bio
    #[inline]
    #[must_use]
    pub fn bio(&self) -> &str {
        &self.profile.bio
    }

    /// Default email, if the defaults carry one
    #[inline]
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.profile.email.as_deref()
    }
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_complete() {
        let profile = ProfileDefaults::builtin().profile();
        assert!(!profile.display_name.is_empty());
        assert!(!profile.bio.is_empty());
        assert!(profile.has_phone());
        assert_eq!(profile.email.as_deref(), Some(DEFAULT_EMAIL));
        assert_eq!(profile.links, vec![LinkEntry::new(SNAPCHAT_LABEL, SNAPCHAT_URL)]);
    }

    #[test]
    fn accessors_read_from_the_same_record() {
        let defaults = ProfileDefaults::builtin();
        assert_eq!(defaults.bio(), defaults.profile().bio);
        assert_eq!(defaults.email(), defaults.profile().email.as_deref());
        assert_ne!(defaults.bio(), LEGACY_DEFAULT_BIO);
    }
}
