//! Store configuration
//!
//! Everything the migration chain treats as data lives here: storage key
//! names, the canonical link, the legacy bio and the link exclusion rules.
//! All fields default, so a config file only needs to name what it changes.

use crate::defaults::{ProfileDefaults, LEGACY_DEFAULT_BIO, SNAPCHAT_LABEL, SNAPCHAT_URL};
use crate::error::ConfigError;
use crate::record::LinkEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Storage key for the profile record
pub const PROFILE_KEY: &str = "linktree_profile_v1";
/// Marker key of the canonical-link step
pub const CANONICAL_LINK_MARKER_KEY: &str = "linktree_snapchat_migration_v1";
/// Marker key of the email backfill step
pub const EMAIL_MARKER_KEY: &str = "linktree_email_migration_v1";
/// Marker key of the bio refresh step
pub const BIO_MARKER_KEY: &str = "linktree_bio_migration_v1";

/// Key names in the backing store
///
/// These must stay stable across releases or stored profiles are orphaned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    /// Profile JSON
    pub profile: String,
    /// Canonical-link marker
    pub canonical_link_marker: String,
    /// Email backfill marker
    pub email_marker: String,
    /// Bio refresh marker
    pub bio_marker: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            profile: PROFILE_KEY.to_string(),
            canonical_link_marker: CANONICAL_LINK_MARKER_KEY.to_string(),
            email_marker: EMAIL_MARKER_KEY.to_string(),
            bio_marker: BIO_MARKER_KEY.to_string(),
        }
    }
}

impl StorageKeys {
    fn named(&self) -> [(&'static str, &str); 4] {
        [
            ("profile", &self.profile),
            ("canonical_link_marker", &self.canonical_link_marker),
            ("email_marker", &self.email_marker),
            ("bio_marker", &self.bio_marker),
        ]
    }
}

/// Part of a link an exclusion rule looks at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchScope {
    /// Label only
    Label,
    /// URL only
    Url,
    /// Label or URL
    #[default]
    Any,
}

/// Case-insensitive substring rule hiding a link
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExclusionRule {
    /// Substring to look for
    pub needle: String,
    /// Where to look
    #[serde(default)]
    pub scope: MatchScope,
}

impl ExclusionRule {
    /// Rule on the label
    #[inline]
    pub fn label(needle: impl Into<String>) -> Self {
        Self::with_scope(needle, MatchScope::Label)
    }

    /// Rule on the URL
    #[inline]
    pub fn url(needle: impl Into<String>) -> Self {
        Self::with_scope(needle, MatchScope::Url)
    }

    /// Rule on label or URL
    #[inline]
    pub fn any(needle: impl Into<String>) -> Self {
        Self::with_scope(needle, MatchScope::Any)
    }

    fn with_scope(needle: impl Into<String>, scope: MatchScope) -> Self {
        Self {
            needle: needle.into(),
            scope,
        }
    }

    /// Whether `link` is hidden by this rule
    #[must_use]
    pub fn matches(&self, link: &LinkEntry) -> bool {
        let needle = self.needle.to_lowercase();
        let in_label = || link.label.to_lowercase().contains(&needle);
        let in_url = || link.url.to_lowercase().contains(&needle);
        match self.scope {
            MatchScope::Label => in_label(),
            MatchScope::Url => in_url(),
            MatchScope::Any => in_label() || in_url(),
        }
    }
}

/// Rules hiding services that have a dedicated button or were retired
#[must_use]
pub fn default_exclusions() -> Vec<ExclusionRule> {
    vec![
        ExclusionRule::label("twitter"),
        ExclusionRule::url("twitter.com"),
        ExclusionRule::url("x.com"),
        ExclusionRule::label("instagram"),
        ExclusionRule::url("instagram.com"),
    ]
}

/// Whether any rule hides `link`
#[must_use]
pub fn is_excluded(rules: &[ExclusionRule], link: &LinkEntry) -> bool {
    rules.iter().any(|rule| rule.matches(link))
}

/// Link every profile is migrated to carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalLink {
    /// Label the link is normalized to
    pub label: String,
    /// Exact URL identifying the link
    pub url: String,
}

impl Default for CanonicalLink {
    fn default() -> Self {
        Self {
            label: SNAPCHAT_LABEL.to_string(),
            url: SNAPCHAT_URL.to_string(),
        }
    }
}

/// Profile store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Storage key names
    pub keys: StorageKeys,
    /// Link ensured by the first migration step
    pub canonical_link: CanonicalLink,
    /// Bio replaced by the current default when matched exactly
    pub legacy_bio: Option<String>,
    /// Link exclusion rules, re-applied on every load
    pub exclusions: Vec<ExclusionRule>,
    /// Default record
    pub defaults: ProfileDefaults,
}

impl StoreConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With storage keys
    #[inline]
    #[must_use]
    pub fn with_keys(mut self, keys: StorageKeys) -> Self {
        self.keys = keys;
        self
    }

    /// With canonical link
    #[inline]
    #[must_use]
    pub fn with_canonical_link(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.canonical_link = CanonicalLink {
            label: label.into(),
            url: url.into(),
        };
        self
    }

    /// With legacy bio (`None` disables the refresh)
    #[inline]
    #[must_use]
    pub fn with_legacy_bio(mut self, bio: Option<String>) -> Self {
        self.legacy_bio = bio;
        self
    }

    /// With exclusion rules
    #[inline]
    #[must_use]
    pub fn with_exclusions(mut self, rules: Vec<ExclusionRule>) -> Self {
        self.exclusions = rules;
        self
    }

    /// With default record
    #[inline]
    #[must_use]
    pub fn with_defaults(mut self, defaults: ProfileDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Check keys and rules
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (name, key) in self.keys.named() {
            if key.trim().is_empty() {
                return Err(ConfigError::EmptyKey { name });
            }
            if !seen.insert(key) {
                return Err(ConfigError::DuplicateKey {
                    key: key.to_string(),
                });
            }
        }

        if self.canonical_link.url.trim().is_empty() {
            return Err(ConfigError::EmptyCanonicalUrl);
        }

        if let Some(index) = self.exclusions.iter().position(|r| r.needle.is_empty()) {
            return Err(ConfigError::EmptyExclusion { index });
        }

        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            canonical_link: CanonicalLink::default(),
            legacy_bio: Some(LEGACY_DEFAULT_BIO.to_string()),
            exclusions: default_exclusions(),
            defaults: ProfileDefaults::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(StoreConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_duplicate_keys() {
        let keys = StorageKeys {
            email_marker: "same".into(),
            bio_marker: "same".into(),
            ..StorageKeys::default()
        };
        let config = StoreConfig::new().with_keys(keys);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateKey { key: "same".into() })
        );
    }

    #[test]
    fn rejects_blank_key_and_empty_needle() {
        let keys = StorageKeys {
            profile: " ".into(),
            ..StorageKeys::default()
        };
        assert_eq!(
            StoreConfig::new().with_keys(keys).validate(),
            Err(ConfigError::EmptyKey { name: "profile" })
        );

        let config = StoreConfig::new().with_exclusions(vec![ExclusionRule::any("")]);
        assert_eq!(config.validate(), Err(ConfigError::EmptyExclusion { index: 0 }));
    }

    #[test]
    fn rules_match_case_insensitively_within_scope() {
        let link = LinkEntry::new("My Twitter", "https://TWITTER.com/me");
        assert!(ExclusionRule::label("twitter").matches(&link));
        assert!(ExclusionRule::url("twitter.com").matches(&link));
        assert!(!ExclusionRule::label("twitter.com").matches(&link));
        assert!(ExclusionRule::any("TWITTER").matches(&link));
    }

    #[test]
    fn default_rules_hide_twitter_x_and_instagram() {
        let rules = default_exclusions();
        assert!(is_excluded(&rules, &LinkEntry::new("X", "https://x.com/me")));
        assert!(is_excluded(&rules, &LinkEntry::new("IG", "https://instagram.com/me")));
        assert!(is_excluded(&rules, &LinkEntry::new("Instagram", "https://ig.me/me")));
        assert!(!is_excluded(&rules, &LinkEntry::new("Snapchat", SNAPCHAT_URL)));
    }

    #[test]
    fn partial_config_deserializes_with_defaults() {
        let config: StoreConfig = serde_json::from_str(
            r#"{"legacy_bio": null, "exclusions": [{"needle": "tiktok"}]}"#,
        )
        .unwrap();
        assert_eq!(config.legacy_bio, None);
        assert_eq!(config.exclusions, vec![ExclusionRule::any("tiktok")]);
        assert_eq!(config.keys, StorageKeys::default());
    }
}
