use super::{MarkerKind, Migration};
use crate::config::{is_excluded, StoreConfig};
use crate::record::{LinkEntry, ProfileRecord};

/// Ensure the canonical link exists under its canonical label
///
/// Matches on the exact URL. Insertion and label normalization are both
/// gated by the marker, so a user may rename or drop the link afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalLinkStep;

impl Migration for CanonicalLinkStep {
    fn name(&self) -> &'static str {
        "canonical-link"
    }

    fn marker(&self) -> Option<MarkerKind> {
        Some(MarkerKind::CanonicalLink)
    }

    fn apply(&self, profile: &mut ProfileRecord, config: &StoreConfig) -> bool {
        let canonical = &config.canonical_link;
        match profile.links.iter_mut().find(|l| l.url == canonical.url) {
            Some(link) if link.label == canonical.label => false,
            Some(link) => {
                link.label.clone_from(&canonical.label);
                true
            }
            None => {
                profile
                    .links
                    .push(LinkEntry::new(&canonical.label, &canonical.url));
                true
            }
        }
    }
}

/// Fill in the default email when the field was never set
///
/// An empty address was cleared on purpose and is left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailBackfillStep;

impl Migration for EmailBackfillStep {
    fn name(&self) -> &'static str {
        "email-backfill"
    }

    fn marker(&self) -> Option<MarkerKind> {
        Some(MarkerKind::EmailBackfill)
    }

    fn apply(&self, profile: &mut ProfileRecord, config: &StoreConfig) -> bool {
        if profile.email.is_some() {
            return false;
        }
        match config.defaults.email() {
            Some(email) => {
                profile.email = Some(email.to_string());
                true
            }
            None => false,
        }
    }
}

/// Replace the legacy default bio with the current one
#[derive(Debug, Clone, Copy, Default)]
pub struct BioRefreshStep;

impl Migration for BioRefreshStep {
    fn name(&self) -> &'static str {
        "bio-refresh"
    }

    fn marker(&self) -> Option<MarkerKind> {
        Some(MarkerKind::BioRefresh)
    }

    fn apply(&self, profile: &mut ProfileRecord, config: &StoreConfig) -> bool {
        match &config.legacy_bio {
            Some(legacy) if profile.bio == *legacy && profile.bio != config.defaults.bio() => {
                profile.bio = config.defaults.bio().to_string();
                true
            }
            _ => false,
        }
    }
}

/// Drop links matched by the configured exclusion rules
///
/// Runs on every load; rules may change between releases.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkExclusionStep;

impl Migration for LinkExclusionStep {
    fn name(&self) -> &'static str {
        "link-exclusions"
    }

    fn marker(&self) -> Option<MarkerKind> {
        None
    }

    fn apply(&self, profile: &mut ProfileRecord, config: &StoreConfig) -> bool {
        let before = profile.links.len();
        profile
            .links
            .retain(|link| !is_excluded(&config.exclusions, link));
        profile.links.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExclusionRule;
    use crate::defaults::{DEFAULT_EMAIL, SNAPCHAT_LABEL, SNAPCHAT_URL};
    use pretty_assertions::assert_eq;

    fn with_links(links: Vec<LinkEntry>) -> ProfileRecord {
        ProfileRecord {
            links,
            ..ProfileRecord::default()
        }
    }

    #[test]
    fn canonical_link_is_appended_when_missing() {
        let config = StoreConfig::default();
        let mut profile = with_links(vec![LinkEntry::new("Blog", "https://blog.example")]);
        assert!(CanonicalLinkStep.apply(&mut profile, &config));
        assert_eq!(profile.links[1], LinkEntry::new(SNAPCHAT_LABEL, SNAPCHAT_URL));
    }

    #[test]
    fn canonical_link_label_is_normalized_in_place() {
        let config = StoreConfig::default();
        let mut profile = with_links(vec![
            LinkEntry::new("snap", SNAPCHAT_URL),
            LinkEntry::new("Blog", "https://blog.example"),
        ]);
        assert!(CanonicalLinkStep.apply(&mut profile, &config));
        assert_eq!(profile.links[0].label, SNAPCHAT_LABEL);
        assert_eq!(profile.links.len(), 2);
    }

    #[test]
    fn canonical_link_already_correct() {
        let config = StoreConfig::default();
        let mut profile = with_links(vec![LinkEntry::new(SNAPCHAT_LABEL, SNAPCHAT_URL)]);
        assert!(!CanonicalLinkStep.apply(&mut profile, &config));
    }

    #[test]
    fn canonical_link_matches_exact_url_only() {
        let config = StoreConfig::default();
        let mut profile = with_links(vec![LinkEntry::new(
            "Snapchat",
            "https://www.snapchat.com/add/irfan_jujara1",
        )]);
        assert!(CanonicalLinkStep.apply(&mut profile, &config));
        assert_eq!(profile.links.len(), 2);
    }

    #[test]
    fn email_backfill_only_when_absent() {
        let config = StoreConfig::default();

        let mut absent = ProfileRecord::default();
        assert!(EmailBackfillStep.apply(&mut absent, &config));
        assert_eq!(absent.email.as_deref(), Some(DEFAULT_EMAIL));

        let mut cleared = ProfileRecord {
            email: Some(String::new()),
            ..ProfileRecord::default()
        };
        assert!(!EmailBackfillStep.apply(&mut cleared, &config));
        assert_eq!(cleared.email.as_deref(), Some(""));
    }

    #[test]
    fn bio_refresh_requires_exact_match() {
        let config = StoreConfig::new().with_legacy_bio(Some("old".into()));

        let mut stale = ProfileRecord {
            bio: "old".into(),
            ..ProfileRecord::default()
        };
        assert!(BioRefreshStep.apply(&mut stale, &config));
        assert_eq!(stale.bio, config.defaults.bio());

        let mut custom = ProfileRecord {
            bio: "old ".into(),
            ..ProfileRecord::default()
        };
        assert!(!BioRefreshStep.apply(&mut custom, &config));

        let disabled = StoreConfig::new().with_legacy_bio(None);
        assert!(!BioRefreshStep.apply(&mut stale.clone(), &disabled));
    }

    #[test]
    fn exclusions_preserve_survivor_order() {
        let config = StoreConfig::new().with_exclusions(vec![ExclusionRule::any("tiktok")]);
        let mut profile = with_links(vec![
            LinkEntry::new("a", "https://a.example"),
            LinkEntry::new("TikTok", "https://t.example"),
            LinkEntry::new("b", "https://b.example"),
            LinkEntry::new("c", "https://www.TIKTOK.com/@me"),
            LinkEntry::new("d", "https://d.example"),
        ]);
        assert!(LinkExclusionStep.apply(&mut profile, &config));
        let labels: Vec<_> = profile.links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["a", "b", "d"]);
        assert!(!LinkExclusionStep.apply(&mut profile, &config));
    }
}
