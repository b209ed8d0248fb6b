//! Persisted completion markers of the gated migration steps

use crate::config::StorageKeys;
use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// Stored value of a completed marker
pub const DONE: &str = "true";

/// Gated migration steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MarkerKind {
    /// Canonical link ensured
    CanonicalLink,
    /// Email backfilled
    EmailBackfill,
    /// Legacy bio refreshed
    BioRefresh,
}

impl MarkerKind {
    /// All markers, in chain order
    pub const ALL: [MarkerKind; 3] = [Self::CanonicalLink, Self::EmailBackfill, Self::BioRefresh];

    /// Storage key holding this marker
    #[must_use]
    pub fn storage_key(self, keys: &StorageKeys) -> &str {
        match self {
            Self::CanonicalLink => &keys.canonical_link_marker,
            Self::EmailBackfill => &keys.email_marker,
            Self::BioRefresh => &keys.bio_marker,
        }
    }

    /// Short name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CanonicalLink => "canonical-link",
            Self::EmailBackfill => "email-backfill",
            Self::BioRefresh => "bio-refresh",
        }
    }
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Completion state of the gated steps
///
/// Markers can only move from pending to done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationMarkers {
    canonical_link: bool,
    email_backfill: bool,
    bio_refresh: bool,
}

impl MigrationMarkers {
    /// Every marker done
    #[must_use]
    pub fn all() -> Self {
        Self {
            canonical_link: true,
            email_backfill: true,
            bio_refresh: true,
        }
    }

    /// Build from the markers listed as done
    #[must_use]
    pub fn from_done(done: &[MarkerKind]) -> Self {
        let mut markers = Self::default();
        for kind in done {
            markers.mark_done(*kind);
        }
        markers
    }

    fn slot(&mut self, kind: MarkerKind) -> &mut bool {
        match kind {
            MarkerKind::CanonicalLink => &mut self.canonical_link,
            MarkerKind::EmailBackfill => &mut self.email_backfill,
            MarkerKind::BioRefresh => &mut self.bio_refresh,
        }
    }

    /// Whether `kind` is done
    #[must_use]
    pub fn is_done(&self, kind: MarkerKind) -> bool {
        match kind {
            MarkerKind::CanonicalLink => self.canonical_link,
            MarkerKind::EmailBackfill => self.email_backfill,
            MarkerKind::BioRefresh => self.bio_refresh,
        }
    }

    /// Mark `kind` done
    pub fn mark_done(&mut self, kind: MarkerKind) {
        *self.slot(kind) = true;
    }

    /// Whether every marker is done
    #[must_use]
    pub fn all_done(&self) -> bool {
        MarkerKind::ALL.iter().all(|k| self.is_done(*k))
    }

    /// Markers that are done
    #[must_use]
    pub fn done(&self) -> Vec<MarkerKind> {
        MarkerKind::ALL
            .into_iter()
            .filter(|k| self.is_done(*k))
            .collect()
    }

    /// Read markers from storage
    ///
    /// Only the literal value `"true"` counts as done.
    ///
    /// # Errors
    /// Propagates backend read failures.
    pub fn load<S: KeyValueStore + ?Sized>(
        storage: &S,
        keys: &StorageKeys,
    ) -> Result<Self, StorageError> {
        let mut markers = Self::default();
        for kind in MarkerKind::ALL {
            if storage.get(kind.storage_key(keys))?.as_deref() == Some(DONE) {
                markers.mark_done(kind);
            }
        }
        Ok(markers)
    }

    /// Storage entries for the done markers
    ///
    /// Pending markers produce no entry; nothing is ever reset.
    #[must_use]
    pub fn entries(&self, keys: &StorageKeys) -> Vec<(String, String)> {
        self.done()
            .into_iter()
            .map(|k| (k.storage_key(keys).to_string(), DONE.to_string()))
            .collect()
    }
}
