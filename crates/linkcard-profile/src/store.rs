//! Profile store: load, migrate, hold, mutate, persist
//!
//! Storage failures never surface to callers. A failed read falls back to
//! the default record, a failed write leaves the in-memory record
//! authoritative for the rest of the session. Both are reported through
//! `tracing`.

use crate::config::StoreConfig;
use crate::error::StorageError;
use crate::migration::{MarkerKind, MigrationChain, MigrationMarkers};
use crate::record::{Direction, ProfilePatch, ProfileRecord};
use crate::storage::KeyValueStore;

/// Where the active record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from storage and migrated
    Stored,
    /// Nothing stored yet; defaults used as-is
    Default,
    /// Stored data was unreadable; defaults used instead
    Recovered,
}

/// Outcome of the last write attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistStatus {
    /// Nothing written yet
    NotAttempted,
    /// Last write succeeded
    Saved,
    /// Last write failed with this message
    Failed(String),
}

impl PersistStatus {
    fn from_result(result: &Result<(), StorageError>) -> Self {
        match result {
            Ok(()) => Self::Saved,
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// What happened during load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Origin of the active record
    pub source: LoadSource,
    /// Migration steps that changed the record
    pub changed_by: Vec<&'static str>,
    /// Markers set during this load
    pub newly_marked: Vec<MarkerKind>,
    /// Write-back outcome (`NotAttempted` unless migrations ran)
    pub persist: PersistStatus,
}

impl LoadReport {
    fn fallback(source: LoadSource) -> Self {
        Self {
            source,
            changed_by: Vec::new(),
            newly_marked: Vec::new(),
            persist: PersistStatus::NotAttempted,
        }
    }
}

/// Loaded state: record, markers and a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    /// Active record
    pub profile: ProfileRecord,
    /// Marker state after load
    pub markers: MigrationMarkers,
    /// Load diagnostics
    pub report: LoadReport,
}

/// Load the profile from `storage`
///
/// # Workflow
/// 1. Read the raw record; absent → defaults, no migration, nothing written
/// 2. Parse it; any read or parse failure → defaults, logged
///
/// Defaults come back with every marker done.
/// 3. Run the migration chain against the stored markers
/// 4. Write record and markers back in one batch (failure logged)
/// 5. Return the migrated record
pub fn load<S: KeyValueStore + ?Sized>(
    storage: &S,
    config: &StoreConfig,
    chain: &MigrationChain,
) -> Loaded {
    let keys = &config.keys;
    let defaults = || config.defaults.profile();

    let raw = match storage.get(&keys.profile) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::info!("No stored profile, using defaults");
            return fallback(defaults(), LoadSource::Default);
        }
        Err(e) => {
            tracing::error!("Error loading profile from storage: {}", e);
            return fallback(defaults(), LoadSource::Recovered);
        }
    };

    let candidate: ProfileRecord = match serde_json::from_str(&raw) {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!("Error parsing stored profile: {}", e);
            return fallback(defaults(), LoadSource::Recovered);
        }
    };

    let mut markers = match MigrationMarkers::load(storage, keys) {
        Ok(markers) => markers,
        Err(e) => {
            tracing::error!("Error loading migration markers: {}", e);
            return fallback(defaults(), LoadSource::Recovered);
        }
    };

    let outcome = chain.run(candidate, &mut markers, config);
    if outcome.changed() {
        tracing::info!("Migrated stored profile: {}", outcome.changed_by.join(", "));
    }

    let result = serde_json::to_string(&outcome.profile)
        .map_err(StorageError::from)
        .and_then(|json| {
            let mut entries = vec![(keys.profile.clone(), json)];
            entries.extend(markers.entries(keys));
            storage.set_many(entries)
        });
    if let Err(e) = &result {
        tracing::error!("Error saving migrated profile: {}", e);
    }

    Loaded {
        profile: outcome.profile,
        markers,
        report: LoadReport {
            source: LoadSource::Stored,
            changed_by: outcome.changed_by,
            newly_marked: outcome.newly_marked,
            persist: PersistStatus::from_result(&result),
        },
    }
}

/// The default record already has the current shape, so every marker counts
/// as done and is written with the first mutation.
fn fallback(profile: ProfileRecord, source: LoadSource) -> Loaded {
    Loaded {
        profile,
        markers: MigrationMarkers::all(),
        report: LoadReport::fallback(source),
    }
}

/// Owner of the single profile record
///
/// Every mutation persists the full record and the marker state before
/// returning, including mutations that turn out to be no-ops.
#[derive(Debug)]
pub struct ProfileStore<S> {
    storage: S,
    config: StoreConfig,
    chain: MigrationChain,
    profile: ProfileRecord,
    markers: MigrationMarkers,
    report: LoadReport,
    persist: PersistStatus,
}

impl<S: KeyValueStore> ProfileStore<S> {
    /// Open the store with the standard migration chain
    pub fn open(storage: S, config: StoreConfig) -> Self {
        Self::with_chain(storage, config, MigrationChain::standard())
    }

    /// Open the store with a custom migration chain
    pub fn with_chain(storage: S, config: StoreConfig, chain: MigrationChain) -> Self {
        let loaded = load(&storage, &config, &chain);
        let persist = loaded.report.persist.clone();
        Self {
            storage,
            config,
            chain,
            profile: loaded.profile,
            markers: loaded.markers,
            report: loaded.report,
            persist,
        }
    }

    /// Re-run load against the backing storage, replacing in-memory state
    pub fn reload(&mut self) -> &LoadReport {
        let loaded = load(&self.storage, &self.config, &self.chain);
        self.profile = loaded.profile;
        self.markers = loaded.markers;
        self.persist = loaded.report.persist.clone();
        self.report = loaded.report;
        &self.report
    }

    /// Current record
    #[inline]
    #[must_use]
    pub fn profile(&self) -> &ProfileRecord {
        &self.profile
    }

    /// Marker state as of the last load
    #[inline]
    #[must_use]
    pub fn markers(&self) -> MigrationMarkers {
        self.markers
    }

    /// Report from the last load
    #[inline]
    #[must_use]
    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }

    /// Outcome of the most recent write
    #[inline]
    #[must_use]
    pub fn persist_status(&self) -> &PersistStatus {
        &self.persist
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Backing storage
    #[inline]
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Apply a partial update
    pub fn update_profile(&mut self, patch: ProfilePatch) -> bool {
        let changed = patch.apply(&mut self.profile);
        self.persist();
        changed
    }

    /// Replace the whole record
    pub fn replace_profile(&mut self, profile: ProfileRecord) -> bool {
        let changed = self.profile != profile;
        self.profile = profile;
        self.persist();
        changed
    }

    /// Append a link
    pub fn add_link(&mut self, label: impl Into<String>, url: impl Into<String>) -> bool {
        self.profile.add_link(label, url);
        self.persist();
        true
    }

    /// Remove the link at `index`; out of range is a no-op
    pub fn remove_link(&mut self, index: usize) -> bool {
        let changed = self.profile.remove_link(index);
        if !changed {
            tracing::debug!("remove_link: index {} out of range", index);
        }
        self.persist();
        changed
    }

    /// Replace the link at `index`; out of range is a no-op
    pub fn update_link(
        &mut self,
        index: usize,
        label: impl Into<String>,
        url: impl Into<String>,
    ) -> bool {
        let changed = self.profile.update_link(index, label, url);
        if !changed {
            tracing::debug!("update_link: index {} out of range", index);
        }
        self.persist();
        changed
    }

    /// Swap the link at `index` with its neighbour; no-op at the edges
    pub fn move_link(&mut self, index: usize, direction: Direction) -> bool {
        let changed = self.profile.move_link(index, direction);
        self.persist();
        changed
    }

    /// Write the record together with the done markers
    fn persist(&mut self) {
        let keys = &self.config.keys;
        let result = serde_json::to_string(&self.profile)
            .map_err(StorageError::from)
            .and_then(|json| {
                let mut entries = vec![(keys.profile.clone(), json)];
                entries.extend(self.markers.entries(keys));
                self.storage.set_many(entries)
            });
        if let Err(e) = &result {
            tracing::error!("Error saving profile to storage: {}", e);
        }
        self.persist = PersistStatus::from_result(&result);
    }
}
