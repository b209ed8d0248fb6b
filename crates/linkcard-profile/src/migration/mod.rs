//! Migration chain for stored profiles
//!
//! A stored profile is upgraded by a fixed sequence of steps on every load.
//! Gated steps consult a [`MigrationMarkers`] record and run at most once per
//! storage instance; ungated steps (the link exclusions) run every time.
//!
//! Markers are loaded and written alongside the profile, never through
//! ambient global state, so tests can run the chain against any constructed
//! marker state.

mod markers;
mod steps;

pub use markers::{MarkerKind, MigrationMarkers};
pub use steps::{BioRefreshStep, CanonicalLinkStep, EmailBackfillStep, LinkExclusionStep};

use crate::config::StoreConfig;
use crate::record::ProfileRecord;

/// One upgrade step
pub trait Migration {
    /// Unique name for this step
    fn name(&self) -> &'static str;

    /// Completion marker, `None` for steps that run on every load
    fn marker(&self) -> Option<MarkerKind>;

    /// Apply to `profile`, returning whether it changed
    fn apply(&self, profile: &mut ProfileRecord, config: &StoreConfig) -> bool;
}

/// Result of running the chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationOutcome {
    /// Migrated record
    pub profile: ProfileRecord,
    /// Steps that changed the record, in execution order
    pub changed_by: Vec<&'static str>,
    /// Markers set during this run
    pub newly_marked: Vec<MarkerKind>,
}

impl MigrationOutcome {
    /// Whether the run changed the record
    #[inline]
    #[must_use]
    pub fn changed(&self) -> bool {
        !self.changed_by.is_empty()
    }
}

/// Ordered list of migration steps
pub struct MigrationChain {
    steps: Vec<Box<dyn Migration>>,
}

impl MigrationChain {
    /// Chain from explicit steps
    #[inline]
    #[must_use]
    pub fn new(steps: Vec<Box<dyn Migration>>) -> Self {
        Self { steps }
    }

    /// The production chain, in its required order
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(CanonicalLinkStep),
            Box::new(EmailBackfillStep),
            Box::new(BioRefreshStep),
            Box::new(LinkExclusionStep),
        ])
    }

    /// Step names in execution order
    #[must_use]
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run every step over `profile`
    ///
    /// A gated step whose marker is already done is skipped. Otherwise the
    /// step runs and its marker is set whether or not it changed anything.
    /// Markers are only ever set here, never cleared.
    pub fn run(
        &self,
        mut profile: ProfileRecord,
        markers: &mut MigrationMarkers,
        config: &StoreConfig,
    ) -> MigrationOutcome {
        let mut changed_by = Vec::new();
        let mut newly_marked = Vec::new();

        for step in &self.steps {
            let marker = step.marker();
            if marker.is_some_and(|m| markers.is_done(m)) {
                tracing::debug!("Skipping migration {}: already done", step.name());
                continue;
            }

            if step.apply(&mut profile, config) {
                tracing::debug!("Migration {} changed the profile", step.name());
                changed_by.push(step.name());
            }

            if let Some(marker) = marker {
                markers.mark_done(marker);
                newly_marked.push(marker);
            }
        }

        MigrationOutcome {
            profile,
            changed_by,
            newly_marked,
        }
    }
}

impl Default for MigrationChain {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for MigrationChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MigrationChain")
            .field("steps", &self.step_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::LinkEntry;
    use pretty_assertions::assert_eq;

    fn legacy() -> ProfileRecord {
        ProfileRecord {
            display_name: "X".into(),
            bio: crate::defaults::LEGACY_DEFAULT_BIO.into(),
            links: vec![LinkEntry::new("Twitter", "https://twitter.com/x")],
            ..ProfileRecord::default()
        }
    }

    #[test]
    fn standard_order() {
        assert_eq!(
            MigrationChain::standard().step_names(),
            ["canonical-link", "email-backfill", "bio-refresh", "link-exclusions"]
        );
    }

    #[test]
    fn fresh_run_marks_every_gated_step() {
        let config = StoreConfig::default();
        let mut markers = MigrationMarkers::default();
        let outcome = MigrationChain::standard().run(legacy(), &mut markers, &config);

        assert!(markers.all_done());
        assert_eq!(outcome.newly_marked, MarkerKind::ALL.to_vec());
        assert_eq!(outcome.changed_by.len(), 4);
        assert_eq!(outcome.profile.bio, config.defaults.bio());
    }

    #[test]
    fn second_run_is_a_noop() {
        let config = StoreConfig::default();
        let chain = MigrationChain::standard();
        let mut markers = MigrationMarkers::default();
        let first = chain.run(legacy(), &mut markers, &config);
        let second = chain.run(first.profile.clone(), &mut markers, &config);

        assert_eq!(second.profile, first.profile);
        assert!(!second.changed());
        assert!(second.newly_marked.is_empty());
        assert!(markers.all_done());
    }

    #[test]
    fn done_markers_skip_their_steps() {
        let config = StoreConfig::default();
        let mut markers = MigrationMarkers::all();
        let outcome = MigrationChain::standard().run(legacy(), &mut markers, &config);

        // Only the ungated exclusion step ran
        assert_eq!(outcome.changed_by, ["link-exclusions"]);
        assert_eq!(outcome.profile.email, None);
        assert!(outcome.profile.links.is_empty());
    }
}
