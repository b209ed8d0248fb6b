//! LinkCard Profile Store
//!
//! Owns the single persisted profile record of a link-in-bio card.
//!
//! # Overview
//!
//! - **ProfileRecord**: display name, bio, phone, optional email, ordered links
//! - **KeyValueStore**: synchronous string storage seam (memory, file)
//! - **MigrationChain**: one-shot upgrade steps gated by persisted markers
//! - **ProfileStore**: load + migrate once, then persist on every mutation
//!
//! # Example
//!
//! ```rust
//! use linkcard_profile::{Direction, MemoryStore, ProfileStore, StoreConfig};
//!
//! let mut store = ProfileStore::open(MemoryStore::new(), StoreConfig::default());
//! store.add_link("Blog", "https://blog.example");
//! store.move_link(1, Direction::Up);
//! assert_eq!(store.profile().links[0].label, "Blog");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod defaults;
pub mod error;
pub mod migration;
pub mod record;
pub mod storage;
pub mod store;

// Re-exports
pub use config::{
    default_exclusions, is_excluded, CanonicalLink, ExclusionRule, MatchScope, StorageKeys,
    StoreConfig,
};
pub use defaults::ProfileDefaults;
pub use error::{ConfigError, StorageError};
pub use migration::{MarkerKind, Migration, MigrationChain, MigrationMarkers, MigrationOutcome};
pub use record::{Direction, LinkEntry, ProfilePatch, ProfileRecord};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::{load, LoadReport, LoadSource, Loaded, PersistStatus, ProfileStore};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for profile operations
    pub use crate::{
        Direction, KeyValueStore, LinkEntry, MemoryStore, ProfilePatch, ProfileRecord,
        ProfileStore, StoreConfig,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
