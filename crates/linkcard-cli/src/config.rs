//! TOML configuration for the command-line host
//!
//! ```toml
//! [store]
//! legacy_bio = "Welcome to my page!"
//!
//! [[store.exclusions]]
//! needle = "tiktok"
//!
//! [page.featured]
//! label = "Instagram"
//! url = "https://www.instagram.com/me"
//! ```

use linkcard_page::PageConfig;
use linkcard_profile::{ConfigError, StoreConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors loading the config file
#[derive(Debug, thiserror::Error)]
pub enum CliConfigError {
    /// File could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for this schema
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Parsed, but inconsistent
    #[error("invalid config {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}

/// Store and page configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Profile store settings
    pub store: StoreConfig,
    /// Rendering settings
    pub page: PageConfig,
}

impl CliConfig {
    /// Parse configuration text
    ///
    /// # Errors
    /// TOML syntax or schema errors.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load and validate `path`
    ///
    /// # Errors
    /// See [`CliConfigError`].
    pub fn load(path: &Path) -> Result<Self, CliConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| CliConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text).map_err(|source| CliConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.store.validate().map_err(|source| CliConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise
    ///
    /// # Errors
    /// See [`CliConfig::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, CliConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkcard_page::FeaturedLink;
    use linkcard_profile::ExclusionRule;

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(CliConfig::from_toml_str("").unwrap(), CliConfig::default());
    }

    #[test]
    fn overrides_selected_fields() {
        let config = CliConfig::from_toml_str(
            r#"
            [store]
            legacy_bio = "old"

            [[store.exclusions]]
            needle = "tiktok"
            scope = "url"

            [page.featured]
            label = "Mastodon"
            url = "https://mastodon.example/@me"
            "#,
        )
        .unwrap();

        assert_eq!(config.store.legacy_bio.as_deref(), Some("old"));
        assert_eq!(config.store.exclusions, vec![ExclusionRule::url("tiktok")]);
        assert_eq!(
            config.page.featured,
            Some(FeaturedLink::new("Mastodon", "https://mastodon.example/@me"))
        );
        assert_eq!(config.store.keys, StoreConfig::default().keys);
    }

    #[test]
    fn load_rejects_invalid_store_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linkcard.toml");
        std::fs::write(&path, "[[store.exclusions]]\nneedle = \"\"\n").unwrap();
        assert!(matches!(
            CliConfig::load(&path),
            Err(CliConfigError::Invalid { .. })
        ));
    }
}
