//! Page configuration

use linkcard_profile::{default_exclusions, ExclusionRule};
use serde::{Deserialize, Serialize};

/// Profile the dedicated Instagram button points at
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/ae560919?igsh=NHFmdnppNzU4OWVy";

/// Dedicated button shown above the stored links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedLink {
    /// Button text
    pub label: String,
    /// Target
    pub url: String,
}

impl FeaturedLink {
    /// Create featured link
    #[inline]
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Dedicated social button, if any
    pub featured: Option<FeaturedLink>,
    /// Links hidden from the stored list at render time
    pub exclusions: Vec<ExclusionRule>,
}

impl PageConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With featured link (`None` removes the button)
    #[inline]
    #[must_use]
    pub fn with_featured(mut self, featured: Option<FeaturedLink>) -> Self {
        self.featured = featured;
        self
    }

    /// With render-time exclusion rules
    #[inline]
    #[must_use]
    pub fn with_exclusions(mut self, rules: Vec<ExclusionRule>) -> Self {
        self.exclusions = rules;
        self
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            featured: Some(FeaturedLink::new("Instagram", INSTAGRAM_URL)),
            exclusions: default_exclusions(),
        }
    }
}
