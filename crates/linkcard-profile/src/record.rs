//! Profile record and in-place edits
//!
//! Field names serialize in camelCase so records written by earlier versions
//! of the page remain readable. Every scalar and the link list default when
//! missing; `email` stays `None` when absent so the backfill migration can
//! tell "never set" from "cleared".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One outbound link on the card
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Display text
    pub label: String,
    /// Raw URL, validated only when rendered or followed
    pub url: String,
}

impl LinkEntry {
    /// Create link entry
    #[inline]
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// The persisted profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    /// Name shown as the card title
    #[serde(default)]
    pub display_name: String,
    /// Short free-text bio
    #[serde(default)]
    pub bio: String,
    /// Raw phone number; empty means no call action
    #[serde(default)]
    pub phone: String,
    /// `None` = never set, `Some("")` = intentionally cleared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Links in display order
    #[serde(default)]
    pub links: Vec<LinkEntry>,
}

/// Direction for [`ProfileRecord::move_link`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards index 0
    Up,
    /// Towards the end of the list
    Down,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(format!("unknown direction '{other}' (expected up or down)")),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Up => "up",
            Self::Down => "down",
        })
    }
}

impl ProfileRecord {
    /// Append a link
    pub fn add_link(&mut self, label: impl Into<String>, url: impl Into<String>) {
        self.links.push(LinkEntry::new(label, url));
    }

    /// Remove the link at `index`; `false` if out of range
    pub fn remove_link(&mut self, index: usize) -> bool {
        if index < self.links.len() {
            self.links.remove(index);
            true
        } else {
            false
        }
    }

    /// Replace the link at `index`; `false` if out of range
    pub fn update_link(
        &mut self,
        index: usize,
        label: impl Into<String>,
        url: impl Into<String>,
    ) -> bool {
        match self.links.get_mut(index) {
            Some(link) => {
                *link = LinkEntry::new(label, url);
                true
            }
            None => false,
        }
    }

    /// Swap the link at `index` with its neighbour
    ///
    /// Returns `false` when either index is out of range (first entry up,
    /// last entry down, or a stale index).
    pub fn move_link(&mut self, index: usize, direction: Direction) -> bool {
        let target = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => index.checked_add(1),
        };
        match target {
            Some(target) if index < self.links.len() && target < self.links.len() => {
                self.links.swap(index, target);
                true
            }
            _ => false,
        }
    }

    /// Whether the card has a phone number to call
    #[inline]
    #[must_use]
    pub fn has_phone(&self) -> bool {
        !self.phone.is_empty()
    }
}

/// Partial update for [`ProfileRecord`]
///
/// `None` leaves a field untouched. `email: Some(None)` removes the address
/// entirely, `Some(Some(String::new()))` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    /// New display name
    pub display_name: Option<String>,
    /// New bio
    pub bio: Option<String>,
    /// New phone number
    pub phone: Option<String>,
    /// New email state
    pub email: Option<Option<String>>,
    /// Replacement link list
    pub links: Option<Vec<LinkEntry>>,
}

impl ProfilePatch {
    /// Empty patch
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With display name
    #[inline]
    #[must_use]
    pub fn with_display_name(mut self, value: impl Into<String>) -> Self {
        self.display_name = Some(value.into());
        self
    }

    /// With bio
    #[inline]
    #[must_use]
    pub fn with_bio(mut self, value: impl Into<String>) -> Self {
        self.bio = Some(value.into());
        self
    }

    /// With phone
    #[inline]
    #[must_use]
    pub fn with_phone(mut self, value: impl Into<String>) -> Self {
        self.phone = Some(value.into());
        self
    }

    /// With email (empty string clears it)
    #[inline]
    #[must_use]
    pub fn with_email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(Some(value.into()));
        self
    }

    /// With replacement links
    #[inline]
    #[must_use]
    pub fn with_links(mut self, links: Vec<LinkEntry>) -> Self {
        self.links = Some(links);
        self
    }

    /// Whether the patch touches nothing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply onto `record`, returning whether anything changed
    pub fn apply(self, record: &mut ProfileRecord) -> bool {
        let before = record.clone();
        if let Some(v) = self.display_name {
            record.display_name = v;
        }
        if let Some(v) = self.bio {
            record.bio = v;
        }
        if let Some(v) = self.phone {
            record.phone = v;
        }
        if let Some(v) = self.email {
            record.email = v;
        }
        if let Some(v) = self.links {
            record.links = v;
        }
        *record != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn three_links() -> ProfileRecord {
        ProfileRecord {
            links: vec![
                LinkEntry::new("a", "https://a.example"),
                LinkEntry::new("b", "https://b.example"),
                LinkEntry::new("c", "https://c.example"),
            ],
            ..ProfileRecord::default()
        }
    }

    fn labels(record: &ProfileRecord) -> Vec<&str> {
        record.links.iter().map(|l| l.label.as_str()).collect()
    }

    #[test]
    fn deserializes_legacy_shape_without_email() {
        let record: ProfileRecord =
            serde_json::from_str(r#"{"displayName":"X","bio":"b","links":[]}"#).unwrap();
        assert_eq!(record.display_name, "X");
        assert_eq!(record.phone, "");
        assert_eq!(record.email, None);
    }

    #[test]
    fn keeps_empty_email_distinct_from_absent() {
        let record: ProfileRecord = serde_json::from_str(r#"{"email":""}"#).unwrap();
        assert_eq!(record.email, Some(String::new()));

        let json = serde_json::to_string(&ProfileRecord::default()).unwrap();
        assert!(!json.contains("email"));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(ProfileRecord {
            display_name: "N".into(),
            ..ProfileRecord::default()
        })
        .unwrap();
        assert_eq!(json["displayName"], "N");
    }

    #[test]
    fn move_link_swaps_neighbours() {
        let mut record = three_links();
        assert!(record.move_link(1, Direction::Up));
        assert_eq!(labels(&record), ["b", "a", "c"]);
        assert!(record.move_link(1, Direction::Down));
        assert_eq!(labels(&record), ["b", "c", "a"]);
    }

    #[test]
    fn move_link_edges_are_noops() {
        let mut record = three_links();
        assert!(!record.move_link(0, Direction::Up));
        assert!(!record.move_link(2, Direction::Down));
        assert!(!record.move_link(7, Direction::Up));
        assert!(!record.move_link(usize::MAX, Direction::Down));
        assert_eq!(record, three_links());
    }

    #[test]
    fn out_of_range_edits_are_noops() {
        let mut record = three_links();
        assert!(!record.remove_link(3));
        assert!(!record.update_link(3, "x", "https://x.example"));
        assert_eq!(record, three_links());
    }

    #[test]
    fn update_and_remove_in_range() {
        let mut record = three_links();
        assert!(record.update_link(1, "B", "https://B.example"));
        assert!(record.remove_link(0));
        assert_eq!(labels(&record), ["B", "c"]);
    }

    #[test]
    fn patch_reports_changes() {
        let mut record = three_links();
        assert!(!ProfilePatch::new().apply(&mut record));
        assert!(ProfilePatch::new().with_email("").apply(&mut record));
        assert_eq!(record.email.as_deref(), Some(""));
        assert!(!ProfilePatch::new().with_email("").apply(&mut record));
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("UP".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("down".parse::<Direction>(), Ok(Direction::Down));
        assert!("left".parse::<Direction>().is_err());
    }
}
