//! Plain-text rendering of the card and marker state

use linkcard_page::{CardAction, ProfileCard};
use linkcard_profile::{MarkerKind, MigrationMarkers, StorageKeys};
use std::fmt::Write;

/// Card as terminal text
#[must_use]
pub fn card_text(card: &ProfileCard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", card.display_name);
    if !card.bio.is_empty() {
        let _ = writeln!(out, "{}", card.bio);
    }
    let _ = writeln!(out);

    for action in &card.actions {
        let tag = match action {
            CardAction::Call { .. } => "call".to_string(),
            CardAction::Email { .. } => "email".to_string(),
            CardAction::Featured { .. } => "featured".to_string(),
            CardAction::Link { index, .. } => format!("#{index}"),
        };
        let _ = writeln!(out, "  [{tag:>8}] {:<20} {}", action.label(), action.href());
    }
    out
}

/// Marker state with the storage key of each marker
#[must_use]
pub fn markers_text(markers: &MigrationMarkers, keys: &StorageKeys) -> String {
    let mut out = String::new();
    for kind in MarkerKind::ALL {
        let state = if markers.is_done(kind) { "done" } else { "pending" };
        let _ = writeln!(out, "{kind:<15} {state:<8} {}", kind.storage_key(keys));
    }
    out
}
