//! Subcommand dispatch

use crate::config::CliConfig;
use crate::render;
use anyhow::{bail, Context};
use clap::ArgMatches;
use linkcard_page::{follow_link, share_profile, Clipboard, LinkDecision, Notifier, ProfileCard};
use linkcard_profile::{
    Direction, FileStore, LoadSource, PersistStatus, ProfilePatch, ProfileStore,
};
use linkcard_validation::{create_tel_link, sanitize_phone_number, validate_email, validate_url};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Done as asked
    Ok,
    /// Ran, but the request could not be honored
    Failed,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Ok => ExitCode::SUCCESS,
            Status::Failed => ExitCode::FAILURE,
        }
    }
}

/// Run the parsed command line
///
/// Normal output goes to `out`; notifications go to `notifier`.
///
/// # Errors
/// Config file problems, malformed arguments, or a failed write to `out`.
pub async fn run(
    matches: &ArgMatches,
    clipboard: &dyn Clipboard,
    notifier: &dyn Notifier,
    out: &mut dyn Write,
) -> anyhow::Result<Status> {
    let config = CliConfig::load_or_default(
        matches.get_one::<PathBuf>("config").map(PathBuf::as_path),
    )?;

    match matches.subcommand() {
        Some(("check", sub)) => check(sub, out),
        Some(("share", sub)) => {
            let page_url = required::<String>(sub, "page-url")?;
            let copied = share_profile(page_url, clipboard, notifier).await;
            Ok(if copied { Status::Ok } else { Status::Failed })
        }
        Some((name, sub)) => {
            let path = required::<PathBuf>(matches, "store")?;
            let mut store = ProfileStore::open(FileStore::new(path.clone()), config.store.clone());
            report_load(&store);
            match name {
                "show" => show(&store, &config, sub.get_flag("json"), out),
                "set" => set(&mut store, sub, out),
                "link" => link(&mut store, sub, out),
                "markers" => {
                    let text = render::markers_text(&store.markers(), &store.config().keys);
                    write!(out, "{text}")?;
                    Ok(Status::Ok)
                }
                "open" => open(&store, sub, notifier, out),
                other => bail!("unknown command: {other}"),
            }
        }
        None => bail!("no command given"),
    }
}

fn required<'a, T: Clone + Send + Sync + 'static>(
    matches: &'a ArgMatches,
    id: &str,
) -> anyhow::Result<&'a T> {
    matches
        .get_one::<T>(id)
        .with_context(|| format!("missing argument: {id}"))
}

fn report_load(store: &ProfileStore<FileStore>) {
    let report = store.load_report();
    match report.source {
        LoadSource::Recovered => tracing::warn!(
            "Stored profile in {} is unreadable, showing defaults",
            store.storage().path().display()
        ),
        LoadSource::Default => tracing::debug!("No profile stored yet"),
        LoadSource::Stored => {
            for step in &report.changed_by {
                tracing::info!("Applied migration: {}", step);
            }
        }
    }
}

fn show(
    store: &ProfileStore<FileStore>,
    config: &CliConfig,
    json: bool,
    out: &mut dyn Write,
) -> anyhow::Result<Status> {
    let card = ProfileCard::build(store.profile(), &config.page);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&card)?)?;
    } else {
        write!(out, "{}", render::card_text(&card))?;
    }
    Ok(Status::Ok)
}

fn set(
    store: &mut ProfileStore<FileStore>,
    sub: &ArgMatches,
    out: &mut dyn Write,
) -> anyhow::Result<Status> {
    let mut patch = ProfilePatch::new();
    if let Some(v) = sub.get_one::<String>("name") {
        patch = patch.with_display_name(v.as_str());
    }
    if let Some(v) = sub.get_one::<String>("bio") {
        patch = patch.with_bio(v.as_str());
    }
    if let Some(v) = sub.get_one::<String>("phone") {
        patch = patch.with_phone(v.as_str());
    }
    if let Some(v) = sub.get_one::<String>("email") {
        if !v.is_empty() {
            if let Err(e) = validate_email(v) {
                writeln!(out, "warning: {e}")?;
            }
        }
        patch = patch.with_email(v.as_str());
    }
    if patch.is_empty() {
        bail!("nothing to update; pass at least one of --name, --bio, --phone, --email");
    }

    let changed = store.update_profile(patch);
    writeln!(out, "{}", if changed { "Profile updated" } else { "Profile unchanged" })?;
    saved(store, out)
}

fn link(
    store: &mut ProfileStore<FileStore>,
    sub: &ArgMatches,
    out: &mut dyn Write,
) -> anyhow::Result<Status> {
    match sub.subcommand() {
        Some(("add", args)) => {
            let label = required::<String>(args, "label")?;
            let url = required::<String>(args, "url")?;
            warn_unfollowable(url, out)?;
            store.add_link(label.as_str(), url.as_str());
            writeln!(out, "Added link #{}", store.profile().links.len() - 1)?;
        }
        Some(("remove", args)) => {
            let index = *required::<usize>(args, "index")?;
            if !store.remove_link(index) {
                writeln!(out, "No link at index {index}")?;
                return Ok(Status::Failed);
            }
            writeln!(out, "Removed link #{index}")?;
        }
        Some(("update", args)) => {
            let index = *required::<usize>(args, "index")?;
            let label = required::<String>(args, "label")?;
            let url = required::<String>(args, "url")?;
            warn_unfollowable(url, out)?;
            if !store.update_link(index, label.as_str(), url.as_str()) {
                writeln!(out, "No link at index {index}")?;
                return Ok(Status::Failed);
            }
            writeln!(out, "Updated link #{index}")?;
        }
        Some(("move", args)) => {
            let index = *required::<usize>(args, "index")?;
            let direction = *required::<Direction>(args, "direction")?;
            if store.move_link(index, direction) {
                writeln!(out, "Moved link #{index} {direction}")?;
            } else {
                writeln!(out, "Link order unchanged")?;
            }
        }
        _ => bail!("unknown link command"),
    }
    saved(store, out)
}

/// Stored anyway; the card re-checks on click
fn warn_unfollowable(url: &str, out: &mut dyn Write) -> anyhow::Result<()> {
    if let Err(e) = validate_url(url) {
        writeln!(out, "warning: {e}; the link is stored but cannot be followed")?;
    }
    Ok(())
}

fn saved(store: &ProfileStore<FileStore>, out: &mut dyn Write) -> anyhow::Result<Status> {
    match store.persist_status() {
        PersistStatus::Failed(e) => {
            writeln!(out, "warning: change kept in memory only: {e}")?;
            Ok(Status::Failed)
        }
        PersistStatus::Saved | PersistStatus::NotAttempted => Ok(Status::Ok),
    }
}

fn open(
    store: &ProfileStore<FileStore>,
    sub: &ArgMatches,
    notifier: &dyn Notifier,
    out: &mut dyn Write,
) -> anyhow::Result<Status> {
    let index = *required::<usize>(sub, "index")?;
    let Some(link) = store.profile().links.get(index) else {
        writeln!(out, "No link at index {index}")?;
        return Ok(Status::Failed);
    };
    match follow_link(&link.url, notifier) {
        LinkDecision::Navigate(url) => {
            writeln!(out, "{url}")?;
            Ok(Status::Ok)
        }
        LinkDecision::Suppressed => Ok(Status::Failed),
    }
}

fn check(sub: &ArgMatches, out: &mut dyn Write) -> anyhow::Result<Status> {
    let (kind, args) = sub.subcommand().context("missing check kind")?;
    let value = required::<String>(args, "value")?;

    let verdict = match kind {
        "url" => validate_url(value).map(|()| "valid url".to_string()).map_err(|e| e.to_string()),
        "email" => validate_email(value)
            .map(|()| "valid email".to_string())
            .map_err(|e| e.to_string()),
        "phone" => create_tel_link(value)
            .map(|href| format!("{} -> {href}", sanitize_phone_number(value)))
            .ok_or_else(|| "Phone number has no digits".to_string()),
        other => bail!("unknown check: {other}"),
    };

    match verdict {
        Ok(message) => {
            writeln!(out, "{message}")?;
            Ok(Status::Ok)
        }
        Err(message) => {
            writeln!(out, "{message}")?;
            Ok(Status::Failed)
        }
    }
}
