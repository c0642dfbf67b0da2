//! Idempotent scaffold writer.
//!
//! Each entry is written only if nothing exists at its destination.
//! Existing files are never read or touched, which makes the files on
//! disk the only record of a previous run.

use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::core::template::{ScaffoldContext, TemplateEntry, Templates};
use crate::error::Result;

/// What happened to one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum Outcome {
    Created,
    Skipped,
    Failed(String),
}

/// Per-entry result of [`render_all`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    pub name: &'static str,
    /// Destination relative to the project root.
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Results of a scaffold run, in entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub entries: Vec<EntryReport>,
}

impl Report {
    fn with(&self, want: fn(&Outcome) -> bool) -> impl Iterator<Item = &EntryReport> {
        self.entries.iter().filter(move |e| want(&e.outcome))
    }

    pub fn created(&self) -> impl Iterator<Item = &EntryReport> {
        self.with(|o| matches!(o, Outcome::Created))
    }

    pub fn skipped(&self) -> impl Iterator<Item = &EntryReport> {
        self.with(|o| matches!(o, Outcome::Skipped))
    }

    pub fn failed(&self) -> impl Iterator<Item = &EntryReport> {
        self.with(|o| matches!(o, Outcome::Failed(_)))
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }
}

/// Render and write every entry under `root`.
///
/// A failing entry is recorded and the remaining entries are still
/// attempted. Writes are atomic: a destination either holds the full
/// rendered content or does not exist.
pub fn render_all(
    root: &Path,
    entries: &[TemplateEntry],
    context: &ScaffoldContext,
    templates: &Templates,
) -> Report {
    let mut report = Report::default();

    for entry in entries {
        let outcome = match write_entry(root, entry, context, templates) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(path = %entry.path.display(), error = %e, "failed to write");
                Outcome::Failed(e.to_string())
            }
        };
        report.entries.push(EntryReport {
            name: entry.name,
            path: entry.path.clone(),
            outcome,
        });
    }

    info!(
        created = report.created().count(),
        skipped = report.skipped().count(),
        failed = report.failed().count(),
        "scaffold finished"
    );
    report
}

fn write_entry(
    root: &Path,
    entry: &TemplateEntry,
    context: &ScaffoldContext,
    templates: &Templates,
) -> Result<Outcome> {
    let dest = root.join(&entry.path);
    let parent = dest.parent().unwrap_or(root);
    fs::create_dir_all(parent)?;

    if dest.exists() {
        debug!(path = %dest.display(), "skip: already exists");
        return Ok(Outcome::Skipped);
    }

    let rendered = templates.render(entry, context)?;

    match write_new(&dest, rendered.as_bytes()) {
        Ok(()) => {
            debug!(path = %dest.display(), "created");
            Ok(Outcome::Created)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            debug!(path = %dest.display(), "skip: appeared during write");
            Ok(Outcome::Skipped)
        }
        Err(e) => Err(e.into()),
    }
}

/// Write `contents` to `dest` only if `dest` does not exist.
///
/// Content goes to a temporary file next to `dest` first and is then
/// linked into place without overwriting.
fn write_new(dest: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = dest.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;

    // Temp files are created 0600; scaffold files are ordinary sources.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))?;
    }

    tmp.persist_noclobber(dest).map_err(|e| e.error)?;
    Ok(())
}
