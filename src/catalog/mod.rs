//! Read-only view of the updates tree
//!
//! Each update directory with a README becomes an [`UpdateSummary`]:
//! its slug, README date/title/blurb, preview image and artifact state.

pub mod readme;

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{Result, read_failed};
use crate::layout::{self, PREVIEW_EXTENSIONS};

pub use readme::{ReadmeInfo, parse_readme};

/// One update as seen by `list` and `feed`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateSummary {
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    pub title: String,
    pub blurb: String,
    /// Preview image file extension, e.g. `png`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    pub has_bundle_folder: bool,
    pub has_archive: bool,
    #[serde(skip)]
    pub readme_modified: Option<DateTime<Utc>>,
}

impl UpdateSummary {
    /// Date used for ordering and publishing: frontmatter date, else README mtime
    pub fn effective_date(&self) -> Option<DateTime<Utc>> {
        self.date.or(self.readme_modified)
    }
}

/// First existing `preview.<ext>` in `update_dir`
pub fn find_preview(update_dir: &Path) -> Option<&'static str> {
    PREVIEW_EXTENSIONS
        .iter()
        .copied()
        .find(|ext| update_dir.join(format!("preview.{ext}")).is_file())
}

/// Summarize one update directory; `None` when it has no readable README
pub fn summarize(update_dir: &Path) -> Option<UpdateSummary> {
    let readme_path = layout::readme_path(update_dir);
    let content = match fs::read_to_string(&readme_path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(path = %readme_path.display(), error = %e, "skipping update without README");
            return None;
        }
    };
    let ReadmeInfo { date, title, blurb } = parse_readme(&content);

    let readme_modified = fs::metadata(&readme_path)
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Utc>::from);

    Some(UpdateSummary {
        slug: update_dir.file_name()?.to_string_lossy().into_owned(),
        date,
        title,
        blurb,
        preview: find_preview(update_dir).map(str::to_string),
        has_bundle_folder: layout::bundle_dir(update_dir).is_dir(),
        has_archive: layout::archive_path_for(&layout::bundle_dir(update_dir)).is_file(),
        readme_modified,
    })
}

/// Load every update under `updates_dir`, newest first.
///
/// Dated updates come before undated ones; ties are broken by slug.
/// Returns `Ok(None)` when `updates_dir` does not exist.
pub fn load_updates(updates_dir: &Path) -> Result<Option<Vec<UpdateSummary>>> {
    let entries = match fs::read_dir(updates_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(read_failed(updates_dir, &e)),
    };

    let mut updates = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| read_failed(updates_dir, &e))?.path();
        if path.is_dir() {
            updates.extend(summarize(&path));
        }
    }

    updates.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| a.slug.cmp(&b.slug))
    });
    Ok(Some(updates))
}
