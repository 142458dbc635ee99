//! Bundle discovery and building
//!
//! Every `<updates>/<name>/bundle/` folder is archived into
//! `<updates>/<name>/bundle.zip`. A failure on one bundle is reported and
//! counted, then the next bundle is built anyway.

pub mod archive;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, UpdateError, read_failed};
use crate::layout::{self, ProjectLayout};
use crate::ui::{ProgressReporter, Status, StatusReporter};

/// An update that has a bundle folder to archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleFolder {
    pub update_name: String,
    pub path: PathBuf,
}

impl BundleFolder {
    pub fn archive_path(&self) -> PathBuf {
        layout::archive_path_for(&self.path)
    }
}

/// Outcome of building every discovered bundle
#[derive(Debug, Default)]
pub struct BuildSummary {
    pub total: usize,
    pub built: Vec<PathBuf>,
    pub failures: Vec<(String, UpdateError)>,
}

impl BuildSummary {
    pub fn succeeded(&self) -> usize {
        self.built.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Find every immediate subdirectory of `updates_dir` that has a `bundle/`
/// folder, sorted by update name.
///
/// Returns `Ok(None)` when `updates_dir` does not exist.
pub fn find_bundle_folders(updates_dir: &Path) -> Result<Option<Vec<BundleFolder>>> {
    let entries = match fs::read_dir(updates_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(read_failed(updates_dir, &e)),
    };

    let mut folders = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| read_failed(updates_dir, &e))?;
        let update_dir = entry.path();
        if !update_dir.is_dir() {
            continue;
        }

        let bundle_dir = layout::bundle_dir(&update_dir);
        if bundle_dir.is_dir() {
            folders.push(BundleFolder {
                update_name: entry.file_name().to_string_lossy().into_owned(),
                path: bundle_dir,
            });
        } else {
            tracing::debug!(update = %update_dir.display(), "no bundle folder, skipping");
        }
    }

    folders.sort_by(|a, b| a.update_name.cmp(&b.update_name));
    Ok(Some(folders))
}

/// Discover and archive every bundle folder under the project's updates root
pub fn build_all(
    layout: &ProjectLayout,
    reporter: &mut dyn StatusReporter,
    progress: &mut dyn ProgressReporter,
) -> Result<BuildSummary> {
    reporter.report(Status::Start, "Building bundle zip files...");

    let updates_dir = layout.updates_dir();
    let folders = match find_bundle_folders(&updates_dir)? {
        Some(folders) => folders,
        None => {
            reporter.report(
                Status::Failure,
                &format!("Updates directory not found: {}", updates_dir.display()),
            );
            Vec::new()
        }
    };

    let mut summary = BuildSummary {
        total: folders.len(),
        ..BuildSummary::default()
    };

    if folders.is_empty() {
        reporter.report(Status::Info, "No bundle folders found to build");
        return Ok(summary);
    }

    reporter.report(
        Status::Found,
        &format!("Found {} bundle folders:", folders.len()),
    );

    for folder in folders {
        reporter.report(Status::Item, &folder.update_name);
        let archive_path = folder.archive_path();

        match archive::write_archive(&folder.path, &archive_path, progress) {
            Ok(_) => {
                reporter.report(
                    Status::Success,
                    &format!("Created: {}", archive_path.display()),
                );
                summary.built.push(archive_path);
            }
            Err(err) => {
                tracing::debug!(update = %folder.update_name, error = %err, "bundle failed");
                reporter.report(Status::Failure, &err.to_string());
                summary.failures.push((folder.update_name, err));
            }
        }
    }

    reporter.blank();
    reporter.report(
        Status::Success,
        &format!(
            "Successfully built {}/{} bundle zip files",
            summary.succeeded(),
            summary.total
        ),
    );
    if summary.is_success() {
        reporter.report(Status::Done, "All bundles built successfully!");
    } else {
        reporter.report(Status::Warning, "Some bundles failed to build");
    }

    Ok(summary)
}
