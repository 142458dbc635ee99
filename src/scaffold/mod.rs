//! Update scaffolding
//!
//! Creates `<updates>/<name>/`, its `bundle/` folder and a dated README.
//! Nothing is written when the name is blank or the update already
//! exists. Failures after the first directory is created are reported as
//! they happen and are not rolled back.

pub mod template;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{Result, UpdateError, create_dir_failed, write_failed};
use crate::layout::{self, ProjectLayout};
use crate::ui::{Status, StatusReporter};

/// Paths of a freshly created update
#[derive(Debug, Clone)]
pub struct ScaffoldedUpdate {
    pub name: String,
    pub update_dir: PathBuf,
    pub bundle_dir: PathBuf,
    pub readme_path: PathBuf,
}

/// Trim an update name, rejecting names that are empty afterwards
pub fn normalize_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(UpdateError::EmptyName);
    }
    Ok(name.to_string())
}

/// Create a new update folder with its bundle folder and README
pub fn create_update(
    layout: &ProjectLayout,
    raw_name: &str,
    date: NaiveDate,
    reporter: &mut dyn StatusReporter,
) -> Result<ScaffoldedUpdate> {
    let name = normalize_name(raw_name)?;
    let update_dir = layout.update_dir(&name);

    // symlink_metadata so a dangling link still counts as taken
    if update_dir.symlink_metadata().is_ok() {
        return Err(already_exists(&name, &update_dir));
    }

    if let Some(parent) = update_dir.parent() {
        fs::create_dir_all(parent).map_err(|e| create_dir_failed(parent, &e))?;
    }
    fs::create_dir(&update_dir).map_err(|e| {
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            already_exists(&name, &update_dir)
        } else {
            create_dir_failed(&update_dir, &e)
        }
    })?;
    reporter.report(Status::Success, &format!("Created folder: {name}/"));

    let bundle_dir = layout::bundle_dir(&update_dir);
    fs::create_dir(&bundle_dir).map_err(|e| create_dir_failed(&bundle_dir, &e))?;
    reporter.report(
        Status::Success,
        &format!("Created folder: {name}/{}/", layout::BUNDLE_DIR),
    );

    let readme_path = layout::readme_path(&update_dir);
    write_new_file(&readme_path, &template::render_readme(&name, date))?;
    reporter.report(Status::Success, &format!("Created {}", layout::README_FILE));

    tracing::debug!(update = %name, path = %update_dir.display(), "scaffolded update");

    Ok(ScaffoldedUpdate {
        name,
        update_dir,
        bundle_dir,
        readme_path,
    })
}

fn already_exists(name: &str, update_dir: &Path) -> UpdateError {
    UpdateError::UpdateExists {
        name: name.to_string(),
        path: update_dir.display().to_string(),
    }
}

fn write_new_file(path: &Path, contents: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| write_failed(path, &e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| write_failed(path, &e))
}
