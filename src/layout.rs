//! Project layout constants and path resolution
//!
//! Every path the tools read or write is derived from a single project root:
//!
//! ```text
//! <root>/src/updates/<name>/README.md
//! <root>/src/updates/<name>/bundle/**
//! <root>/src/updates/<name>/bundle.zip
//! <root>/dist/feed.xml
//! ```

use std::path::{Path, PathBuf};

/// Source directory under the project root
const SRC_DIR: &str = "src";

/// Updates directory within `src/`
pub const UPDATES_DIR: &str = "updates";

/// Bundle folder inside each update
pub const BUNDLE_DIR: &str = "bundle";

/// Generated archive name, sibling of the bundle folder
pub const ARCHIVE_FILE: &str = "bundle.zip";

/// Description file written by the scaffolder
pub const README_FILE: &str = "README.md";

/// Build output directory under the project root
const DIST_DIR: &str = "dist";

/// Default feed file name within `dist/`
const FEED_FILE: &str = "feed.xml";

/// Preview image extensions, in lookup order
pub const PREVIEW_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// Resolved paths for one project root
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<root>/src/updates`
    pub fn updates_dir(&self) -> PathBuf {
        self.root.join(SRC_DIR).join(UPDATES_DIR)
    }

    /// `<root>/src/updates/<name>`; the name is used verbatim
    pub fn update_dir(&self, name: &str) -> PathBuf {
        self.updates_dir().join(name)
    }

    /// `<root>/dist/feed.xml`
    pub fn default_feed_path(&self) -> PathBuf {
        self.root.join(DIST_DIR).join(FEED_FILE)
    }
}

/// `<update>/bundle`
pub fn bundle_dir(update_dir: &Path) -> PathBuf {
    update_dir.join(BUNDLE_DIR)
}

/// `<update>/README.md`
pub fn readme_path(update_dir: &Path) -> PathBuf {
    update_dir.join(README_FILE)
}

/// Archive path for a bundle folder: `bundle.zip` next to it.
///
/// Falls back to placing the archive inside `bundle_folder` only when the
/// folder has no parent, which cannot happen for paths built by
/// [`ProjectLayout`].
pub fn archive_path_for(bundle_folder: &Path) -> PathBuf {
    bundle_folder
        .parent()
        .unwrap_or(bundle_folder)
        .join(ARCHIVE_FILE)
}
