//! Command helper utilities

use std::path::PathBuf;

use crate::error::{Result, UpdateError};
use crate::layout::ProjectLayout;

/// Resolve project root from optional argument
///
/// If a root path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| UpdateError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}

/// Layout for the resolved project root
pub fn project_layout(root: Option<PathBuf>) -> Result<ProjectLayout> {
    let root = resolve_root(root)?;
    tracing::debug!(root = %root.display(), "project root");
    Ok(ProjectLayout::new(root))
}
