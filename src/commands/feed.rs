//! Feed command implementation

use std::fs;
use std::path::PathBuf;

use chrono::Utc;

use crate::catalog;
use crate::cli::FeedArgs;
use crate::commands::helpers::project_layout;
use crate::error::{Result, UpdateError, create_dir_failed, write_failed};
use crate::feed::{FeedChannel, render_rss};
use crate::ui::{ConsoleReporter, Status, StatusReporter};

/// Run feed command
pub fn run(root: Option<PathBuf>, args: FeedArgs) -> Result<()> {
    let layout = project_layout(root)?;
    let updates_dir = layout.updates_dir();
    let updates =
        catalog::load_updates(&updates_dir)?.ok_or_else(|| UpdateError::UpdatesRootNotFound {
            path: updates_dir.display().to_string(),
        })?;

    let output = args.output.unwrap_or_else(|| layout.default_feed_path());
    let file_name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let channel = FeedChannel::new(args.title, args.description, &args.base_url, file_name);
    let xml = render_rss(&channel, &updates, Utc::now());

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| create_dir_failed(parent, &e))?;
    }
    fs::write(&output, xml).map_err(|e| write_failed(&output, &e))?;

    let mut reporter = ConsoleReporter;
    reporter.report(
        Status::Success,
        &format!("RSS feed generated: {}", output.display()),
    );
    reporter.report(
        Status::Plain,
        &format!("   {} items included", updates.len()),
    );
    Ok(())
}
