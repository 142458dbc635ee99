//! List command implementation
//!
//! This command lists updates newest first with their dates, blurbs and
//! whether a bundle folder and archive are present.

use std::path::PathBuf;

use crate::catalog;
use crate::cli::ListArgs;
use crate::commands::helpers::project_layout;
use crate::error::Result;
use crate::ui::display;

/// Run list command
pub fn run(root: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let layout = project_layout(root)?;
    let updates = catalog::load_updates(&layout.updates_dir())?.unwrap_or_default();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&updates)?);
        return Ok(());
    }

    if updates.is_empty() {
        println!("No updates found.");
        return Ok(());
    }

    println!("Updates ({}):", updates.len());
    println!();
    for update in &updates {
        display::display_update(update);
        println!();
    }

    Ok(())
}
