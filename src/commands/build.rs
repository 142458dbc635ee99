//! Build command implementation
//!
//! Archives every `src/updates/*/bundle/` folder into a sibling
//! `bundle.zip` and exits non-zero when any of them failed.

use std::path::PathBuf;

use crate::bundle;
use crate::cli::BuildArgs;
use crate::commands::helpers::project_layout;
use crate::error::{Result, UpdateError};
use crate::ui::{
    ConsoleReporter, InteractiveProgressReporter, ProgressReporter, SilentProgressReporter,
};

/// Run build command
pub fn run(root: Option<PathBuf>, args: BuildArgs) -> Result<()> {
    let layout = project_layout(root)?;
    let mut progress: Box<dyn ProgressReporter> = if args.quiet {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(InteractiveProgressReporter::default())
    };

    let summary = bundle::build_all(&layout, &mut ConsoleReporter, progress.as_mut())?;

    if summary.is_success() {
        Ok(())
    } else {
        Err(UpdateError::BuildIncomplete {
            failed: summary.failures.len(),
            total: summary.total,
        })
    }
}
