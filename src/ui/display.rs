//! Display functions for updates
//!
//! Renders catalog entries for `updatekit list`.

use console::Style;

use crate::catalog::UpdateSummary;

/// Render a yes/no artifact flag
fn presence(present: bool) -> String {
    if present {
        Style::new().green().apply_to("yes").to_string()
    } else {
        Style::new().dim().apply_to("no").to_string()
    }
}

/// Lines describing one update, without trailing newlines
pub fn update_lines(update: &UpdateSummary) -> Vec<String> {
    let bold = Style::new().bold();
    let mut lines = vec![format!(
        "  {} {}",
        Style::new().bold().yellow().apply_to(&update.title),
        Style::new().dim().apply_to(format!("({})", update.slug))
    )];

    let date = update
        .date
        .map_or_else(|| "undated".to_string(), |d| d.format("%Y-%m-%d").to_string());
    lines.push(format!("    {} {}", bold.apply_to("Date:"), date));

    if !update.blurb.is_empty() {
        lines.push(format!("    {} {}", bold.apply_to("About:"), update.blurb));
    }
    if let Some(ref ext) = update.preview {
        lines.push(format!("    {} preview.{}", bold.apply_to("Preview:"), ext));
    }

    lines.push(format!(
        "    {} {}  {} {}",
        bold.apply_to("bundle/:"),
        presence(update.has_bundle_folder),
        bold.apply_to("bundle.zip:"),
        presence(update.has_archive)
    ));
    lines
}

/// Print one update
pub fn display_update(update: &UpdateSummary) {
    for line in update_lines(update) {
        println!("{line}");
    }
}
