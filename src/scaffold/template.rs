//! README template for a freshly scaffolded update

use chrono::NaiveDate;

/// Derive a display title from an update name.
///
/// Hyphens become spaces. A letter that follows a non-letter starts a
/// word and is upper-cased; every other letter is lower-cased, so
/// `3d-print` becomes `3D Print`.
pub fn title_from_name(name: &str) -> String {
    let mut title = String::with_capacity(name.len());
    let mut after_letter = false;

    for ch in name.chars() {
        let ch = if ch == '-' { ' ' } else { ch };
        if !ch.is_alphabetic() {
            title.push(ch);
            after_letter = false;
        } else if after_letter {
            title.extend(ch.to_lowercase());
        } else {
            title.extend(ch.to_uppercase());
            after_letter = true;
        }
    }

    title
}

/// Render the README written into a new update folder
pub fn render_readme(name: &str, date: NaiveDate) -> String {
    format!(
        "---
date: {date}
---

# {title}

TODO: Add description and details for this update.

## Files

Add files to the `bundle/` directory:
- bundle/file1.pdf
- bundle/file2.docx
- etc.

## Build

Run `updatekit build` to create the bundle.zip file for production.
",
        date = date.format("%Y-%m-%d"),
        title = title_from_name(name),
    )
}
