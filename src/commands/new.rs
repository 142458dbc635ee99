//! New command implementation
//!
//! Scaffolds `src/updates/<name>/` with a `bundle/` folder and a README.
//! The name comes from the argument, an interactive prompt, or the first
//! line of piped stdin.

use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use chrono::Local;
use inquire::Text;

use crate::cli::NewArgs;
use crate::commands::helpers::project_layout;
use crate::error::Result;
use crate::scaffold;
use crate::ui::{ConsoleReporter, Status, StatusReporter};

const PROMPT: &str = "Enter update name (e.g., 'week-7-status'):";

/// Run new command
pub fn run(root: Option<PathBuf>, args: NewArgs) -> Result<()> {
    let layout = project_layout(root)?;
    let raw_name = match args.name {
        Some(name) => name,
        None => prompt_name()?,
    };

    let mut reporter = ConsoleReporter;
    let created = scaffold::create_update(
        &layout,
        &raw_name,
        Local::now().date_naive(),
        &mut reporter,
    )?;

    tracing::info!(
        update = %created.name,
        bundle = %created.bundle_dir.display(),
        readme = %created.readme_path.display(),
        "update scaffolded"
    );

    reporter.blank();
    reporter.report(Status::Done, "Update folder created successfully!");
    reporter.blank();
    reporter.report(
        Status::Plain,
        &format!("Location: {}", created.update_dir.display()),
    );

    Ok(())
}

/// Ask for the update name on a terminal, otherwise read one line of stdin
fn prompt_name() -> Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(Text::new(PROMPT).prompt()?);
    }

    print!("{PROMPT} ");
    std::io::stdout().flush()?;
    let name = read_name(stdin.lock())?;
    println!();
    Ok(name)
}

fn read_name(mut reader: impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line)
}
