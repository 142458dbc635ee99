//! UI/Progress presentation layer
//!
//! This module handles:
//! - Operator-facing status lines (emoji-prefixed, styled with `console`)
//! - Per-file progress while an archive is being written (`indicatif`)
//! - Rendering of fatal errors before the process exits
//!
//! Commands talk to the terminal only through [`StatusReporter`] and
//! [`ProgressReporter`], so core operations can run silently in tests.

pub mod display;

use console::Style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use miette::Diagnostic;

/// Kind of a status line; decides its prefix and color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A command is starting (`🔨`)
    Start,
    /// Discovery summary (`📦`)
    Found,
    /// Indented list entry (`  - `)
    Item,
    Success,
    Failure,
    Info,
    Warning,
    /// Final all-good line (`🎉`)
    Done,
    /// Unprefixed text
    Plain,
}

impl Status {
    fn prefix(self) -> &'static str {
        match self {
            Status::Start => "🔨 ",
            Status::Found => "📦 ",
            Status::Item => "  - ",
            Status::Success => "✅ ",
            Status::Failure => "❌ ",
            Status::Info => "ℹ️  ",
            Status::Warning => "⚠️  ",
            Status::Done => "🎉 ",
            Status::Plain => "",
        }
    }

    fn style(self) -> Style {
        match self {
            Status::Success | Status::Done => Style::new().green(),
            Status::Failure => Style::new().red().bold(),
            Status::Warning => Style::new().yellow(),
            Status::Start | Status::Found => Style::new().bold(),
            Status::Item => Style::new().cyan(),
            Status::Info | Status::Plain => Style::new(),
        }
    }
}

/// Sink for human-readable status lines
pub trait StatusReporter {
    fn report(&mut self, status: Status, message: &str);

    /// Emit an empty separator line
    fn blank(&mut self) {
        self.report(Status::Plain, "");
    }
}

/// Prints status lines to stdout
#[derive(Default)]
pub struct ConsoleReporter;

impl StatusReporter for ConsoleReporter {
    fn report(&mut self, status: Status, message: &str) {
        if status == Status::Plain {
            println!("{message}");
        } else {
            println!("{}{}", status.prefix(), status.style().apply_to(message));
        }
    }
}

/// Collects status lines in memory
#[cfg(test)]
#[derive(Default)]
pub struct BufferedReporter {
    pub lines: Vec<(Status, String)>,
}

#[cfg(test)]
impl BufferedReporter {
    pub fn contains(&self, status: Status, needle: &str) -> bool {
        self.lines
            .iter()
            .any(|(s, line)| *s == status && line.contains(needle))
    }
}

#[cfg(test)]
impl StatusReporter for BufferedReporter {
    fn report(&mut self, status: Status, message: &str) {
        self.lines.push((status, message.to_string()));
    }
}

/// Progress reporter for archive writing
pub trait ProgressReporter {
    /// Begin an archive with a known number of files
    fn start_archive(&mut self, name: &str, total_files: u64);

    /// One file has been written into the archive
    fn file_added(&mut self, entry_name: &str);

    /// The archive finished (successfully or not)
    fn finish_archive(&mut self);
}

/// Progress bars on stderr; hidden automatically when stderr is not a terminal
#[derive(Default)]
pub struct InteractiveProgressReporter {
    file_pb: Option<ProgressBar>,
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start_archive(&mut self, name: &str, total_files: u64) {
        let file_pb =
            ProgressBar::with_draw_target(Some(total_files), ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::default_bar()
            .template("  {prefix:.bold} [{bar:40.green/yellow}] {pos}/{len} files {msg}")
        {
            file_pb.set_style(style.progress_chars("█▉▊▋▌▍▎▏  "));
        }
        file_pb.set_prefix(name.to_string());
        self.file_pb = Some(file_pb);
    }

    fn file_added(&mut self, entry_name: &str) {
        if let Some(ref file_pb) = self.file_pb {
            // Keep the tail of long paths
            let display_path = if entry_name.chars().count() > 50 {
                let tail: String = entry_name
                    .chars()
                    .rev()
                    .take(47)
                    .collect::<Vec<_>>()
                    .into_iter()
                    .rev()
                    .collect();
                format!("...{tail}")
            } else {
                entry_name.to_string()
            };
            file_pb.set_message(display_path);
            file_pb.inc(1);
        }
    }

    fn finish_archive(&mut self) {
        if let Some(file_pb) = self.file_pb.take() {
            file_pb.finish_and_clear();
        }
    }
}

/// No-op progress reporter
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start_archive(&mut self, _name: &str, _total_files: u64) {}

    fn file_added(&mut self, _entry_name: &str) {}

    fn finish_archive(&mut self) {}
}

/// Print a fatal error and its help text to stderr
pub fn report_error<E: Diagnostic>(err: &E) {
    eprintln!(
        "{}{}",
        Status::Failure.prefix(),
        Style::new().red().bold().apply_to(err)
    );
    if let Some(help) = err.help() {
        eprintln!("   {} {}", Style::new().dim().apply_to("help:"), help);
    }
}
