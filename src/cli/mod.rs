//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - new: Scaffold a new update folder
//! - build: Package bundle folders into zip archives
//! - list: List updates
//! - feed: Write the RSS feed
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod build;
pub mod completions;
pub mod feed;
pub mod list;
pub mod new;

pub use build::BuildArgs;
pub use completions::CompletionsArgs;
pub use feed::FeedArgs;
pub use list::ListArgs;
pub use new::NewArgs;

/// updatekit - content update tooling
///
/// Scaffold dated update folders and package their bundles for distribution.
#[derive(Parser, Debug)]
#[command(
    name = "updatekit",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Scaffold content updates and package their bundles",
    long_about = "updatekit manages the src/updates/<name>/ folders of a site: it scaffolds \
                  new dated updates with a README template and packages each update's \
                  bundle/ folder into a bundle.zip archive.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  updatekit new week-7-status          \x1b[90m# Scaffold src/updates/week-7-status\x1b[0m\n   \
                  updatekit build                      \x1b[90m# Zip every bundle/ folder\x1b[0m\n   \
                  updatekit list                       \x1b[90m# Show updates and their archives\x1b[0m\n   \
                  updatekit feed --base-url https://x/ \x1b[90m# Write dist/feed.xml\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project root containing src/updates (defaults to current directory)
    #[arg(long, short = 'r', global = true, env = "UPDATEKIT_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new update folder with a README template
    New(NewArgs),

    /// Build bundle.zip for every update with a bundle/ folder
    Build(BuildArgs),

    /// List updates, newest first
    List(ListArgs),

    /// Write an RSS feed of updates
    Feed(FeedArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
