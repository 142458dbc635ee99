use clap::Parser;
use std::path::PathBuf;

/// Arguments for the feed command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Write dist/feed.xml:\n    updatekit feed --base-url https://team.github.io/\n\n\
                  Custom channel and output:\n    updatekit feed --base-url https://team.github.io/ --title \"Team Updates\" -o public/rss.xml")]
pub struct FeedArgs {
    /// Public site root that item links and images are built from
    #[arg(long, env = "UPDATEKIT_BASE_URL")]
    pub base_url: String,

    /// Channel title
    #[arg(long, default_value = "Updates")]
    pub title: String,

    /// Channel description
    #[arg(long, default_value = "Updates feed")]
    pub description: String,

    /// Output file (defaults to <root>/dist/feed.xml)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}
