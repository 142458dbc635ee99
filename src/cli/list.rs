use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List updates, newest first:\n    updatekit list\n\n\
                  Machine-readable output:\n    updatekit list --json")]
pub struct ListArgs {
    /// Print updates as a JSON array
    #[arg(long)]
    pub json: bool,
}
