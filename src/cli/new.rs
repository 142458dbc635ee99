use clap::Parser;

/// Arguments for the new command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Prompt for the update name:\n    updatekit new\n\n\
                  Create an update directly:\n    updatekit new week-7-status\n\n\
                  Pipe the name in from a script:\n    echo week-7-status | updatekit new")]
pub struct NewArgs {
    /// Update name, used verbatim as the folder name (prompted for if omitted)
    pub name: Option<String>,
}
