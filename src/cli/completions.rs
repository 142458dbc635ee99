use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    updatekit completions bash > ~/.bash_completion.d/updatekit\n\n\
                  Generate zsh completions:\n    updatekit completions zsh > ~/.zfunc/_updatekit\n\n\
                  Generate fish completions:\n    updatekit completions fish > ~/.config/fish/completions/updatekit.fish\n\n\
                  Generate PowerShell completions:\n    updatekit completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
