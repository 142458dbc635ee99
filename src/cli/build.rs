use clap::Parser;

/// Arguments for the build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Build every bundle.zip under src/updates:\n    updatekit build\n\n\
                  Build for another project:\n    updatekit --root ../site build")]
pub struct BuildArgs {
    /// Do not draw per-file progress bars
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
