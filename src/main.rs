//! updatekit - content update tooling
//!
//! Scaffolds dated update folders under `src/updates/` and packages each
//! update's `bundle/` folder into a `bundle.zip` archive for distribution.

use clap::Parser;

mod bundle;
mod catalog;
mod cli;
mod commands;
mod error;
mod feed;
mod layout;
mod logging;
mod scaffold;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::New(args) => commands::new::run(cli.root, args),
        Commands::Build(args) => commands::build::run(cli.root, args),
        Commands::List(args) => commands::list::run(cli.root, args),
        Commands::Feed(args) => commands::feed::run(cli.root, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        ui::report_error(&e);
        std::process::exit(1);
    }
}
