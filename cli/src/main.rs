mod check;
mod cli;
mod error;
mod init;
mod list;
mod progress;
mod render;
mod settings;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use render::RenderArgs;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            config,
            output,
            format,
            line_numbers,
            verbose,
        } => render::execute(RenderArgs {
            config,
            output,
            format: format.map(Into::into),
            line_numbers,
            verbose,
        }),
        Commands::List { config } => list::execute(config),
        Commands::Check { config, verbose } => check::execute(config, verbose),
        Commands::Init {
            config,
            catalog,
            force,
        } => init::execute(config, catalog, force),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
