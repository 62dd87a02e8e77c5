//! Burnish CLI - cleaning service and offline cleaning tool.

mod cli;
mod commands;
mod generate;
mod jobs;
mod server;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            generator,
        } => commands::serve::run(host, port, generator),

        Commands::Clean { file, output, json } => {
            commands::clean::run(file, output, json, cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
