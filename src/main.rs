//! devmon CLI entry point
//!
//! With a subcommand: run one registry operation and exit (non-zero on
//! rejection). Without one: open the interactive menu on a TTY.

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use devmon::cli::Cli;
use devmon::commands;
use devmon::config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Some(command) => commands::run(command, &config),
        None => {
            if !std::io::stdin().is_terminal() {
                eprintln!("No command given and no terminal attached.");
                eprintln!("Run 'devmon --help' for the available commands.");
                std::process::exit(2);
            }
            commands::interactive::run(&config)
        }
    }
}
