mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;
use commands::{handle_check, handle_init, handle_keys, handle_show, Cli, Commands};
use researcher_config::{ErrorFormatter, SettingsBuilder};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let logs = logging::init_logging(cli.debug);

    let mut builder = SettingsBuilder::new();
    if let Some(path) = &cli.config {
        builder = builder.with_file(path);
    }

    // Settings are loaded once here and borrowed by every command.
    let loader = match builder.build() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("{}", ErrorFormatter::new(&e));
            return ExitCode::from(2);
        }
    };
    logs.apply(loader.settings());

    match run(&cli, &loader) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, loader: &researcher_config::SettingsLoader) -> Result<()> {
    match &cli.command {
        Commands::Check => handle_check(loader)?,
        Commands::Show { format } => handle_show(loader, *format)?,
        Commands::Init { force } => handle_init(loader, *force)?,
        Commands::Keys => handle_keys(loader)?,
    }

    Ok(())
}
