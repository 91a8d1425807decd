use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use valida_cli::commands::{build, inspect, render, stats};
use valida_cli::{Cli, Commands, Config, EventArgs};
use valida_core::Event;

/// Load config for the event directory and normalize its exports.
fn open_event(args: &EventArgs, config_path: Option<&Path>) -> Result<(Event, Config)> {
    let mut config =
        Config::load(&args.event_dir, config_path).context("failed to load configuration")?;
    if let Some(discipline) = args.discipline {
        config.discipline = discipline;
    }
    tracing::debug!(?config, "loaded configuration");

    let input = config.input_path(&args.event_dir);
    let event = Event::load(&input, config.discipline, config.synonyms())
        .with_context(|| format!("failed to load exports from {}", input.display()))?;
    Ok((event, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let args = command.event();
    let (event, config) = open_event(args, cli.config.as_deref())?;
    let mut stdout = std::io::stdout().lock();

    match command {
        Commands::Stats { stdout: to_stdout, .. } => {
            stats::run(&mut stdout, &event, &config, &args.event_dir, *to_stdout)?;
        }
        Commands::Render { .. } => render::run(&mut stdout, &event, &config, &args.event_dir)?,
        Commands::Build { .. } => build::run(&mut stdout, &event, &config, &args.event_dir)?,
        Commands::Inspect { .. } => inspect::run(&mut stdout, &event)?,
    }

    Ok(())
}
