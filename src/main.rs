// ABOUTME: Main entry point for the vitality program.
// ABOUTME: Provides CLI interface and executes compile and watch from the library.

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Generate presentation slides.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Slide configuration file
    config: PathBuf,

    /// Output file for the resolved presentation
    #[arg(short, long)]
    output: PathBuf,

    /// Verbose mode
    #[arg(short, long)]
    verbose: bool,

    /// Watch file for changes
    #[arg(short, long)]
    watch: bool,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let app_config = vitality::Config::from_env();

    vitality::compile_presentation(&cli.config, &cli.output, app_config.pretty_json)
        .with_context(|| format!("Failed to compile {:?}", cli.config))?;
    println!("Presentation generated at {}", cli.output.display());

    if cli.watch {
        let watch_config = app_config.get_watch_config(cli.config.clone(), cli.output.clone());
        vitality::watch_presentation(&watch_config)?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(&cli) {
        if cli.verbose {
            eprintln!("Error: {:?}", e);
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}
