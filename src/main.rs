use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use pyproject_clean::{logging, ArtifactSpec, AssumeYes, Cleaner, Confirm, LogLevel, Prompt};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Remove Python build artifacts and caches from the current project directory",
    long_about = None
)]
struct Args {
    /// Logging level
    #[arg(long, short = 'l', value_parser = str::parse::<LogLevel>, default_value = "info")]
    log_level: LogLevel,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    yes: bool,
}

fn run(args: Args) -> Result<()> {
    logging::init(args.log_level)?;

    let root = std::env::current_dir().context("Failed to determine the current directory")?;
    let spec = ArtifactSpec::builtin().context("Failed to load artifact patterns")?;

    let mut confirm: Box<dyn Confirm> = if args.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(Prompt::stdio())
    };

    Cleaner::new(&spec).run_with(&root, confirm.as_mut())?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
