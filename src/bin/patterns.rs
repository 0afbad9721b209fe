use clap::Parser;
use colored::Colorize;
use design_patterns::config::{parse_level, DemoConfig};
use design_patterns::demo::{self, Pattern};
use design_patterns::{telemetry, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Runs design pattern demonstrations.
#[derive(Parser, Debug)]
#[command(name = "patterns", version, about)]
struct Cli {
    /// Patterns to run, in order. Runs all of them when omitted.
    #[arg(value_enum)]
    patterns: Vec<Pattern>,

    /// TOML file with logging, output and cart settings.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print headings without color.
    #[arg(long)]
    no_color: bool,

    /// Overrides `logging.level` from the config file.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    if cli.no_color {
        config.output.color = false;
    }

    let level = match &cli.log_level {
        Some(level) => parse_level(level)?,
        None => config.logging.level_filter()?,
    };
    telemetry::init(level);

    let patterns = if cli.patterns.is_empty() {
        Pattern::ALL.to_vec()
    } else {
        cli.patterns
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (i, pattern) in patterns.into_iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        demo::run(pattern, &mut out, &config)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
