use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use workout_compute::{parse_package, summarize, SAMPLE_PACKAGES};

#[derive(Parser, Debug)]
#[command(name = "fitness-tracker")]
#[command(version)]
#[command(about = "Workout distance, speed and calorie summaries", long_about = None)]
struct Cli {
    /// Packages to process, e.g. "RUN 15000 1 75" (defaults to the built-in samples)
    #[arg(value_name = "PACKAGE")]
    packages: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli.packages, &mut out)
}

/// Write one summary line per package as soon as it is computed. The first
/// failing package ends the run; lines already written stay written.
fn run(packages: &[String], out: &mut impl Write) -> Result<()> {
    if packages.is_empty() {
        debug!("no packages given, using samples");
        for (code, values) in SAMPLE_PACKAGES {
            let line = summarize(code, values)
                .with_context(|| format!("failed to summarize sample package {code}"))?;
            writeln!(out, "{line}")?;
        }
        return Ok(());
    }

    for raw in packages {
        let package = parse_package(raw).with_context(|| format!("invalid package '{raw}'"))?;
        let line = summarize(&package.code, &package.values)
            .with_context(|| format!("failed to summarize package '{raw}'"))?;
        writeln!(out, "{line}")?;
    }

    Ok(())
}
