//! MOOC report generator binary

use anyhow::Context;
use clap::{ArgAction, Parser};
use mooc_reports::{run, Config};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "mooc-reports")]
#[command(version, about = "Generate MOOC approval request reports from course mappings")]
struct Args {
    /// Mapping configuration file
    #[arg(short, long, default_value = "config/mappings.toml")]
    config: PathBuf,

    /// Output directory (overrides settings.output_dir)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Semester label (overrides settings.semester)
    #[arg(long)]
    semester: Option<String>,

    /// Do not build the summary proposal
    #[arg(long)]
    skip_proposal: bool,

    /// Exit with a failure code when any report failed
    #[arg(long)]
    strict: bool,

    /// Log debug output
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let level = if args.verbose > 0 {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let mut config = Config::from_file(&args.config)?;
    if let Some(output) = args.output {
        config.settings.output_dir = output;
    }
    if let Some(semester) = args.semester {
        config.settings.report.semester = semester;
    }

    let output_dir = &config.settings.output_dir;
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    tracing::info!("MOOC report generator v{}", env!("CARGO_PKG_VERSION"));
    let summary = run(
        &config.settings.report,
        &config.mappings,
        output_dir,
        !args.skip_proposal,
    );

    if args.strict && summary.has_errors() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
