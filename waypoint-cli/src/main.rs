mod loader;
mod reports;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

use loader::FileDataLoader;
use reports::{CheckReport, generate_console_report, generate_json_report};
use waypoint_core::{DataLoader, render_trip_events};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary
    Console,
    /// Machine-readable issue list
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the trip events list as HTML
    Render {
        /// Trip data file ({points, destinations, offers})
        #[arg(long)]
        data: PathBuf,
    },
    /// Validate trip data and report problems; exits with 1 when any are found
    Check {
        /// Trip data file ({points, destinations, offers})
        #[arg(long)]
        data: PathBuf,

        /// Output report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
        report: ReportFormat,
    },
}

#[derive(Debug, Parser)]
#[command(name = "waypoint", version)]
#[command(about = "Render and check trip point data for the trip events list")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Optional path to write the output instead of stdout
    #[arg(long, global = true)]
    output: Option<PathBuf>,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match &args.command {
        Command::Render { data } => run_render(&args, data),
        Command::Check { data, report } => {
            let passed = run_check(&args, data, *report)?;
            if !passed {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

fn run_render(args: &Args, data: &Path) -> Result<()> {
    let catalog = FileDataLoader::new(data).load_catalog()?;
    let html = render_trip_events(&catalog)
        .with_context(|| format!("rendering {}", data.display()))?;

    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "{html}")?;
    output_target.flush_inner()?;
    log::info!("rendered {} points", catalog.points.len());
    Ok(())
}

fn run_check(args: &Args, data: &Path, format: ReportFormat) -> Result<bool> {
    let catalog = FileDataLoader::new(data).load_catalog()?;
    let issues = catalog.validate();
    let report = CheckReport {
        data: data.display().to_string(),
        points: catalog.points.len(),
        destinations: catalog.destinations.len(),
        issues: &issues,
    };

    let mut output_target = OutputTarget::new(args.output.clone())?;
    match format {
        ReportFormat::Console => generate_console_report(output_target.writer(), &report)?,
        ReportFormat::Json => generate_json_report(output_target.writer(), &report)?,
    }
    output_target.flush_inner()?;

    if !report.passed() {
        log::warn!("{} issue(s) in {}", issues.len(), report.data);
    }
    Ok(report.passed())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}
