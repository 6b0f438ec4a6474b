//! turnstile — command-line front end for the turnstile simulator.
//!
//! ```text
//! $ printf '4\n0 0 1 5\n0 1 1 0\n' | turnstile
//! 2 0 1 5
//! $ turnstile generate --count 1000 --seed 7 | turnstile --format json
//! ```
//!
//! Malformed input exits with status 2.  Set `RUST_LOG=debug` to see idle
//! gaps on stderr.

mod cli;
mod input;
mod report;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ts_core::{ScenarioRng, ScenarioSpec};
use ts_output::{CsvWriter, PassLogObserver};
use ts_queue::QueueError;
use ts_sim::SimBuilder;

use cli::{Cli, Command, Format, GenerateArgs, RunArgs};
use report::ReportObserver;

/// Exit status for input the simulator refuses to run.
const EXIT_BAD_INPUT: u8 = 2;

/// How a command finished, short of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Done,
    /// Input was malformed; the reason is already on stderr.
    Rejected,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Done     => ExitCode::SUCCESS,
            Status::Rejected => ExitCode::from(EXIT_BAD_INPUT),
        }
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let status = match Cli::parse().into_command() {
        Command::Run(args)      => run(&args)?,
        Command::Generate(args) => generate(&args)?,
    };
    Ok(status.into())
}

// ── run ───────────────────────────────────────────────────────────────────────

fn run(args: &RunArgs) -> Result<Status> {
    let config = input::load_config(args)?;

    let people = match input::load_people(args) {
        Ok(people) => people,
        Err(QueueError::Io(e)) => return Err(e).context("reading input"),
        Err(e) => return Ok(reject(&e)),
    };

    let mut sim = match SimBuilder::new(people).config(config).build() {
        Ok(sim) => sim,
        Err(e) if e.is_input_error() => return Ok(reject(&e)),
        Err(e) => return Err(e.into()),
    };

    let mut observer = ReportObserver::default();
    if let Some(dir) = &args.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating log dir {}", dir.display()))?;
        observer.log_dir = Some(PassLogObserver::new(CsvWriter::new(dir)?));
    }
    if args.format == Format::Csv {
        observer.stdout = Some(PassLogObserver::new(CsvWriter::from_writer(io::stdout())?));
    }

    // Invariant violations are simulator bugs, not bad input.
    let times = sim.run(&mut observer)?;
    if let Some(e) = observer.take_error() {
        return Err(e).context("writing pass log");
    }

    let mut out = io::stdout().lock();
    match args.format {
        Format::Text => writeln!(out, "{times}")?,
        Format::Json => {
            let summary = observer
                .summary
                .unwrap_or_else(|| times.summary(sim.people(), sim.clock.idle_jumps));
            serde_json::to_writer_pretty(&mut out, &report::json_report(&times, &summary))?;
            writeln!(out)?;
        }
        Format::Csv => {}
    }
    Ok(Status::Done)
}

/// Report malformed input.
fn reject(err: &dyn std::error::Error) -> Status {
    tracing::warn!(error = %err, "rejecting input");
    eprintln!("turnstile: invalid input: {err}");
    Status::Rejected
}

// ── generate ──────────────────────────────────────────────────────────────────

fn generate(args: &GenerateArgs) -> Result<Status> {
    let spec = ScenarioSpec {
        count:      args.count,
        max_gap:    args.max_gap,
        exit_ratio: args.exit_ratio,
    };
    let people = ScenarioRng::new(args.seed).people(&spec)?;
    tracing::info!(count = people.len(), seed = args.seed, "generated scenario");

    report::write_scenario(io::stdout().lock(), &people)?;
    Ok(Status::Done)
}
