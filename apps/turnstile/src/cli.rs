//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "turnstile")]
#[command(about = "Simulate a single turnstile shared by people entering and exiting")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Arguments for the default `run` command
    #[command(flatten)]
    pub run: RunArgs,
}

impl Cli {
    /// The command to execute; bare invocations mean `run`.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Run(self.run))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Simulate a scenario and print every person's pass tick (default)
    Run(RunArgs),
    /// Print a random valid scenario in the three-line text format
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Three-line text input (count, arrivals, directions); stdin if omitted
    #[arg(short, long, value_name = "FILE", conflicts_with = "input_csv")]
    pub input: Option<PathBuf>,

    /// CSV input with `index,arrival,direction` rows
    #[arg(long, value_name = "FILE")]
    pub input_csv: Option<PathBuf>,

    /// Output format on stdout
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Also write `passes.csv` and `summary.csv` into this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// JSON file with simulator configuration
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Rebuild the waiting lanes with a full scan every tick
    #[arg(long)]
    pub rescan: bool,

    /// Accept input whose arrival times are not in non-decreasing order
    #[arg(long)]
    pub allow_unsorted: bool,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of people
    #[arg(short, long)]
    pub count: usize,

    /// RNG seed; the same seed always yields the same scenario
    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,

    /// Largest gap between consecutive arrivals, in ticks
    #[arg(long, default_value_t = 3)]
    pub max_gap: u64,

    /// Probability that a person is exiting, in [0, 1]
    #[arg(long, default_value_t = 0.5)]
    pub exit_ratio: f64,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Space-separated pass ticks on one line
    #[default]
    Text,
    /// `{"pass_times": [...], "summary": {...}}`
    Json,
    /// Per-person pass log with a header row
    Csv,
}
