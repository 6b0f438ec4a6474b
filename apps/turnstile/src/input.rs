//! Reading people and configuration from disk or stdin.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::Context;
use ts_core::{Person, SimConfig};
use ts_queue::{QueueResult, load_people_csv, read_people_text};

use crate::cli::RunArgs;

/// Load people from `--input-csv`, `--input`, or stdin, in that order.
pub fn load_people(args: &RunArgs) -> QueueResult<Vec<Person>> {
    if let Some(path) = &args.input_csv {
        return load_people_csv(path);
    }
    match &args.input {
        Some(path) => read_people_text(BufReader::new(File::open(path)?)),
        None => read_people_text(io::stdin().lock()),
    }
}

/// Load `--config` (if given) and apply the flag overrides on top.
pub fn load_config(args: &RunArgs) -> anyhow::Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => SimConfig::default(),
    };
    if args.rescan {
        config.candidate_scan = ts_core::CandidateScan::Rescan;
    }
    if args.allow_unsorted {
        config.require_sorted_arrivals = false;
    }
    Ok(config)
}

fn read_config(path: &Path) -> anyhow::Result<SimConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}
