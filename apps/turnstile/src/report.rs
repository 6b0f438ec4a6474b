//! Rendering results and scenarios for stdout.

use std::fs::File;
use std::io::{self, Write};

use ts_core::{Person, Tick};
use ts_output::{CsvWriter, OutputError, PassLogObserver, SummaryRow};
use ts_sim::{PassRecord, PassTimes, RunSummary, SimObserver};

/// Fans simulator events out to the optional pass logs.
#[derive(Default)]
pub struct ReportObserver {
    pub log_dir: Option<PassLogObserver<CsvWriter<File>>>,
    pub stdout:  Option<PassLogObserver<CsvWriter<io::Stdout>>>,
    pub summary: Option<RunSummary>,
}

impl ReportObserver {
    /// First write error from either log.
    pub fn take_error(&mut self) -> Option<OutputError> {
        let from_dir = self.log_dir.as_mut().and_then(PassLogObserver::take_error);
        from_dir.or_else(|| self.stdout.as_mut().and_then(PassLogObserver::take_error))
    }
}

impl SimObserver for ReportObserver {
    fn on_pass(&mut self, record: &PassRecord) {
        if let Some(obs) = self.log_dir.as_mut() {
            obs.on_pass(record);
        }
        if let Some(obs) = self.stdout.as_mut() {
            obs.on_pass(record);
        }
    }

    fn on_idle_jump(&mut self, from: Tick, to: Tick) {
        tracing::debug!(from = from.0, to = to.0, "idle gap");
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        if let Some(obs) = self.log_dir.as_mut() {
            obs.on_sim_end(summary);
        }
        if let Some(obs) = self.stdout.as_mut() {
            obs.on_sim_end(summary);
        }
        self.summary = Some(*summary);
    }
}

/// `{"pass_times": [...], "summary": {...}}`
pub fn json_report(times: &PassTimes, summary: &RunSummary) -> serde_json::Value {
    serde_json::json!({
        "pass_times": times.to_u64s(),
        "summary":    SummaryRow::from(summary),
    })
}

/// Write `people` in the three-line text format read by `turnstile run`.
pub fn write_scenario<W: Write>(mut out: W, people: &[Person]) -> io::Result<()> {
    writeln!(out, "{}", people.len())?;
    let arrivals: Vec<String> = people.iter().map(|p| p.arrival().0.to_string()).collect();
    writeln!(out, "{}", arrivals.join(" "))?;
    let directions: Vec<String> = people.iter().map(|p| p.direction().code().to_string()).collect();
    writeln!(out, "{}", directions.join(" "))?;
    Ok(())
}
