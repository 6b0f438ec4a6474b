//! CSV output backend.
//!
//! [`CsvWriter::new`] creates two files in the output directory:
//! - `passes.csv`
//! - `summary.csv`
//!
//! [`CsvWriter::from_writer`] streams pass rows to any `io::Write` (the CLI
//! uses stdout) and drops the summary.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, PassRow, SummaryRow};

const PASS_HEADER: [&str; 6] = ["person", "direction", "arrival", "pass_tick", "wait", "rule"];
const SUMMARY_HEADER: [&str; 9] = [
    "people", "last_pass", "makespan", "total_wait", "max_wait", "mean_wait", "entered", "exited",
    "idle_jumps",
];

/// Writes the pass log as CSV.
pub struct CsvWriter<W: Write> {
    passes:   Writer<W>,
    summary:  Option<Writer<W>>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Open (or create) `passes.csv` and `summary.csv` in `dir` and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut passes = Writer::from_path(dir.join("passes.csv"))?;
        passes.write_record(PASS_HEADER)?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record(SUMMARY_HEADER)?;

        Ok(Self {
            passes,
            summary: Some(summary),
            finished: false,
        })
    }
}

impl<W: Write> CsvWriter<W> {
    /// Write pass rows (with header) to `inner`; summaries are discarded.
    pub fn from_writer(inner: W) -> OutputResult<Self> {
        let mut passes = Writer::from_writer(inner);
        passes.write_record(PASS_HEADER)?;
        Ok(Self { passes, summary: None, finished: false })
    }

    /// Flush and return the pass-row destination.
    pub fn into_inner(self) -> OutputResult<W> {
        self.passes
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_pass(&mut self, row: &PassRow) -> OutputResult<()> {
        self.passes.write_record(&[
            row.person.to_string(),
            row.direction.to_owned(),
            row.arrival.to_string(),
            row.pass_tick.to_string(),
            row.wait.to_string(),
            row.rule.to_owned(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        let Some(summary) = self.summary.as_mut() else {
            return Ok(());
        };
        summary.write_record(&[
            row.people.to_string(),
            row.last_pass.map(|t| t.to_string()).unwrap_or_default(),
            row.makespan.to_string(),
            row.total_wait.to_string(),
            row.max_wait.to_string(),
            format!("{:.3}", row.mean_wait),
            row.entered.to_string(),
            row.exited.to_string(),
            row.idle_jumps.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.passes.flush()?;
        if let Some(summary) = self.summary.as_mut() {
            summary.flush()?;
        }
        Ok(())
    }
}
