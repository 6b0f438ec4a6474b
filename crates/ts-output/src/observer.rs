//! `PassLogObserver<W>`: feeds `SimObserver` events to an `OutputWriter`.

use ts_sim::{PassRecord, RunSummary, SimObserver};

use crate::row::{PassRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every passage and the final summary to an
/// [`OutputWriter`].
///
/// Observer hooks cannot fail, so the first writer error is parked here and
/// the run carries on.  Collect it with [`take_error`][Self::take_error] once
/// `sim.run()` is done.
pub struct PassLogObserver<W: OutputWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> PassLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// The parked write error, or `None` if every write succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Pass rows handed to the writer so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Hand back the writer, e.g. to read what it buffered.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn keep_first(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            self.last_error.get_or_insert(e);
        }
    }
}

impl<W: OutputWriter> SimObserver for PassLogObserver<W> {
    fn on_pass(&mut self, record: &PassRecord) {
        let written = self.writer.write_pass(&PassRow::from(record));
        if written.is_ok() {
            self.rows += 1;
        }
        self.keep_first(written);
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        let summary = self.writer.write_summary(&SummaryRow::from(summary));
        self.keep_first(summary);
        let flushed = self.writer.finish();
        self.keep_first(flushed);
    }
}
