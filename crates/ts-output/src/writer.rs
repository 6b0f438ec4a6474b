//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, PassRow, SummaryRow};

/// Sink for pass rows and the run summary.
///
/// Errors are stored by the observer and retrieved with
/// [`PassLogObserver::take_error`][crate::PassLogObserver::take_error].
pub trait OutputWriter {
    /// Write one passage.
    fn write_pass(&mut self, row: &PassRow) -> OutputResult<()>;

    /// Write the run summary.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
