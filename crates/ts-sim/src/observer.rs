//! Simulation observer trait for progress reporting and data collection.

use ts_core::Tick;

use crate::{PassRecord, RunSummary};

/// Callbacks invoked by [`TurnstileSim::run`][crate::TurnstileSim::run] as
/// the tick loop progresses.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: pass printer
///
/// ```rust,ignore
/// struct PassPrinter;
///
/// impl SimObserver for PassPrinter {
///     fn on_pass(&mut self, record: &PassRecord) {
///         println!("{} {} at {}", record.person, record.direction, record.pass_tick);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after each passage.
    fn on_pass(&mut self, _record: &PassRecord) {}

    /// Called when nobody was waiting at `from` and the clock skipped ahead
    /// to the next arrival at `to`.
    fn on_idle_jump(&mut self, _from: Tick, _to: Tick) {}

    /// Called once after the last person passes.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Collects every pass record in order.  Handy in tests.
impl SimObserver for Vec<PassRecord> {
    fn on_pass(&mut self, record: &PassRecord) {
        self.push(*record);
    }
}
