//! Plain data row types written by output backends.

use serde::Serialize;

use ts_sim::{PassRecord, RunSummary};

/// One passage through the turnstile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PassRow {
    pub person:    u32,
    /// `"enter"` or `"exit"`.
    pub direction: &'static str,
    pub arrival:   u64,
    pub pass_tick: u64,
    pub wait:      u64,
    /// Priority rule that selected the person.
    pub rule:      &'static str,
}

impl From<&PassRecord> for PassRow {
    fn from(r: &PassRecord) -> Self {
        PassRow {
            person:    r.person.0,
            direction: r.direction.as_str(),
            arrival:   r.arrival.0,
            pass_tick: r.pass_tick.0,
            wait:      r.wait(),
            rule:      r.rule.as_str(),
        }
    }
}

/// Aggregate figures for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryRow {
    pub people:     u64,
    /// Last pass tick; `None` only for an empty run.
    pub last_pass:  Option<u64>,
    pub makespan:   u64,
    pub total_wait: u64,
    pub max_wait:   u64,
    pub mean_wait:  f64,
    pub entered:    u64,
    pub exited:     u64,
    pub idle_jumps: u64,
}

impl From<&RunSummary> for SummaryRow {
    fn from(s: &RunSummary) -> Self {
        SummaryRow {
            people:     s.people as u64,
            last_pass:  s.last_pass.map(|t| t.0),
            makespan:   s.makespan(),
            total_wait: s.total_wait,
            max_wait:   s.max_wait,
            mean_wait:  s.mean_wait(),
            entered:    s.entered as u64,
            exited:     s.exited as u64,
            idle_jumps: s.idle_jumps,
        }
    }
}
