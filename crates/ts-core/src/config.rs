//! Simulation configuration.

use crate::Tick;

/// How the simulator finds the people waiting at each tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CandidateScan {
    /// Admit arrivals incrementally into two index-ordered lanes.
    /// O(N log N) over a whole run.
    #[default]
    Indexed,
    /// Rebuild both lanes with a full scan every tick.  O(N²); useful as a
    /// reference when checking the indexed path.
    Rescan,
}

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the CLI and passed to the simulation
/// builder.  `Default` matches the plain `simulate()` behaviour.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Candidate maintenance strategy.  Default: `Indexed`.
    pub candidate_scan: CandidateScan,

    /// Reject input whose arrival times decrease along the sequence.
    /// When `false`, arrivals are fed in (arrival, index) order instead.
    /// Default: `true`.
    pub require_sorted_arrivals: bool,

    /// Tick the clock starts at.  People arriving earlier wait until then.
    /// Default: `Tick(0)`.
    pub start_tick: Tick,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            candidate_scan:          CandidateScan::Indexed,
            require_sorted_arrivals: true,
            start_tick:              Tick::ZERO,
        }
    }
}
