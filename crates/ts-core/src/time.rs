//! Turnstile time.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter; one tick is one second
//! of turnstile time and admits exactly one passage.  Arrival times and pass
//! times share the same unit, so all comparisons are exact integer ones.
//!
//! The clock moves in two ways only: `advance()` by one tick after a passage,
//! and `jump_to()` across an idle gap to the next arrival.  It never moves
//! backwards.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// A point in turnstile time.
///
/// Stored as `u64`: arrival times of 10^9 plus N passages stay far below the
/// overflow point.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, ticks: u64) -> Tick {
        Tick(self.0 + ticks)
    }
}

/// Distance between two ticks.  Panics in debug builds if `earlier` is later.
impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulator's virtual clock.
///
/// Tracks the current tick plus how often it had to skip an idle gap, which
/// feeds the run summary.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Tick the clock was created at.
    pub start_tick:   Tick,
    /// The current tick.
    pub current_tick: Tick,
    /// Number of `jump_to` calls so far.
    pub idle_jumps:   u64,
}

impl SimClock {
    /// Create a clock positioned at `start_tick`.
    pub fn new(start_tick: Tick) -> Self {
        Self {
            start_tick,
            current_tick: start_tick,
            idle_jumps:   0,
        }
    }

    /// One passage done; move to the next tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }

    /// Skip forward to `tick` across an idle gap.
    ///
    /// A target at or before the current tick leaves the clock unchanged and
    /// returns `false`.
    pub fn jump_to(&mut self, tick: Tick) -> bool {
        if tick <= self.current_tick {
            return false;
        }
        self.current_tick = tick;
        self.idle_jumps += 1;
        true
    }

    /// Ticks elapsed since the clock was created.
    #[inline]
    pub fn elapsed(&self) -> u64 {
        self.current_tick - self.start_tick
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{} ticks, {} idle jumps)", self.current_tick, self.elapsed(), self.idle_jumps)
    }
}
