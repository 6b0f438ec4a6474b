//! The three priority rules and their dispatch on the previous tick.

use std::fmt;

use ts_core::{Direction, LastDirection, PersonId};

use crate::{CandidateLane, PolicyError, PolicyResult};

/// One of the three selection strategies.
///
/// When both lanes have people, every rule takes the exit head.  The rules
/// stay distinct so a pass record says which situation applied.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PriorityRule {
    /// The turnstile was unused last tick: exits go first.
    IdlePreferExit,
    /// Someone exited last tick: keep the exit flow going.
    PreviousExitPreferExit,
    /// Someone entered last tick: let a waiting exit through before the
    /// next entry.
    PreviousEnterPreferExit,
}

impl PriorityRule {
    /// The rule that applies after a tick in state `last`.
    pub const fn for_state(last: LastDirection) -> PriorityRule {
        match last {
            LastDirection::Idle  => PriorityRule::IdlePreferExit,
            LastDirection::Exit  => PriorityRule::PreviousExitPreferExit,
            LastDirection::Enter => PriorityRule::PreviousEnterPreferExit,
        }
    }

    /// Label used in logs and CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            PriorityRule::IdlePreferExit          => "idle_prefer_exit",
            PriorityRule::PreviousExitPreferExit  => "previous_exit_prefer_exit",
            PriorityRule::PreviousEnterPreferExit => "previous_enter_prefer_exit",
        }
    }

    /// Pick the next person: the exit head if anyone is exiting, otherwise
    /// the enter head.
    pub fn select<E, X>(self, entering: &E, exiting: &X) -> PolicyResult<Selection>
    where
        E: CandidateLane + ?Sized,
        X: CandidateLane + ?Sized,
    {
        let (person, direction) = match (exiting.head(), entering.head()) {
            (Some(p), _)    => (p, Direction::Exit),
            (None, Some(p)) => (p, Direction::Enter),
            (None, None)    => return Err(PolicyError::NoCandidates(self)),
        };

        Ok(Selection { person, direction, rule: self })
    }
}

impl fmt::Display for PriorityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of one rule evaluation.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Selection {
    pub person:    PersonId,
    /// Lane the person was taken from.
    pub direction: Direction,
    /// Rule that made the choice.
    pub rule:      PriorityRule,
}

/// Dispatch on `last` and select from the two lanes.
pub fn select_next<E, X>(last: LastDirection, entering: &E, exiting: &X) -> PolicyResult<Selection>
where
    E: CandidateLane + ?Sized,
    X: CandidateLane + ?Sized,
{
    PriorityRule::for_state(last).select(entering, exiting)
}
