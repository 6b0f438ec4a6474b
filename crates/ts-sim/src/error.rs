use thiserror::Error;

use ts_core::{CoreError, PersonId, Tick};
use ts_policy::PolicyError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("no people to simulate")]
    EmptyInput,

    #[error("duplicate person index {0}")]
    DuplicateIndex(PersonId),

    #[error("person at position {position} has index {found}, expected {position}")]
    IndexMismatch {
        position: usize,
        found:    PersonId,
    },

    #[error("arrivals must be non-decreasing: position {position} arrives at {arrival} after {previous}")]
    UnsortedArrivals {
        position: usize,
        previous: Tick,
        arrival:  Tick,
    },

    #[error("{people} people arriving as late as {latest} would run the clock past the tick range")]
    TickOverflow {
        latest: Tick,
        people: usize,
    },

    #[error(transparent)]
    Input(#[from] CoreError),

    #[error("policy error: {0}")]
    Policy(#[from] PolicyError),

    #[error("simulation invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

impl SimError {
    /// `true` for problems with the supplied people, reported before any
    /// tick runs.  `false` for bookkeeping bugs inside the simulator.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SimError::EmptyInput
                | SimError::DuplicateIndex(_)
                | SimError::IndexMismatch { .. }
                | SimError::UnsortedArrivals { .. }
                | SimError::TickOverflow { .. }
                | SimError::Input(_)
        )
    }
}

/// Simulator bookkeeping that went wrong.  None of these can be triggered by
/// input that passed validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("{person} would pass at {tick}, before arriving at {arrival}")]
    PassBeforeArrival {
        person:  PersonId,
        arrival: Tick,
        tick:    Tick,
    },

    #[error("{0} was already processed")]
    AlreadyProcessed(PersonId),

    #[error("{0} was selected but is not waiting")]
    NotWaiting(PersonId),

    #[error("{0} is not part of this run")]
    UnknownPerson(PersonId),

    #[error("{person} was selected from the {lane} lane")]
    WrongLane {
        person: PersonId,
        lane:   ts_core::Direction,
    },

    #[error("{remaining} people left at {tick} but no arrivals pending")]
    NoPendingArrivals {
        remaining: usize,
        tick:      Tick,
    },

    #[error("{0} has no pass tick after the run finished")]
    MissingPassTick(PersonId),
}

pub type SimResult<T> = Result<T, SimError>;
