//! The `Person` record.
//!
//! A `Person` is immutable identity only: index, arrival tick, direction.
//! Whether and when a person passed is tracked by the simulator's ledger, so
//! nothing outside the simulator can flip a person to "processed".

use crate::{CoreError, CoreResult, Direction, PersonId, Tick};

/// One person waiting to pass through the turnstile.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    id:        PersonId,
    arrival:   Tick,
    direction: Direction,
}

impl Person {
    pub fn new(id: PersonId, arrival: Tick, direction: Direction) -> Self {
        Self { id, arrival, direction }
    }

    /// Shorthand for an entering person, mostly for tests and generators.
    pub fn enter(index: u32, arrival: u64) -> Self {
        Self::new(PersonId(index), Tick(arrival), Direction::Enter)
    }

    /// Shorthand for an exiting person.
    pub fn exit(index: u32, arrival: u64) -> Self {
        Self::new(PersonId(index), Tick(arrival), Direction::Exit)
    }

    #[inline]
    pub fn id(&self) -> PersonId {
        self.id
    }

    /// Earliest tick at which this person may be selected.
    #[inline]
    pub fn arrival(&self) -> Tick {
        self.arrival
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn is_entering(&self) -> bool {
        self.direction == Direction::Enter
    }

    #[inline]
    pub fn is_exiting(&self) -> bool {
        self.direction == Direction::Exit
    }

    /// `true` once the clock has reached this person's arrival tick.
    #[inline]
    pub fn has_arrived(&self, now: Tick) -> bool {
        self.arrival <= now
    }
}

/// Build a person list from the two parallel input columns.
///
/// Person `i` gets `PersonId(i)`, `arrivals[i]`, and the direction decoded
/// from `directions[i]`.
pub fn people_from_columns(arrivals: &[u64], directions: &[u8]) -> CoreResult<Vec<Person>> {
    if directions.len() != arrivals.len() {
        return Err(CoreError::LengthMismatch {
            expected: arrivals.len(),
            got:      directions.len(),
            what:     "direction column",
        });
    }

    arrivals
        .iter()
        .zip(directions)
        .enumerate()
        .map(|(i, (&arrival, &code))| {
            let id = PersonId::try_from(i).map_err(|_| CoreError::TooManyPeople(arrivals.len()))?;
            Ok(Person::new(id, Tick(arrival), Direction::from_code(code)?))
        })
        .collect()
}
