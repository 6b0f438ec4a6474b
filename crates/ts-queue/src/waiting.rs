//! `WaitingQueue`, the two index-ordered candidate lanes.
//!
//! `BTreeSet<PersonId>` keeps each lane sorted by input position, so the
//! lane head is the same-direction tie-break winner.  Insert, remove, and
//! head lookup are all O(log W) where W = people currently waiting.

use std::collections::BTreeSet;

use ts_core::{Direction, Person, PersonId, Tick};

/// People who have arrived and not yet passed, one lane per direction.
#[derive(Default, Clone, Debug)]
pub struct WaitingQueue {
    entering: BTreeSet<PersonId>,
    exiting:  BTreeSet<PersonId>,
}

impl WaitingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `person` in their direction's lane.
    ///
    /// Returns `false` if they were already waiting.
    pub fn insert(&mut self, person: &Person) -> bool {
        self.lane_mut(person.direction()).insert(person.id())
    }

    /// Admit every person in `people` who has arrived by `now` and is not
    /// yet processed.
    ///
    /// Idempotent: people already waiting, or reported processed by
    /// `is_processed`, are left alone.  Returns the number newly admitted.
    pub fn admit<F>(&mut self, people: &[Person], now: Tick, is_processed: F) -> usize
    where
        F: Fn(PersonId) -> bool,
    {
        people
            .iter()
            .filter(|p| p.has_arrived(now) && !is_processed(p.id()))
            .filter(|p| self.insert(p))
            .count()
    }

    /// Remove `person` from whichever lane holds them.
    ///
    /// Returns `false` if they were not waiting.
    pub fn remove(&mut self, person: &Person) -> bool {
        self.lane_mut(person.direction()).remove(&person.id())
    }

    /// Read-only view of one lane, ascending by `PersonId`.
    pub fn lane(&self, direction: Direction) -> &BTreeSet<PersonId> {
        match direction {
            Direction::Enter => &self.entering,
            Direction::Exit  => &self.exiting,
        }
    }

    pub fn entering(&self) -> &BTreeSet<PersonId> {
        &self.entering
    }

    pub fn exiting(&self) -> &BTreeSet<PersonId> {
        &self.exiting
    }

    /// Lowest-index person waiting in `direction`, if any.
    pub fn head(&self, direction: Direction) -> Option<PersonId> {
        self.lane(direction).first().copied()
    }

    pub fn entering_count(&self) -> usize {
        self.entering.len()
    }

    pub fn exiting_count(&self) -> usize {
        self.exiting.len()
    }

    /// Total people waiting across both lanes.
    pub fn len(&self) -> usize {
        self.entering.len() + self.exiting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entering.is_empty() && self.exiting.is_empty()
    }

    pub fn has_waiting(&self) -> bool {
        !self.is_empty()
    }

    fn lane_mut(&mut self, direction: Direction) -> &mut BTreeSet<PersonId> {
        match direction {
            Direction::Enter => &mut self.entering,
            Direction::Exit  => &mut self.exiting,
        }
    }
}
