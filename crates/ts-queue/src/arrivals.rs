//! `ArrivalFeed` admits people into the waiting lanes as the clock passes
//! their arrival tick.
//!
//! # Cost
//!
//! The feed is a cursor into the people in arrival order.  Each tick it
//! admits everyone up to the clock and stops, so every person is touched
//! once per run.  The next pending arrival sits at the cursor, and an idle
//! jump reads it in O(1).

use ts_core::{Person, Tick};

use crate::WaitingQueue;

/// Cursor over people in arrival order.
#[derive(Clone, Debug)]
pub struct ArrivalFeed {
    /// Positions in arrival order, or `None` when the input is already
    /// sorted by arrival and position order can be used directly.
    order: Option<Vec<usize>>,
    len:   usize,
    next:  usize,
}

impl ArrivalFeed {
    /// Feed over input that is already non-decreasing by arrival.
    pub fn in_input_order(people: &[Person]) -> Self {
        Self { order: None, len: people.len(), next: 0 }
    }

    /// Feed over input in any order.  People are admitted by ascending
    /// arrival, ties by ascending `PersonId`.
    pub fn sorted_by_arrival(people: &[Person]) -> Self {
        let mut order: Vec<usize> = (0..people.len()).collect();
        order.sort_by_key(|&i| (people[i].arrival(), people[i].id()));
        Self { order: Some(order), len: people.len(), next: 0 }
    }

    /// Admit everyone whose arrival is at or before `now` into `queue`.
    ///
    /// `people` must be the slice the feed was built from.  Returns the
    /// number admitted.
    pub fn admit_until(&mut self, people: &[Person], now: Tick, queue: &mut WaitingQueue) -> usize {
        let start = self.next;
        while let Some(person) = self.peek(people) {
            if !person.has_arrived(now) {
                break;
            }
            queue.insert(person);
            self.next += 1;
        }
        self.next - start
    }

    /// Arrival tick of the next person not yet admitted.
    pub fn next_arrival(&self, people: &[Person]) -> Option<Tick> {
        self.peek(people).map(Person::arrival)
    }

    /// People not yet admitted.
    pub fn remaining(&self) -> usize {
        self.len - self.next
    }

    pub fn is_exhausted(&self) -> bool {
        self.next == self.len
    }

    fn peek<'p>(&self, people: &'p [Person]) -> Option<&'p Person> {
        if self.next >= self.len {
            return None;
        }
        let position = match &self.order {
            Some(order) => order[self.next],
            None        => self.next,
        };
        people.get(position)
    }
}
