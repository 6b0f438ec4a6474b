//! Who has passed, and when.
//!
//! `PassLedger` is the only place a person's processed state lives.  Its
//! mutating method is crate-private, so the simulator is the sole writer.

use ts_core::{Direction, Person, PersonId, Tick};
use ts_policy::PriorityRule;

use crate::{InvariantViolation, SimResult};

// ── PassRecord ────────────────────────────────────────────────────────────────

/// One passage through the turnstile.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PassRecord {
    pub person:    PersonId,
    pub direction: Direction,
    pub arrival:   Tick,
    pub pass_tick: Tick,
    /// Rule that chose this person.
    pub rule:      PriorityRule,
}

impl PassRecord {
    /// Ticks spent waiting at the turnstile.
    #[inline]
    pub fn wait(&self) -> u64 {
        self.pass_tick - self.arrival
    }
}

// ── PassLedger ────────────────────────────────────────────────────────────────

/// Per-person pass ticks, indexed by `PersonId`.
#[derive(Clone, Debug)]
pub struct PassLedger {
    pass_ticks: Vec<Option<Tick>>,
    processed:  usize,
}

impl PassLedger {
    pub fn new(person_count: usize) -> Self {
        Self {
            pass_ticks: vec![None; person_count],
            processed:  0,
        }
    }

    pub fn is_processed(&self, person: PersonId) -> bool {
        self.pass_tick(person).is_some()
    }

    pub fn pass_tick(&self, person: PersonId) -> Option<Tick> {
        self.pass_ticks.get(person.index()).copied().flatten()
    }

    pub fn processed_count(&self) -> usize {
        self.processed
    }

    /// Number of people tracked.
    pub fn len(&self) -> usize {
        self.pass_ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pass_ticks.is_empty()
    }

    /// People who have not passed yet.
    pub fn remaining(&self) -> usize {
        self.len() - self.processed
    }

    pub fn is_complete(&self) -> bool {
        self.processed == self.len()
    }

    /// Mark `person` as passed at `tick`.
    pub(crate) fn record(&mut self, person: &Person, tick: Tick) -> SimResult<()> {
        if tick < person.arrival() {
            return Err(InvariantViolation::PassBeforeArrival {
                person:  person.id(),
                arrival: person.arrival(),
                tick,
            }
            .into());
        }
        let slot = self
            .pass_ticks
            .get_mut(person.id().index())
            .ok_or(InvariantViolation::UnknownPerson(person.id()))?;
        if slot.is_some() {
            return Err(InvariantViolation::AlreadyProcessed(person.id()).into());
        }
        *slot = Some(tick);
        self.processed += 1;
        Ok(())
    }

    /// Collect the final pass ticks.  Fails if anyone is still unprocessed.
    pub fn pass_times(&self) -> SimResult<PassTimes> {
        self.pass_ticks
            .iter()
            .enumerate()
            .map(|(i, &t)| {
                t.ok_or_else(|| InvariantViolation::MissingPassTick(PersonId(i as u32)).into())
            })
            .collect::<SimResult<Vec<Tick>>>()
            .map(PassTimes)
    }
}

// ── PassTimes ─────────────────────────────────────────────────────────────────

/// The run's result: `pass_times[i]` is the pass tick of person `i`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct PassTimes(Vec<Tick>);

impl PassTimes {
    pub fn as_slice(&self) -> &[Tick] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Tick> {
        self.0
    }

    /// Raw tick values, in person order.
    pub fn to_u64s(&self) -> Vec<u64> {
        self.0.iter().map(|t| t.0).collect()
    }

    pub fn get(&self, person: PersonId) -> Option<Tick> {
        self.0.get(person.index()).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Aggregate statistics for `people` (the same slice that was simulated).
    pub fn summary(&self, people: &[Person], idle_jumps: u64) -> RunSummary {
        let mut summary = RunSummary {
            people: people.len(),
            idle_jumps,
            ..RunSummary::default()
        };

        for (person, &pass) in people.iter().zip(&self.0) {
            let wait = pass - person.arrival();
            summary.total_wait += wait;
            summary.max_wait = summary.max_wait.max(wait);
            summary.first_pass = Some(summary.first_pass.map_or(pass, |t| t.min(pass)));
            summary.last_pass = Some(summary.last_pass.map_or(pass, |t| t.max(pass)));
            match person.direction() {
                Direction::Enter => summary.entered += 1,
                Direction::Exit  => summary.exited += 1,
            }
        }
        summary
    }
}

impl std::fmt::Display for PassTimes {
    /// Space-separated raw ticks on one line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, t) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", t.0)?;
        }
        Ok(())
    }
}

// ── RunSummary ────────────────────────────────────────────────────────────────

/// Aggregate statistics for one finished run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RunSummary {
    pub people:     usize,
    pub first_pass: Option<Tick>,
    pub last_pass:  Option<Tick>,
    pub total_wait: u64,
    pub max_wait:   u64,
    pub entered:    usize,
    pub exited:     usize,
    pub idle_jumps: u64,
}

impl RunSummary {
    /// Ticks from the first passage to the last, inclusive.
    pub fn makespan(&self) -> u64 {
        match (self.first_pass, self.last_pass) {
            (Some(first), Some(last)) => last - first + 1,
            _ => 0,
        }
    }

    pub fn mean_wait(&self) -> f64 {
        if self.people == 0 {
            0.0
        } else {
            self.total_wait as f64 / self.people as f64
        }
    }
}
