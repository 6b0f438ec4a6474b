//! The `TurnstileSim` struct and its tick loop.

use ts_core::{CandidateScan, LastDirection, Person, PersonId, SimClock, SimConfig, Tick};
use ts_policy::{Selection, select_next};
use ts_queue::{ArrivalFeed, WaitingQueue};

use crate::{InvariantViolation, PassLedger, PassRecord, PassTimes, SimObserver, SimResult};

// ── Candidate maintenance ─────────────────────────────────────────────────────

/// How the waiting lanes are produced each tick.
#[derive(Clone, Debug)]
pub(crate) enum Candidates {
    /// Lanes kept up to date incrementally: arrivals are admitted from the
    /// feed, passers are removed after selection.
    Indexed {
        feed:  ArrivalFeed,
        queue: WaitingQueue,
    },
    /// Lanes rebuilt from scratch every tick.
    Rescan,
}

impl Candidates {
    pub(crate) fn new(config: &SimConfig, people: &[Person]) -> Self {
        match config.candidate_scan {
            CandidateScan::Indexed => {
                let feed = if config.require_sorted_arrivals {
                    ArrivalFeed::in_input_order(people)
                } else {
                    ArrivalFeed::sorted_by_arrival(people)
                };
                Candidates::Indexed { feed, queue: WaitingQueue::new() }
            }
            CandidateScan::Rescan => Candidates::Rescan,
        }
    }
}

// ── StepOutcome ───────────────────────────────────────────────────────────────

/// What one call to [`TurnstileSim::step`] did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// One person passed and the clock advanced by one tick.
    Passed(PassRecord),
    /// No one was waiting; the clock jumped to the next arrival and the
    /// turnstile is idle.
    IdleJump { from: Tick, to: Tick },
    /// Everyone has passed.  Further calls keep returning this.
    Finished,
}

// ── TurnstileSim ──────────────────────────────────────────────────────────────

/// The turnstile simulation runner.
///
/// Holds the people, the clock, the previous-tick state, and the pass
/// ledger for one run.  Each [`step`][Self::step] either lets exactly one
/// person through or skips an idle gap, so a run takes at most
/// `2 * people` steps.
///
/// Create via [`SimBuilder`][crate::SimBuilder], which validates the input.
pub struct TurnstileSim {
    /// Configuration the run was built with.
    pub config: SimConfig,

    /// Simulation clock.
    pub clock: SimClock,

    /// What the turnstile did in the previous tick.
    pub last: LastDirection,

    people:     Vec<Person>,
    candidates: Candidates,
    ledger:     PassLedger,
}

impl TurnstileSim {
    pub(crate) fn from_parts(config: SimConfig, people: Vec<Person>) -> Self {
        let candidates = Candidates::new(&config, &people);
        Self {
            clock: SimClock::new(config.start_tick),
            config,
            last: LastDirection::Idle,
            ledger: PassLedger::new(people.len()),
            people,
            candidates,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run to completion and return the pass tick of every person.
    ///
    /// Calls observer hooks for each passage and idle gap.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<PassTimes> {
        tracing::info!(
            people = self.people.len(),
            scan = ?self.config.candidate_scan,
            start = %self.clock.current_tick,
            "turnstile run starting"
        );

        loop {
            match self.step()? {
                StepOutcome::Passed(record)       => observer.on_pass(&record),
                StepOutcome::IdleJump { from, to } => observer.on_idle_jump(from, to),
                StepOutcome::Finished              => break,
            }
        }

        let times = self.ledger.pass_times()?;
        let summary = times.summary(&self.people, self.clock.idle_jumps);
        observer.on_sim_end(&summary);

        tracing::info!(
            people = summary.people,
            final_tick = %self.clock.current_tick,
            idle_jumps = summary.idle_jumps,
            max_wait = summary.max_wait,
            "turnstile run finished"
        );
        Ok(times)
    }

    /// Advance the simulation by one iteration of the tick loop.
    pub fn step(&mut self) -> SimResult<StepOutcome> {
        if self.ledger.is_complete() {
            return Ok(StepOutcome::Finished);
        }

        let now = self.clock.current_tick;
        match self.select(now)? {
            Some(selection) => self.pass(selection, now).map(StepOutcome::Passed),
            None            => self.skip_idle_gap(now),
        }
    }

    /// The people being simulated, indexed by `PersonId`.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Read-only view of who has passed so far.
    pub fn ledger(&self) -> &PassLedger {
        &self.ledger
    }

    pub fn is_finished(&self) -> bool {
        self.ledger.is_complete()
    }

    /// Everyone who has arrived by the current tick and not yet passed, as
    /// (entering, exiting) lanes in index order.
    pub fn waiting(&self) -> (Vec<PersonId>, Vec<PersonId>) {
        self.rescan_lanes(self.clock.current_tick)
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    /// Refresh the lanes for `now` and ask the priority rule for a person.
    ///
    /// Returns `None` when nobody is waiting.
    fn select(&mut self, now: Tick) -> SimResult<Option<Selection>> {
        if let Candidates::Indexed { feed, queue } = &mut self.candidates {
            feed.admit_until(&self.people, now, queue);
            if queue.is_empty() {
                return Ok(None);
            }
            return Ok(Some(select_next(self.last, queue.entering(), queue.exiting())?));
        }

        let (entering, exiting) = self.rescan_lanes(now);
        if entering.is_empty() && exiting.is_empty() {
            return Ok(None);
        }
        Ok(Some(select_next(self.last, &entering, &exiting)?))
    }

    /// Record the selected person as passing at `now` and move the clock on.
    fn pass(&mut self, selection: Selection, now: Tick) -> SimResult<PassRecord> {
        let person = *self
            .people
            .get(selection.person.index())
            .ok_or(InvariantViolation::UnknownPerson(selection.person))?;

        if person.direction() != selection.direction {
            return Err(InvariantViolation::WrongLane {
                person: person.id(),
                lane:   selection.direction,
            }
            .into());
        }

        self.ledger.record(&person, now)?;
        if let Candidates::Indexed { queue, .. } = &mut self.candidates {
            if !queue.remove(&person) {
                return Err(InvariantViolation::NotWaiting(person.id()).into());
            }
        }

        self.last = person.direction().into();
        self.clock.advance();

        let record = PassRecord {
            person:    person.id(),
            direction: person.direction(),
            arrival:   person.arrival(),
            pass_tick: now,
            rule:      selection.rule,
        };
        tracing::trace!(
            person = record.person.0,
            direction = %record.direction,
            tick = now.0,
            rule = %record.rule,
            "pass"
        );
        Ok(record)
    }

    /// Nobody is waiting at `now`: jump to the next arrival and go idle.
    fn skip_idle_gap(&mut self, now: Tick) -> SimResult<StepOutcome> {
        let next = self.next_arrival().ok_or(InvariantViolation::NoPendingArrivals {
            remaining: self.ledger.remaining(),
            tick:      now,
        })?;

        // A pending arrival at or before `now` would already be waiting.
        if !self.clock.jump_to(next) {
            return Err(InvariantViolation::NoPendingArrivals {
                remaining: self.ledger.remaining(),
                tick:      now,
            }
            .into());
        }
        self.last = LastDirection::Idle;

        tracing::debug!(from = now.0, to = next.0, "turnstile idle, skipping ahead");
        Ok(StepOutcome::IdleJump { from: now, to: next })
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Earliest arrival among people not yet passed or waiting.
    fn next_arrival(&self) -> Option<Tick> {
        match &self.candidates {
            Candidates::Indexed { feed, .. } => feed.next_arrival(&self.people),
            Candidates::Rescan => self
                .people
                .iter()
                .filter(|p| !self.ledger.is_processed(p.id()))
                .map(Person::arrival)
                .min(),
        }
    }

    /// Full scan for arrived, unprocessed people.  Positions equal ids after
    /// validation, so both lanes come out in ascending index order.
    fn rescan_lanes(&self, now: Tick) -> (Vec<PersonId>, Vec<PersonId>) {
        let mut entering = Vec::new();
        let mut exiting = Vec::new();
        for person in &self.people {
            if person.has_arrived(now) && !self.ledger.is_processed(person.id()) {
                if person.is_entering() {
                    entering.push(person.id());
                } else {
                    exiting.push(person.id());
                }
            }
        }
        (entering, exiting)
    }
}
