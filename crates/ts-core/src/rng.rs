//! Deterministic scenario generation.
//!
//! The simulation itself never draws random numbers.  `ScenarioRng` exists
//! to produce valid, reproducible inputs for load tests, cross-checks between
//! candidate strategies, and the CLI's `generate` command.  The same seed and
//! `ScenarioSpec` always produce the same people.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{CoreError, CoreResult, Direction, Person, PersonId, Tick};

/// Shape of a generated scenario.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioSpec {
    /// Number of people.
    pub count:      usize,
    /// Largest gap between consecutive arrivals, in ticks.  Zero puts
    /// everyone at tick 0.
    pub max_gap:    u64,
    /// Probability that a person exits rather than enters, in [0, 1].
    pub exit_ratio: f64,
}

impl Default for ScenarioSpec {
    fn default() -> Self {
        Self { count: 16, max_gap: 3, exit_ratio: 0.5 }
    }
}

/// Seeded generator for turnstile scenarios.
pub struct ScenarioRng(SmallRng);

impl ScenarioRng {
    pub fn new(seed: u64) -> Self {
        ScenarioRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Generate a valid input: ids match positions and arrivals are
    /// non-decreasing.
    pub fn people(&mut self, spec: &ScenarioSpec) -> CoreResult<Vec<Person>> {
        if !(0.0..=1.0).contains(&spec.exit_ratio) {
            return Err(CoreError::Scenario(format!(
                "exit ratio {} is outside [0, 1]",
                spec.exit_ratio
            )));
        }

        let mut arrival = 0u64;
        (0..spec.count)
            .map(|i| {
                let id = PersonId::try_from(i).map_err(|_| CoreError::TooManyPeople(spec.count))?;
                if i > 0 && spec.max_gap > 0 {
                    let gap = self.gen_range(0..=spec.max_gap);
                    arrival = arrival.checked_add(gap).ok_or_else(|| {
                        CoreError::Scenario(format!(
                            "arrival of person {i} overflows the tick range (max gap {})",
                            spec.max_gap
                        ))
                    })?;
                }
                let direction = if self.gen_bool(spec.exit_ratio) {
                    Direction::Exit
                } else {
                    Direction::Enter
                };
                Ok(Person::new(id, Tick(arrival), direction))
            })
            .collect()
    }
}
