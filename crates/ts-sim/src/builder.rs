//! Fluent builder for constructing a [`TurnstileSim`].

use ts_core::{Person, SimConfig, Tick};

use crate::{SimError, SimResult, TurnstileSim};

#[cfg(not(feature = "fx-hash"))]
type IdSet = std::collections::HashSet<ts_core::PersonId>;
#[cfg(feature = "fx-hash")]
type IdSet = rustc_hash::FxHashSet<ts_core::PersonId>;

/// Fluent builder for [`TurnstileSim`].
///
/// # Validation
///
/// [`build`][Self::build] rejects, in this order:
///
/// | Check                                   | Error                          |
/// |-----------------------------------------|--------------------------------|
/// | no people                               | `SimError::EmptyInput`         |
/// | two people share an index               | `SimError::DuplicateIndex`     |
/// | arrivals decrease along the input       | `SimError::UnsortedArrivals`   |
/// | index differs from position             | `SimError::IndexMismatch`      |
/// | latest arrival + people overflows `u64` | `SimError::TickOverflow`       |
///
/// The arrival-order check is skipped when
/// `config.require_sorted_arrivals` is `false`.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(people)
///     .config(SimConfig { candidate_scan: CandidateScan::Rescan, ..Default::default() })
///     .build()?;
/// let times = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    people: Vec<Person>,
    config: Option<SimConfig>,
}

impl SimBuilder {
    /// Create a builder for `people`, which must be ordered so that
    /// position equals index.
    pub fn new(people: Vec<Person>) -> Self {
        Self { people, config: None }
    }

    /// Supply a configuration.  If not called, `SimConfig::default()`.
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Validate the people and return a ready-to-run [`TurnstileSim`].
    pub fn build(self) -> SimResult<TurnstileSim> {
        let config = self.config.unwrap_or_default();
        validate(&self.people, &config)?;
        Ok(TurnstileSim::from_parts(config, self.people))
    }
}

/// Check the input shape before any tick runs.
pub(crate) fn validate(people: &[Person], config: &SimConfig) -> SimResult<()> {
    if people.is_empty() {
        return Err(SimError::EmptyInput);
    }

    let mut seen = IdSet::default();
    for person in people {
        if !seen.insert(person.id()) {
            return Err(SimError::DuplicateIndex(person.id()));
        }
    }

    if config.require_sorted_arrivals {
        for (position, pair) in people.windows(2).enumerate() {
            if pair[1].arrival() < pair[0].arrival() {
                return Err(SimError::UnsortedArrivals {
                    position: position + 1,
                    previous: pair[0].arrival(),
                    arrival:  pair[1].arrival(),
                });
            }
        }
    }

    for (position, person) in people.iter().enumerate() {
        if person.id().index() != position {
            return Err(SimError::IndexMismatch { position, found: person.id() });
        }
    }

    // The clock never passes the latest start point plus one tick per person.
    let latest = people
        .iter()
        .map(Person::arrival)
        .fold(config.start_tick, Tick::max);
    if latest.0.checked_add(people.len() as u64).is_none() {
        return Err(SimError::TickOverflow { latest, people: people.len() });
    }

    Ok(())
}
