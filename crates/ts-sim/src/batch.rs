//! One-call entry points.

use ts_core::{Person, SimConfig, Tick, people_from_columns};

use crate::{NoopObserver, SimBuilder, SimResult};

/// Simulate `people` with the default configuration and return each
/// person's pass tick, indexed by position.
pub fn simulate(people: &[Person]) -> SimResult<Vec<Tick>> {
    simulate_with(people, &SimConfig::default())
}

/// Like [`simulate`] with an explicit configuration.
pub fn simulate_with(people: &[Person], config: &SimConfig) -> SimResult<Vec<Tick>> {
    let mut sim = SimBuilder::new(people.to_vec())
        .config(config.clone())
        .build()?;
    Ok(sim.run(&mut NoopObserver)?.into_vec())
}

/// Simulate from the two raw input columns (`0` = enter, `1` = exit).
pub fn simulate_columns(arrivals: &[u64], directions: &[u8]) -> SimResult<Vec<u64>> {
    let people = people_from_columns(arrivals, directions)?;
    Ok(simulate(&people)?.into_iter().map(|t| t.0).collect())
}

/// Simulate independent scenarios, one result per scenario in input order.
///
/// With the `parallel` Cargo feature the scenarios run on Rayon's thread
/// pool; each run is still single-threaded.
pub fn simulate_batch(scenarios: &[Vec<Person>], config: &SimConfig) -> Vec<SimResult<Vec<Tick>>> {
    #[cfg(not(feature = "parallel"))]
    {
        scenarios
            .iter()
            .map(|people| simulate_with(people, config))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        scenarios
            .par_iter()
            .map(|people| simulate_with(people, config))
            .collect()
    }
}
