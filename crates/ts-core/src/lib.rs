//! `ts-core` — foundational types for the turnstile simulator.
//!
//! This crate is a dependency of every other `ts-*` crate.  It has no `ts-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `PersonId`                                              |
//! | [`time`]      | `Tick`, `SimClock`                                      |
//! | [`direction`] | `Direction`, `LastDirection`                            |
//! | [`person`]    | `Person`, `people_from_columns`                         |
//! | [`config`]    | `SimConfig`, `CandidateScan`                            |
//! | [`rng`]       | `ScenarioRng`, `ScenarioSpec`                           |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod person;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CandidateScan, SimConfig};
pub use direction::{Direction, LastDirection};
pub use error::{CoreError, CoreResult};
pub use ids::PersonId;
pub use person::{Person, people_from_columns};
pub use rng::{ScenarioRng, ScenarioSpec};
pub use time::{SimClock, Tick};
