//! `ts-queue` — who is waiting at the turnstile, and where people come from.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`waiting`] | `WaitingQueue` (two `BTreeSet<PersonId>` lanes)              |
//! | [`arrivals`]| `ArrivalFeed`, admits people into the lanes as time passes   |
//! | [`loader`]  | `load_people_csv`, `load_people_reader`, `read_people_text`  |
//! | [`error`]   | `QueueError`, `QueueResult<T>`                               |
//!
//! # Candidate model (summary)
//!
//! At tick `t` the candidates are the unprocessed people with
//! `arrival <= t`, split by direction and ordered by `PersonId`:
//!
//! ```text
//! entering lane = { id | arrival(id) <= t, Enter, not passed }   (BTreeSet)
//! exiting lane  = { id | arrival(id) <= t, Exit,  not passed }   (BTreeSet)
//! head(lane)    = smallest PersonId in the lane
//! ```
//!
//! The `ArrivalFeed` walks people in arrival order so each person is admitted
//! exactly once; the simulator removes them again when they pass.

pub mod arrivals;
pub mod error;
pub mod loader;
pub mod waiting;

#[cfg(test)]
mod tests;

pub use arrivals::ArrivalFeed;
pub use error::{QueueError, QueueResult};
pub use loader::{load_people_csv, load_people_reader, read_people_text};
pub use waiting::WaitingQueue;
