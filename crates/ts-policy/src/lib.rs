//! `ts-policy` — which waiting person passes next.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|---------------------------------------------------------------|
//! | [`lane`]  | `CandidateLane` trait: read-only, index-ordered lane view     |
//! | [`rule`]  | `PriorityRule` enum, `Selection`, `select_next`               |
//! | [`error`] | `PolicyError`, `PolicyResult<T>`                              |
//!
//! # Rule table
//!
//! | Previous tick | Rule                      | Both lanes waiting | One lane waiting |
//! |---------------|---------------------------|--------------------|------------------|
//! | idle          | `IdlePreferExit`          | exit head          | that lane's head |
//! | exit          | `PreviousExitPreferExit`  | exit head          | that lane's head |
//! | enter         | `PreviousEnterPreferExit` | exit head          | that lane's head |
//!
//! Within a lane the head is always the lowest `PersonId`.  Selecting from
//! two empty lanes is a caller bug and returns [`PolicyError::NoCandidates`].
//!
//! Selection is pure: it reads lane heads and returns a `PersonId`.  Marking
//! the person as passed is the simulator's job.

pub mod error;
pub mod lane;
pub mod rule;

#[cfg(test)]
mod tests;

pub use error::{PolicyError, PolicyResult};
pub use lane::CandidateLane;
pub use rule::{PriorityRule, Selection, select_next};
