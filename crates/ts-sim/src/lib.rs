//! `ts-sim` — the turnstile tick loop.
//!
//! # Tick loop
//!
//! ```text
//! while someone has not passed:
//!   ① Candidates: admit arrivals up to the clock into the two lanes
//!                 (or rescan everyone, with CandidateScan::Rescan).
//!   ② Idle gap:   both lanes empty: jump the clock to the next arrival,
//!                 previous-tick state becomes Idle.
//!   ③ Select:     PriorityRule::for_state(previous tick) picks a lane head.
//!   ④ Pass:       record pass tick = clock, drop the person from their
//!                 lane, previous-tick state = their direction, clock += 1.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `simulate_batch` runs scenarios on Rayon's pool.       |
//! | `fx-hash`  | FxHash set for the duplicate-index check.              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ts_core::Person;
//! use ts_sim::{NoopObserver, SimBuilder, simulate};
//!
//! let people = vec![Person::enter(0, 0), Person::exit(1, 0)];
//! assert_eq!(simulate(&people)?, vec![Tick(1), Tick(0)]);
//!
//! let mut sim = SimBuilder::new(people).build()?;
//! let times = sim.run(&mut NoopObserver)?;
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod ledger;
pub mod observer;
pub mod sim;


pub use batch::{simulate, simulate_batch, simulate_columns, simulate_with};
pub use builder::SimBuilder;
pub use error::{InvariantViolation, SimError, SimResult};
pub use ledger::{PassLedger, PassRecord, PassTimes, RunSummary};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{StepOutcome, TurnstileSim};
