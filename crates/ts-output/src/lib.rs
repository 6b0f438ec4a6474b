//! `ts-output` — pass log writers for the turnstile simulator.
//!
//! | Writer       | Files created                   |
//! |--------------|---------------------------------|
//! | [`CsvWriter`]| `passes.csv`, `summary.csv`     |
//!
//! Writers implement [`OutputWriter`] and are driven by [`PassLogObserver`],
//! which implements `ts_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ts_output::{CsvWriter, PassLogObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = PassLogObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::PassLogObserver;
pub use row::{PassRow, SummaryRow};
pub use writer::OutputWriter;
