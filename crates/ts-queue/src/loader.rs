//! Input loaders.
//!
//! # Three-line text format
//!
//! The console format: a person count, a line of arrival ticks, and a line
//! of direction codes (`0` = enter, `1` = exit), whitespace separated.
//!
//! ```text
//! 4
//! 0 0 1 5
//! 0 1 1 0
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.
//!
//! # CSV format
//!
//! One row per person.  `direction` accepts `0`/`1` or `enter`/`exit`.
//!
//! ```csv
//! index,arrival,direction
//! 0,0,enter
//! 1,0,exit
//! 2,1,1
//! ```
//!
//! Both loaders return people in file order and leave validation (index
//! uniqueness, position match, arrival order) to the simulation builder.

use std::io::{BufRead, Read};
use std::path::Path;

use serde::Deserialize;

use ts_core::{CoreError, Direction, Person, PersonId, Tick, people_from_columns};

use crate::QueueError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PersonRecord {
    index:     u32,
    arrival:   u64,
    direction: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load people from a CSV file.
pub fn load_people_csv(path: &Path) -> Result<Vec<Person>, QueueError> {
    load_people_reader(std::fs::File::open(path)?)
}

/// Like [`load_people_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or reading stdin.
pub fn load_people_reader<R: Read>(reader: R) -> Result<Vec<Person>, QueueError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    csv_reader
        .deserialize::<PersonRecord>()
        .map(|result| -> Result<Person, QueueError> {
            let row = result.map_err(|e| QueueError::Parse(e.to_string()))?;
            let direction: Direction = row.direction.parse()?;
            Ok(Person::new(PersonId(row.index), Tick(row.arrival), direction))
        })
        .collect()
}

/// Read the three-line text format.
///
/// A count that disagrees with either line's length is reported as
/// [`CoreError::LengthMismatch`].
pub fn read_people_text<R: BufRead>(reader: R) -> Result<Vec<Person>, QueueError> {
    let mut lines = Vec::with_capacity(3);
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            tracing::debug!(line = line_no + 1, "skipping blank or comment line");
            continue;
        }
        lines.push(trimmed.to_owned());
        if lines.len() == 3 {
            break;
        }
    }

    let mut lines = lines.into_iter();
    let count: usize = match lines.next() {
        Some(l) => l
            .parse()
            .map_err(|_| QueueError::Parse(format!("invalid person count {l:?}")))?,
        None => return Err(QueueError::Parse("missing person count".into())),
    };
    let arrivals: Vec<u64> = parse_tokens(lines.next().as_deref().unwrap_or(""), "arrival tick")?;
    let directions: Vec<u8> = parse_tokens(lines.next().as_deref().unwrap_or(""), "direction code")?;

    if arrivals.len() != count {
        return Err(CoreError::LengthMismatch {
            expected: count,
            got:      arrivals.len(),
            what:     "arrival line",
        }
        .into());
    }
    if directions.len() != count {
        return Err(CoreError::LengthMismatch {
            expected: count,
            got:      directions.len(),
            what:     "direction line",
        }
        .into());
    }

    Ok(people_from_columns(&arrivals, &directions)?)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_tokens<T: std::str::FromStr>(line: &str, what: &str) -> Result<Vec<T>, QueueError> {
    line.split_whitespace()
        .map(|tok| {
            tok.parse::<T>()
                .map_err(|_| QueueError::Parse(format!("invalid {what} {tok:?}")))
        })
        .collect()
}
