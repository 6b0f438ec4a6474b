//! Strongly typed person identifier.
//!
//! A `PersonId` is the person's position in the input.  It is
//! `Copy + Ord + Hash` so it can key ordered sets directly: ordering by
//! `PersonId` is exactly the same-direction tie-break.

use std::fmt;

/// Index of a person in the input sequence.  Max ~4.3 billion people.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonId(pub u32);

impl PersonId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersonId({})", self.0)
    }
}

impl TryFrom<usize> for PersonId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<PersonId, Self::Error> {
        u32::try_from(n).map(PersonId)
    }
}
