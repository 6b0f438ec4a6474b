//! What a priority rule needs from a lane.

use std::collections::BTreeSet;

use ts_core::PersonId;

/// Read-only view of the people waiting in one direction.
///
/// Implementations must present members in ascending `PersonId` order, so
/// that [`head`][Self::head] is the same-direction tie-break winner.
/// `BTreeSet` does this by construction; slices and `Vec`s must already be
/// sorted (the simulator's rescan path builds them in index order).
pub trait CandidateLane {
    /// The lowest-index person waiting, if any.
    fn head(&self) -> Option<PersonId>;

    /// Number of people waiting in this lane.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CandidateLane for BTreeSet<PersonId> {
    #[inline]
    fn head(&self) -> Option<PersonId> {
        self.first().copied()
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

impl CandidateLane for [PersonId] {
    #[inline]
    fn head(&self) -> Option<PersonId> {
        self.first().copied()
    }

    #[inline]
    fn len(&self) -> usize {
        <[PersonId]>::len(self)
    }
}

impl CandidateLane for Vec<PersonId> {
    #[inline]
    fn head(&self) -> Option<PersonId> {
        self.as_slice().head()
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}
