//! Accessibility-form termination certificate.
//!
//! The scan-continuation relation is `R(x, y) ⇔ x = y + 1 ∧ ¬P(y)`:
//! `y` precedes `x` when the scan had to continue past `y`. An index is
//! accessible when no infinite descending `R`-chain starts from it, which
//! holds for every index at or below a satisfying element — the chain
//! bottoms out where the predicate holds.
//!
//! [`Accessible`] carries the well-founded measure explicitly: `bound` is
//! the distance to a known satisfying index. [`Accessible::step`] descends
//! one `R`-edge and strictly decreases the measure; that descent justifies
//! the scan loop without any a priori numeric cap on the search range.

use crate::cert::forward::ReachCertificate;
use crate::oracle::{Existence, RefutedAt, SatisfiedAt};

/// An accessible index with its explicit descent measure.
///
/// Invariant: the predicate holds at `index + bound`. Established at
/// construction, preserved by [`Accessible::step`], never re-checked.
#[derive(Debug, PartialEq, Eq)]
pub struct Accessible {
    index: u64,
    bound: u64,
}

impl Accessible {
    /// A satisfying index is immediately accessible: the chain ends here.
    #[must_use]
    pub fn from_satisfaction(evidence: SatisfiedAt) -> Self {
        Self {
            index: evidence.index(),
            bound: 0,
        }
    }

    /// General induction: if the predicate holds some offset ahead of
    /// `index`, then `index` is accessible with that offset as measure.
    ///
    /// # Panics
    ///
    /// Panics if the evidence index is below `index`; the offset form
    /// requires the satisfying point to lie at or ahead of the start.
    #[must_use]
    pub fn from_offset_satisfaction(index: u64, evidence: SatisfiedAt) -> Self {
        assert!(
            evidence.index() >= index,
            "offset satisfaction evidence at {} lies before start index {index}",
            evidence.index()
        );
        Self {
            index,
            bound: evidence.index() - index,
        }
    }

    /// Specialization at index 0: any existence fact makes 0 accessible.
    #[must_use]
    pub fn from_existence(fact: &Existence) -> Self {
        Self {
            index: 0,
            bound: fact.index(),
        }
    }

    /// Descend one `R`-edge: a refutation of the current index makes
    /// `index + 1` accessible with a strictly smaller measure.
    ///
    /// A zero measure means the predicate holds at the current index, so a
    /// refutation of it cannot exist for a consistent oracle. The branch
    /// is impossible by construction, not a runtime failure path.
    #[must_use]
    pub fn step(self, refutation: RefutedAt) -> Self {
        debug_assert_eq!(
            refutation.index(),
            self.index,
            "step evidence must refute the accessible index"
        );
        match self.bound.checked_sub(1) {
            Some(bound) => Self {
                index: self.index + 1,
                bound,
            },
            None => unreachable!(
                "refutation at {} contradicts the satisfaction evidence this \
                 accessibility value was built from",
                self.index
            ),
        }
    }

    /// The accessible index.
    #[must_use]
    pub fn index(&self) -> u64 {
        self.index
    }

    /// The descent measure: distance to the known satisfying index.
    #[must_use]
    pub fn bound(&self) -> u64 {
        self.bound
    }

    /// Convert to the forward form with an equal measure.
    #[must_use]
    pub fn to_forward(&self) -> ReachCertificate {
        ReachCertificate::with_measure(self.index, self.bound)
    }

    pub(crate) fn with_measure(index: u64, bound: u64) -> Self {
        Self { index, bound }
    }
}
