//! Forward-form termination certificate.
//!
//! [`ReachCertificate`] pairs a root index with an inductive shape:
//! `Stop` ("the predicate holds here") or `Next` ("a certificate exists one
//! index further on"). The scan consumes one `Next` layer per failed
//! decision via [`ReachCertificate::retreat`], so the certificate shrinks
//! structurally while the scan index grows numerically. That structural
//! descent is the termination measure for the linear scan; no numeric
//! fuel bound is involved.
//!
//! A certificate is constructed once, from evidence or from an existence
//! fact, and consumed exactly once by a scan. It is neither `Clone` nor
//! shareable.

use crate::cert::acc::Accessible;
use crate::oracle::{Existence, RefutedAt, SatisfiedAt};

/// The inductive certificate shape.
#[derive(Debug)]
enum Reach {
    /// The predicate holds at the root index.
    Stop,
    /// A certificate exists for root + 1.
    Next(Box<Reach>),
}

/// A termination certificate rooted at a concrete index.
///
/// Invariant: `depth()` layers of `Next` above a `Stop` whose implied
/// index (`root + depth`) satisfies the predicate. The invariant is
/// established at construction (evidence or existence fact) and preserved
/// by every operation; nothing re-checks it at runtime.
#[derive(Debug)]
pub struct ReachCertificate {
    root: u64,
    shape: Reach,
}

impl ReachCertificate {
    /// Base case: a certificate rooted exactly at a satisfying index.
    #[must_use]
    pub fn stop(evidence: SatisfiedAt) -> Self {
        Self {
            root: evidence.index(),
            shape: Reach::Stop,
        }
    }

    /// Derive a certificate rooted at 0 from an existence fact.
    ///
    /// Builds `Next^at(Stop)`: the `Stop` layer is justified by the fact's
    /// named index, each `Next` layer by the one above it.
    #[must_use]
    pub fn from_existence(fact: &Existence) -> Self {
        let mut shape = Reach::Stop;
        for _ in 0..fact.index() {
            shape = Reach::Next(Box::new(shape));
        }
        Self { root: 0, shape }
    }

    /// Wrap one layer, re-rooting the certificate at `root - 1`.
    ///
    /// Returns `None` when already rooted at 0 (there is no earlier index).
    #[must_use]
    pub fn push_back(mut self) -> Option<Self> {
        let root = self.root.checked_sub(1)?;
        let inner = std::mem::replace(&mut self.shape, Reach::Stop);
        Some(Self {
            root,
            shape: Reach::Next(Box::new(inner)),
        })
    }

    /// Re-root the certificate at 0 by repeated wrapping.
    ///
    /// Normalizes any certificate to the scan's true starting point.
    #[must_use]
    pub fn lift_to_zero(mut self) -> Self {
        while self.root > 0 {
            match self.push_back() {
                Some(lowered) => self = lowered,
                // root > 0 was just checked
                None => unreachable!(),
            }
        }
        self
    }

    /// The inversion step: from a certificate at `n` and a refutation of
    /// `n` itself, derive the structurally smaller certificate at `n + 1`.
    ///
    /// A `Stop` at a refuted index is a contradiction: `Stop` certificates
    /// originate from a satisfaction decision at their root, and the same
    /// pure oracle cannot also refute that index. The branch is impossible
    /// by construction, not a runtime failure path.
    #[must_use]
    pub fn retreat(mut self, refutation: RefutedAt) -> Self {
        debug_assert_eq!(
            refutation.index(),
            self.root,
            "retreat evidence must refute the certificate root"
        );
        let shape = std::mem::replace(&mut self.shape, Reach::Stop);
        match shape {
            Reach::Next(inner) => Self {
                root: self.root + 1,
                shape: *inner,
            },
            Reach::Stop => unreachable!(
                "refutation at {} contradicts the satisfaction evidence this \
                 certificate was built from",
                self.root
            ),
        }
    }

    /// The index this certificate is rooted at.
    #[must_use]
    pub fn root(&self) -> u64 {
        self.root
    }

    /// Structural size: the number of `Next` layers above the `Stop`.
    #[must_use]
    pub fn depth(&self) -> u64 {
        let mut depth = 0;
        let mut cursor = &self.shape;
        while let Reach::Next(inner) = cursor {
            depth += 1;
            cursor = inner;
        }
        depth
    }

    /// Convert to the accessibility form with an equal measure.
    #[must_use]
    pub fn to_accessible(&self) -> Accessible {
        Accessible::with_measure(self.root, self.depth())
    }

    // Crate-internal: build a certificate at `root` with `depth` layers,
    // justified by the caller's own invariant (accessibility conversion).
    pub(crate) fn with_measure(root: u64, depth: u64) -> Self {
        let mut shape = Reach::Stop;
        for _ in 0..depth {
            shape = Reach::Next(Box::new(shape));
        }
        Self { root, shape }
    }
}

// The default recursive drop would recurse once per `Next` layer; deep
// certificates (large scan distances) must not exhaust the stack.
impl Drop for ReachCertificate {
    fn drop(&mut self) {
        let mut cursor = std::mem::replace(&mut self.shape, Reach::Stop);
        while let Reach::Next(inner) = cursor {
            cursor = *inner;
        }
    }
}
