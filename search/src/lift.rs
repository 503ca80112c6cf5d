//! Countable-domain lifting via a retraction onto the naturals.
//!
//! A [`Retraction`] is an injection-like pair `to_index : A → u64`,
//! `from_index : u64 → A` with `from_index(to_index(x)) == x` for every
//! `x`. Nothing is required in the other direction — this is a retraction,
//! not a bijection, and `from_index` may collapse many indices onto one
//! element.
//!
//! Lifting transports a decidable predicate on `A` down to the naturals
//! (`P'(n) := P(from_index(n))`), transports the existence fact via
//! `to_index`, runs the natural-number pipeline, and transports the found
//! index back via `from_index`. Minimality holds for the transported
//! index, i.e. under the order `A` inherits through the retraction.

use minwit_kernel::oracle::{DecisionOracle, Existence};

use crate::minimal::minimal_witness;
use crate::trace::ScanTrace;

/// A retraction pair between a countable domain and the naturals.
///
/// # Law
///
/// `from_index(to_index(x)) == x` for all `x`. Implementations own the
/// law; nothing here re-checks it (the lifting theorems are vacuous
/// without it).
pub trait Retraction {
    /// The countable domain.
    type Elem;

    /// The injection-like direction.
    fn to_index(&self, elem: &Self::Elem) -> u64;

    /// The left inverse of [`Retraction::to_index`].
    fn from_index(&self, index: u64) -> Self::Elem;
}

/// Total decision procedure for a predicate over a domain's elements.
///
/// Same contract as [`DecisionOracle`]: total, pure, consistent.
pub trait ElemOracle<A> {
    /// Decide whether the predicate holds at `elem`.
    fn holds(&self, elem: &A) -> bool;
}

/// Adapter turning a pure `Fn(&A) -> bool` into an [`ElemOracle`].
pub struct FnElemOracle<F>(F);

impl<F> FnElemOracle<F> {
    /// Wrap a pure, total predicate function.
    pub fn new(predicate: F) -> Self {
        Self(predicate)
    }
}

impl<A, F: Fn(&A) -> bool> ElemOracle<A> for FnElemOracle<F> {
    fn holds(&self, elem: &A) -> bool {
        (self.0)(elem)
    }
}

/// The transported predicate `P'(n) := P(from_index(n))` as a
/// natural-number oracle.
pub struct LiftedOracle<'a, R, O> {
    retraction: &'a R,
    oracle: &'a O,
}

impl<'a, R, O> LiftedOracle<'a, R, O> {
    /// Pair a retraction with an element-level oracle.
    pub fn new(retraction: &'a R, oracle: &'a O) -> Self {
        Self { retraction, oracle }
    }
}

impl<R: Retraction, O: ElemOracle<R::Elem>> DecisionOracle for LiftedOracle<'_, R, O> {
    fn holds(&self, n: u64) -> bool {
        self.oracle.holds(&self.retraction.from_index(n))
    }
}

/// An existence fact on the domain side: this element satisfies `P`.
///
/// Transported to the naturals by `to_index`; the retraction law rewrites
/// `P(from_index(to_index(x)))` back to `P(x)`, so the transported fact
/// is valid whenever this one is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElemExistence<A> {
    elem: A,
}

impl<A> ElemExistence<A> {
    /// Assert, without checking, that the predicate holds at `elem`.
    ///
    /// Same contract as [`Existence::asserted`]: a false assertion puts
    /// the scan out of contract.
    pub fn asserted(elem: A) -> Self {
        Self { elem }
    }

    /// Build the fact by actually deciding the predicate at `elem`.
    ///
    /// Returns `None` if the oracle refutes the element.
    pub fn verified(oracle: &impl ElemOracle<A>, elem: A) -> Option<Self> {
        oracle.holds(&elem).then_some(Self { elem })
    }

    /// The named satisfying element.
    pub fn elem(&self) -> &A {
        &self.elem
    }
}

/// A unique-existence fact: exactly one element satisfies `P`.
///
/// Uniqueness is not preserved (or needed) on the natural-number side;
/// [`UniqueElemExistence::weaken`] forgets it before lifting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniqueElemExistence<A> {
    elem: A,
}

impl<A> UniqueElemExistence<A> {
    /// Assert that `elem` is the unique satisfying element.
    pub fn asserted(elem: A) -> Self {
        Self { elem }
    }

    /// Forget uniqueness, keeping plain existence.
    pub fn weaken(self) -> ElemExistence<A> {
        ElemExistence { elem: self.elem }
    }
}

/// A witness lifted back to the domain side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiftedWitness<A> {
    /// The satisfying element, `from_index(index)`.
    pub elem: A,
    /// The minimal transported index.
    pub index: u64,
    /// The natural-number scan trace (over the transported predicate).
    pub trace: ScanTrace,
}

/// Run the minimal-witness pipeline over a countable domain.
///
/// Transports the fact down, scans the naturals, and transports the found
/// index back. `elem` satisfies the predicate; `index` is minimal among
/// transported indices.
#[must_use]
pub fn minimal_lifted<R, O>(
    retraction: &R,
    oracle: &O,
    fact: &ElemExistence<R::Elem>,
) -> LiftedWitness<R::Elem>
where
    R: Retraction,
    O: ElemOracle<R::Elem>,
{
    let lifted = LiftedOracle::new(retraction, oracle);
    let transported = Existence::asserted(retraction.to_index(fact.elem()));
    let witness = minimal_witness(&lifted, &transported);
    LiftedWitness {
        elem: retraction.from_index(witness.value()),
        index: witness.value(),
        trace: witness.trace().clone(),
    }
}
