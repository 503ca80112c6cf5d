//! Decision oracles, decision evidence, and existence facts.
//!
//! A [`DecisionOracle`] is the total decision procedure for a predicate
//! over the naturals: for every index it answers "holds" or "fails",
//! with no side effects and the same answer on every call.
//!
//! [`decide`] is the only mint for evidence values. [`SatisfiedAt`] and
//! [`RefutedAt`] have private fields and no public constructor, so holding
//! one means an actual oracle decision produced it. Certificates
//! ([`crate::cert`]) and scan traces consume these values directly.

/// Total decision procedure for a predicate over the naturals.
///
/// # Contract
///
/// - Total: every `n` gets an answer.
/// - Pure: no side effects, no hidden state.
/// - Consistent: the same `n` always yields the same answer.
///
/// Decidability is a precondition supplied by the caller; a predicate
/// without a decision procedure is outside this crate's scope entirely.
pub trait DecisionOracle {
    /// Decide whether the predicate holds at `n`.
    fn holds(&self, n: u64) -> bool;
}

/// Adapter turning a pure `Fn(u64) -> bool` into a [`DecisionOracle`].
pub struct FnOracle<F>(F);

impl<F: Fn(u64) -> bool> FnOracle<F> {
    /// Wrap a pure, total predicate function.
    pub fn new(predicate: F) -> Self {
        Self(predicate)
    }
}

impl<F: Fn(u64) -> bool> DecisionOracle for FnOracle<F> {
    fn holds(&self, n: u64) -> bool {
        (self.0)(n)
    }
}

/// Evidence that the predicate holds at an index.
///
/// Only [`decide`] constructs this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SatisfiedAt {
    index: u64,
}

impl SatisfiedAt {
    /// The satisfying index.
    #[must_use]
    pub fn index(&self) -> u64 {
        self.index
    }
}

/// Evidence that the predicate fails at an index.
///
/// Only [`decide`] constructs this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefutedAt {
    index: u64,
}

impl RefutedAt {
    /// The refuted index.
    #[must_use]
    pub fn index(&self) -> u64 {
        self.index
    }
}

/// A tagged oracle answer carrying its evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The predicate holds at the index.
    Holds(SatisfiedAt),
    /// The predicate fails at the index.
    Fails(RefutedAt),
}

/// Decide the predicate at `n`, minting the matching evidence value.
///
/// Exactly one of the two evidence forms is produced per index; for a
/// consistent oracle the same index always yields the same form.
#[must_use]
pub fn decide(oracle: &dyn DecisionOracle, n: u64) -> Decision {
    if oracle.holds(n) {
        Decision::Holds(SatisfiedAt { index: n })
    } else {
        Decision::Fails(RefutedAt { index: n })
    }
}

/// An existence fact: some natural satisfies the predicate.
///
/// The constructive rendering names the index. A classical "it exists
/// somewhere" fact with no index has no finite value in this crate; the
/// index is what every termination certificate is ultimately derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Existence {
    at: u64,
}

impl Existence {
    /// Assert, without checking, that the predicate holds at `at`.
    ///
    /// If the assertion is false the downstream scan is out of contract:
    /// it will walk past `at` and trip the certificate contradiction
    /// branch. That is a logic error in the caller, not a reported error.
    #[must_use]
    pub fn asserted(at: u64) -> Self {
        Self { at }
    }

    /// Build an existence fact by actually deciding the predicate at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`ExistenceError::RefutedIndex`] if the oracle refutes `at`.
    pub fn verified(oracle: &dyn DecisionOracle, at: u64) -> Result<Self, ExistenceError> {
        match decide(oracle, at) {
            Decision::Holds(evidence) => Ok(Self {
                at: evidence.index(),
            }),
            Decision::Fails(evidence) => Err(ExistenceError::RefutedIndex {
                index: evidence.index(),
            }),
        }
    }

    /// The named satisfying index.
    #[must_use]
    pub fn index(&self) -> u64 {
        self.at
    }
}

/// Failure to build a verified existence fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExistenceError {
    /// The oracle refuted the index the caller claimed satisfies the predicate.
    RefutedIndex { index: u64 },
}

impl std::fmt::Display for ExistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RefutedIndex { index } => {
                write!(f, "predicate refuted at claimed witness index {index}")
            }
        }
    }
}

impl std::error::Error for ExistenceError {}
