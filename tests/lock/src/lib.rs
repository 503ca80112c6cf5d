//! Shared helpers for the lock-test suite.
//!
//! Lock tests pin observable behavior of the whole workspace: witness
//! values, trace shapes, canonical bytes, and bundle digests. A failing
//! lock test means a behavioral change that must be deliberate.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

use minwit_kernel::oracle::{decide, Decision, DecisionOracle, SatisfiedAt};

/// Mint satisfaction evidence for `n`, panicking if the oracle refutes it.
///
/// Test-only shortcut: evidence can only be minted through [`decide`],
/// and most scenarios need it at an index known to satisfy.
///
/// # Panics
///
/// Panics if the oracle refutes `n`.
#[must_use]
pub fn satisfaction(oracle: &dyn DecisionOracle, n: u64) -> SatisfiedAt {
    match decide(oracle, n) {
        Decision::Holds(evidence) => evidence,
        Decision::Fails(_) => panic!("oracle refutes {n}, expected satisfaction"),
    }
}
