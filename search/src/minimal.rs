//! Minimal-witness extraction: the top of the natural-number pipeline.
//!
//! Normalizes an existence fact to a certificate rooted at 0, scans, and
//! packages the result. Because the scan is linear and index-by-index from
//! 0, the trace's refuted links cover every natural below the witness —
//! that chain is the minimality certificate, checked by replay rather
//! than asserted.

use minwit_kernel::cert::forward::ReachCertificate;
use minwit_kernel::oracle::{DecisionOracle, Existence};

use crate::engine::scan_forward;
use crate::trace::{ScanTrace, TraceDivergence};

/// The smallest satisfying index, with its scan evidence.
///
/// Invariant: `value() == trace().found()` and `trace().start() == 0`,
/// so every `k < value()` appears as a refuted link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalWitness {
    value: u64,
    trace: ScanTrace,
}

impl MinimalWitness {
    /// The minimal satisfying index.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The scan trace certifying satisfaction and minimality.
    #[must_use]
    pub fn trace(&self) -> &ScanTrace {
        &self.trace
    }

    /// Re-check both guarantees against the oracle by replaying the trace.
    ///
    /// # Errors
    ///
    /// Returns [`TraceDivergence`] if the oracle disagrees with any
    /// recorded decision; impossible for the pure oracle the witness was
    /// extracted from.
    pub fn verify(&self, oracle: &dyn DecisionOracle) -> Result<(), TraceDivergence> {
        self.trace.replay(oracle)
    }
}

/// Extract the smallest index satisfying the predicate.
///
/// Converts the existence fact into a certificate rooted at 0 and scans
/// forward. The returned witness satisfies the predicate, and no smaller
/// natural does.
#[must_use]
pub fn minimal_witness(oracle: &dyn DecisionOracle, fact: &Existence) -> MinimalWitness {
    let certificate = ReachCertificate::from_existence(fact);
    let outcome = scan_forward(oracle, certificate);
    MinimalWitness {
        value: outcome.found,
        trace: outcome.trace,
    }
}

/// Former name of [`minimal_witness`], kept as a compatibility alias.
#[deprecated(since = "0.0.1", note = "renamed to `minimal_witness`")]
#[must_use]
pub fn indefinite_witness(oracle: &dyn DecisionOracle, fact: &Existence) -> MinimalWitness {
    minimal_witness(oracle, fact)
}
