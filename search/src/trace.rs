//! `ScanTrace`: the relational proof object for a completed scan.
//!
//! A trace records one refuted link per failed index, consecutive from
//! `start`, and terminates at `found`, the first satisfying index. The
//! chain structure carries both top-level guarantees: the predicate holds
//! at `found` (terminal case) and nothing in `[start, found)` satisfies it
//! (one link per index — the minimality half).
//!
//! Traces are constructed only by the engine, from evidence values, so a
//! trace that exists is a trace that happened. [`ScanTrace::replay`] is
//! the independent check: re-decide every recorded index against the
//! oracle and report the first divergence.

use minwit_kernel::oracle::{decide, Decision, DecisionOracle, RefutedAt, SatisfiedAt};
use minwit_kernel::proof::canon::{canonical_json_bytes, CanonError};
use minwit_kernel::proof::hash::{canonical_hash, ContentHash};

/// Domain prefix for scan-trace content hashing.
pub const DOMAIN_SCAN_TRACE: &[u8] = b"MINWIT::SCAN_TRACE::V1\0";

/// One refuted index in the scan chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanLinkV1 {
    index: u64,
}

impl ScanLinkV1 {
    /// The refuted index.
    #[must_use]
    pub fn index(&self) -> u64 {
        self.index
    }
}

/// Relational record of a completed scan from `start` to `found`.
///
/// Invariants (by construction):
/// - `found == start + refuted.len()`
/// - `refuted[i].index() == start + i` — the chain is gapless
/// - the terminal index satisfied the predicate when the scan ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTrace {
    start: u64,
    found: u64,
    refuted: Vec<ScanLinkV1>,
}

impl ScanTrace {
    /// Assemble a trace from the evidence a scan accumulated.
    ///
    /// Engine-internal: the evidence vector must be the gapless refutation
    /// chain from `start` up to the terminal satisfaction.
    pub(crate) fn from_evidence(
        start: u64,
        terminal: SatisfiedAt,
        refutations: &[RefutedAt],
    ) -> Self {
        debug_assert_eq!(start + refutations.len() as u64, terminal.index());
        debug_assert!(refutations
            .iter()
            .enumerate()
            .all(|(i, r)| r.index() == start + i as u64));
        Self {
            start,
            found: terminal.index(),
            refuted: refutations
                .iter()
                .map(|r| ScanLinkV1 { index: r.index() })
                .collect(),
        }
    }

    /// The index the scan started from.
    #[must_use]
    pub fn start(&self) -> u64 {
        self.start
    }

    /// The first satisfying index at or after `start`.
    #[must_use]
    pub fn found(&self) -> u64 {
        self.found
    }

    /// The refuted links, in scan order.
    #[must_use]
    pub fn refuted(&self) -> &[ScanLinkV1] {
        &self.refuted
    }

    /// Whether this trace records a refutation of `k`.
    ///
    /// True exactly for `start <= k < found`.
    #[must_use]
    pub fn refutes(&self, k: u64) -> bool {
        self.start <= k && k < self.found
    }

    /// Re-decide every recorded index against `oracle`.
    ///
    /// # Errors
    ///
    /// Returns the first [`TraceDivergence`] if the oracle disagrees with
    /// any recorded link or with the terminal satisfaction. For the pure,
    /// consistent oracle the trace was built from, replay always succeeds.
    pub fn replay(&self, oracle: &dyn DecisionOracle) -> Result<(), TraceDivergence> {
        for link in &self.refuted {
            if let Decision::Holds(evidence) = decide(oracle, link.index()) {
                return Err(TraceDivergence::LinkSatisfied {
                    index: evidence.index(),
                });
            }
        }
        match decide(oracle, self.found) {
            Decision::Holds(_) => Ok(()),
            Decision::Fails(evidence) => Err(TraceDivergence::TerminalRefuted {
                index: evidence.index(),
            }),
        }
    }

    /// Canonical JSON rendering of the trace.
    ///
    /// Shape: `{"found":u64,"refuted":[u64...],"start":u64}` (sorted keys,
    /// compact). This is the byte surface that [`ScanTrace::digest`] and
    /// all artifact bindings commit to.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails (it cannot for this
    /// shape: all numbers are integers).
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        let refuted: Vec<serde_json::Value> = self
            .refuted
            .iter()
            .map(|link| serde_json::Value::from(link.index()))
            .collect();
        let value = serde_json::json!({
            "start": self.start,
            "found": self.found,
            "refuted": refuted,
        });
        canonical_json_bytes(&value)
    }

    /// Content hash of the canonical trace bytes under [`DOMAIN_SCAN_TRACE`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            DOMAIN_SCAN_TRACE,
            &self.to_canonical_json_bytes()?,
        ))
    }
}

/// A disagreement between a recorded trace and a fresh oracle decision.
///
/// Replay divergence means the oracle violated its purity/consistency
/// contract (or the trace is being replayed against a different oracle);
/// the trace itself cannot be forged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceDivergence {
    /// A recorded refutation link now satisfies the predicate.
    LinkSatisfied { index: u64 },
    /// The recorded terminal index now fails the predicate.
    TerminalRefuted { index: u64 },
}

impl std::fmt::Display for TraceDivergence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LinkSatisfied { index } => {
                write!(f, "recorded refutation at {index} now satisfies the predicate")
            }
            Self::TerminalRefuted { index } => {
                write!(f, "recorded witness at {index} now fails the predicate")
            }
        }
    }
}

impl std::error::Error for TraceDivergence {}
