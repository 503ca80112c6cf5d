//! Scan entry points: the certificate-driven linear search loop.
//!
//! Both entry points run the same scan: decide the current index; on a
//! satisfaction, stop; on a refutation, shrink the certificate and advance.
//! Termination is justified by the certificate's structural descent
//! ([`scan_forward`]) or by the accessibility measure ([`scan_accessible`])
//! — never by a numeric fuel check inside the loop.
//!
//! The scan is an explicit iterative loop, not a recursion: search
//! distances are unbounded and must not be limited by call-stack depth.

use minwit_kernel::cert::acc::Accessible;
use minwit_kernel::cert::forward::ReachCertificate;
use minwit_kernel::oracle::{decide, Decision, DecisionOracle, RefutedAt};

use crate::trace::ScanTrace;

/// Result of a completed scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// The first satisfying index at or after the scan start.
    pub found: u64,
    /// The relational proof object recording the scan.
    pub trace: ScanTrace,
}

/// Linear scan driven by a forward-form certificate.
///
/// Starts at the certificate's root and returns the first satisfying
/// index, with a trace certifying that every index in `[root, found)`
/// failed the predicate.
///
/// Termination: each failed decision feeds
/// [`ReachCertificate::retreat`], which strictly shrinks the certificate's
/// structure. A predicate that is nowhere true behind an asserted
/// existence fact is out of contract (spelled out on
/// [`minwit_kernel::oracle::Existence::asserted`]).
#[must_use]
pub fn scan_forward(oracle: &dyn DecisionOracle, certificate: ReachCertificate) -> ScanOutcome {
    let start = certificate.root();
    let mut certificate = certificate;
    let mut index = start;
    let mut refutations: Vec<RefutedAt> = Vec::new();
    loop {
        match decide(oracle, index) {
            Decision::Holds(terminal) => {
                return ScanOutcome {
                    found: terminal.index(),
                    trace: ScanTrace::from_evidence(start, terminal, &refutations),
                };
            }
            Decision::Fails(refutation) => {
                certificate = certificate.retreat(refutation);
                refutations.push(refutation);
                index += 1;
            }
        }
    }
}

/// Linear scan driven by an accessibility certificate.
///
/// Logically the same scan as [`scan_forward`], expressed as well-founded
/// descent over the scan-continuation relation: each refutation makes the
/// next index accessible with a strictly smaller measure. For the same
/// oracle and the same existence fact, both entry points return the same
/// outcome.
#[must_use]
pub fn scan_accessible(oracle: &dyn DecisionOracle, accessible: Accessible) -> ScanOutcome {
    let start = accessible.index();
    let mut accessible = accessible;
    let mut refutations: Vec<RefutedAt> = Vec::new();
    loop {
        match decide(oracle, accessible.index()) {
            Decision::Holds(terminal) => {
                return ScanOutcome {
                    found: terminal.index(),
                    trace: ScanTrace::from_evidence(start, terminal, &refutations),
                };
            }
            Decision::Fails(refutation) => {
                accessible = accessible.step(refutation);
                refutations.push(refutation);
            }
        }
    }
}
