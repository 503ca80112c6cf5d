//! Acceptance scenarios: end-to-end witness extraction over the harness
//! worlds, locking the exact witness values and trace shapes.

use lock_tests::satisfaction;
use minwit_harness::contract::WitnessWorldV1;
use minwit_harness::worlds::exact::ExactTarget;
use minwit_harness::worlds::threshold::MultipleAboveThreshold;
use minwit_kernel::cert::acc::Accessible;
use minwit_kernel::oracle::Existence;
use minwit_search::engine::scan_accessible;
use minwit_search::minimal::minimal_witness;

#[test]
fn exact_target_yields_the_target_itself() {
    let world = ExactTarget::new(5);
    let fact = Existence::verified(world.oracle(), world.known_witness()).unwrap();
    let witness = minimal_witness(world.oracle(), &fact);
    assert_eq!(witness.value(), 5);
    assert_eq!(witness.trace().refuted().len(), 5);
    witness.verify(world.oracle()).unwrap();
}

#[test]
fn threshold_world_refutes_both_failure_kinds_below_the_witness() {
    let world = MultipleAboveThreshold::new(3, 10);
    let fact = Existence::verified(world.oracle(), world.known_witness()).unwrap();
    let witness = minimal_witness(world.oracle(), &fact);
    assert_eq!(witness.value(), 12);
    // 0, 3, 6, 9 are multiples but not above the threshold.
    for k in [0, 3, 6, 9] {
        assert!(witness.trace().refutes(k), "trace must refute {k}");
    }
    // 10, 11 are above the threshold but not multiples.
    for k in [10, 11] {
        assert!(witness.trace().refutes(k), "trace must refute {k}");
    }
    assert!(!witness.trace().refutes(12));
    witness.verify(world.oracle()).unwrap();
}

#[test]
fn offset_scan_finds_the_first_witness_at_or_after_the_start() {
    let world = ExactTarget::new(107);
    let acc = Accessible::from_offset_satisfaction(100, satisfaction(world.oracle(), 107));
    let outcome = scan_accessible(world.oracle(), acc);
    assert_eq!(outcome.found, 107);
    assert_eq!(outcome.trace.start(), 100);
    assert_eq!(outcome.trace.refuted().len(), 7);
    for k in 100..107 {
        assert!(outcome.trace.refutes(k), "trace must refute {k}");
    }
}

// A nowhere-true predicate behind an asserted existence fact is out of
// contract: the asserted fact is the caller's claim, and a false claim
// makes the scan's termination argument vacuous. There is no behavior to
// lock here; Existence::asserted documents the contract.
