//! Equivalence of the two certificate formalisms: the forward inductive
//! form and the accessibility form drive the same scan to the same
//! outcome, and convert into each other with equal measure.

use lock_tests::satisfaction;
use minwit_kernel::cert::acc::Accessible;
use minwit_kernel::cert::forward::ReachCertificate;
use minwit_kernel::oracle::{Existence, FnOracle};
use minwit_search::engine::{scan_accessible, scan_forward};

#[test]
fn both_forms_produce_identical_outcomes() {
    let oracle = FnOracle::new(|n| n % 7 == 4);
    let fact = Existence::asserted(11);
    let forward = scan_forward(&oracle, ReachCertificate::from_existence(&fact));
    let accessible = scan_accessible(&oracle, Accessible::from_existence(&fact));
    assert_eq!(forward, accessible);
    assert_eq!(forward.found, 4);
}

#[test]
fn both_forms_agree_from_a_nonzero_start() {
    let oracle = FnOracle::new(|n| n >= 25);
    let acc = Accessible::from_offset_satisfaction(20, satisfaction(&oracle, 30));
    let via_forward = scan_forward(&oracle, acc.to_forward());
    let via_accessible = scan_accessible(&oracle, acc);
    assert_eq!(via_forward, via_accessible);
    assert_eq!(via_forward.found, 25);
    assert_eq!(via_forward.trace.start(), 20);
}

#[test]
fn forward_to_accessible_preserves_root_and_measure() {
    let cert = ReachCertificate::from_existence(&Existence::asserted(9));
    let acc = cert.to_accessible();
    assert_eq!(acc.index(), cert.root());
    assert_eq!(acc.bound(), cert.depth());
}

#[test]
fn accessible_to_forward_preserves_index_and_measure() {
    let oracle = FnOracle::new(|n| n == 17);
    let acc = Accessible::from_offset_satisfaction(10, satisfaction(&oracle, 17));
    let cert = acc.to_forward();
    assert_eq!(cert.root(), acc.index());
    assert_eq!(cert.depth(), acc.bound());
}

#[test]
fn round_trip_conversion_is_identity_on_the_measure() {
    let cert = ReachCertificate::from_existence(&Existence::asserted(13));
    let back = cert.to_accessible().to_forward();
    assert_eq!(back.root(), cert.root());
    assert_eq!(back.depth(), cert.depth());
}
