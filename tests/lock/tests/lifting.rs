//! Lifted pipeline over a countable domain, using the harness residue
//! world as the retraction.

use minwit_harness::worlds::residue::{ResidueRetraction, ResidueTarget};
use minwit_kernel::oracle::Existence;
use minwit_search::lift::{
    minimal_lifted, ElemExistence, LiftedOracle, Retraction, UniqueElemExistence,
};
use minwit_search::minimal::minimal_witness;

#[test]
fn lifted_search_finds_the_residue() {
    let retraction = ResidueRetraction::new(3);
    let oracle = ResidueTarget::new(2);
    let fact = ElemExistence::verified(&oracle, 2).unwrap();
    let witness = minimal_lifted(&retraction, &oracle, &fact);
    assert_eq!(witness.elem, 2);
    assert_eq!(witness.index, 2);
    assert_eq!(witness.trace.refuted().len(), 2);
}

#[test]
fn lifting_agrees_with_manual_transport() {
    let retraction = ResidueRetraction::new(5);
    let oracle = ResidueTarget::new(3);
    let fact = ElemExistence::asserted(3u64);

    let lifted = minimal_lifted(&retraction, &oracle, &fact);

    let transported_oracle = LiftedOracle::new(&retraction, &oracle);
    let transported_fact = Existence::asserted(retraction.to_index(fact.elem()));
    let manual = minimal_witness(&transported_oracle, &transported_fact);

    assert_eq!(lifted.index, manual.value());
    assert_eq!(lifted.elem, retraction.from_index(manual.value()));
    assert_eq!(&lifted.trace, manual.trace());
}

#[test]
fn fact_named_through_a_collapsed_index_still_yields_the_minimal_one() {
    let retraction = ResidueRetraction::new(3);
    let oracle = ResidueTarget::new(2);
    // 8 mod 3 == 2, so asserting the element reached from index 8 is valid,
    // but the minimal transported index is still 2.
    let fact = ElemExistence::verified(&oracle, retraction.from_index(8)).unwrap();
    let witness = minimal_lifted(&retraction, &oracle, &fact);
    assert_eq!(witness.index, 2);
    assert_eq!(witness.elem, 2);
}

#[test]
fn unique_existence_weakens_and_lifts() {
    let retraction = ResidueRetraction::new(4);
    let oracle = ResidueTarget::new(1);
    let unique = UniqueElemExistence::asserted(1u64);
    let witness = minimal_lifted(&retraction, &oracle, &unique.weaken());
    assert_eq!(witness.elem, 1);
    assert_eq!(witness.index, 1);
}
