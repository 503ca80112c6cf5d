//! Minimality sweeps: for a spread of predicates and existence indices,
//! the extracted witness satisfies the predicate and nothing below it does.

use minwit_kernel::oracle::{DecisionOracle, Existence, FnOracle};
use minwit_search::minimal::minimal_witness;

fn assert_minimal(oracle: &dyn DecisionOracle, fact_index: u64, expected: u64) {
    let fact = Existence::verified(oracle, fact_index).unwrap();
    let witness = minimal_witness(oracle, &fact);
    assert_eq!(witness.value(), expected);
    assert!(oracle.holds(witness.value()), "witness must satisfy");
    for k in 0..witness.value() {
        assert!(!oracle.holds(k), "{k} below the witness must fail");
        assert!(witness.trace().refutes(k), "trace must refute {k}");
    }
    witness.verify(oracle).unwrap();
}

#[test]
fn divisibility_predicates() {
    for d in 1..=12u64 {
        let oracle = FnOracle::new(move |n| n % d == 0 && n > 0);
        assert_minimal(&oracle, d * 5, d);
    }
}

#[test]
fn threshold_predicates() {
    for t in [0u64, 1, 2, 10, 63, 64, 100] {
        let oracle = FnOracle::new(move |n| n >= t);
        assert_minimal(&oracle, t + 9, t);
    }
}

#[test]
fn square_growth_predicate() {
    let oracle = FnOracle::new(|n| n * n >= 1000);
    // 31^2 = 961 < 1000 <= 1024 = 32^2.
    assert_minimal(&oracle, 50, 32);
}

#[test]
fn witness_at_zero_produces_an_empty_chain() {
    let oracle = FnOracle::new(|_| true);
    let fact = Existence::verified(&oracle, 0).unwrap();
    let witness = minimal_witness(&oracle, &fact);
    assert_eq!(witness.value(), 0);
    assert!(witness.trace().refuted().is_empty());
}

#[test]
fn fact_index_does_not_leak_into_the_witness() {
    let oracle = FnOracle::new(|n| n % 4 == 2);
    for fact_index in [2u64, 6, 10, 42, 1002] {
        let fact = Existence::verified(&oracle, fact_index).unwrap();
        let witness = minimal_witness(&oracle, &fact);
        assert_eq!(witness.value(), 2, "fact at {fact_index} must not move the witness");
    }
}
