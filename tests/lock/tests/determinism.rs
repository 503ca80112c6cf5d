//! Determinism locks: identical inputs must yield byte-identical canonical
//! artifacts and stable digests across repeated runs.

use minwit_harness::runner::run_minimal_search;
use minwit_harness::worlds::threshold::MultipleAboveThreshold;
use minwit_kernel::oracle::{Existence, FnOracle};
use minwit_search::minimal::minimal_witness;

#[test]
fn canonical_trace_bytes_are_identical_across_runs() {
    let oracle = FnOracle::new(|n| n % 5 == 3);
    let fact = Existence::asserted(13);
    let reference = minimal_witness(&oracle, &fact)
        .trace()
        .to_canonical_json_bytes()
        .unwrap();
    for _ in 0..10 {
        let bytes = minimal_witness(&oracle, &fact)
            .trace()
            .to_canonical_json_bytes()
            .unwrap();
        assert_eq!(bytes, reference);
    }
}

#[test]
fn canonical_trace_bytes_are_locked() {
    let oracle = FnOracle::new(|n| n >= 3);
    let witness = minimal_witness(&oracle, &Existence::asserted(3));
    let bytes = witness.trace().to_canonical_json_bytes().unwrap();
    assert_eq!(bytes, br#"{"found":3,"refuted":[0,1,2],"start":0}"#);
}

#[test]
fn trace_digest_is_stable() {
    let oracle = FnOracle::new(|n| n == 7);
    let fact = Existence::asserted(7);
    let first = minimal_witness(&oracle, &fact).trace().digest().unwrap();
    let second = minimal_witness(&oracle, &fact).trace().digest().unwrap();
    assert_eq!(first, second);
    assert!(first.as_str().starts_with("sha256:"));
}

#[test]
fn bundle_digest_is_stable_across_runs() {
    let world = MultipleAboveThreshold::new(3, 10);
    let reference = run_minimal_search(&world).unwrap();
    for _ in 0..10 {
        let bundle = run_minimal_search(&world).unwrap();
        assert_eq!(bundle.digest, reference.digest);
        assert_eq!(bundle.manifest, reference.manifest);
        assert_eq!(bundle.digest_basis, reference.digest_basis);
    }
}

#[test]
fn distinct_worlds_produce_distinct_bundle_digests() {
    let a = run_minimal_search(&MultipleAboveThreshold::new(3, 10)).unwrap();
    let b = run_minimal_search(&MultipleAboveThreshold::new(3, 20)).unwrap();
    assert_ne!(a.digest, b.digest);
}
