//! Bundle verification and directory round-trips, including tamper
//! detection at both the in-memory and on-disk layers.

use minwit_harness::bundle::{
    verify_bundle, BundleVerifyError, ARTIFACT_SCAN_TRACE, ARTIFACT_WITNESS,
};
use minwit_harness::bundle_dir::{read_bundle_dir, write_bundle_dir, BundleDirError};
use minwit_harness::runner::run_minimal_search;
use minwit_harness::worlds::exact::ExactTarget;
use minwit_harness::worlds::residue::ResidueWorld;
use minwit_kernel::proof::hash::canonical_hash;

#[test]
fn fresh_bundles_verify() {
    for world in [ExactTarget::new(0), ExactTarget::new(5), ExactTarget::new(64)] {
        let bundle = run_minimal_search(&world).unwrap();
        verify_bundle(&bundle).unwrap();
    }
    let bundle = run_minimal_search(&ResidueWorld::new(7, 4)).unwrap();
    verify_bundle(&bundle).unwrap();
}

#[test]
fn tampered_trace_content_is_detected() {
    let mut bundle = run_minimal_search(&ExactTarget::new(5)).unwrap();
    bundle
        .artifacts
        .get_mut(ARTIFACT_SCAN_TRACE)
        .unwrap()
        .content = br#"{"found":2,"refuted":[0,1],"start":0}"#.to_vec();
    let err = verify_bundle(&bundle).unwrap_err();
    assert!(matches!(err, BundleVerifyError::ArtifactHashMismatch { .. }));
}

#[test]
fn rehashed_tampering_is_caught_by_the_binding_check() {
    // Tamper with the trace AND recompute its content hash, manifest, and
    // digest so the hash chain is internally consistent again. The
    // witness/trace binding still exposes the lie.
    let mut bundle = run_minimal_search(&ExactTarget::new(5)).unwrap();
    let forged = br#"{"found":2,"refuted":[0,1],"start":0}"#.to_vec();
    {
        let artifact = bundle.artifacts.get_mut(ARTIFACT_SCAN_TRACE).unwrap();
        artifact.content_hash = canonical_hash(
            minwit_harness::bundle::DOMAIN_BUNDLE_ARTIFACT,
            &forged,
        );
        artifact.content = forged;
    }
    let inputs = bundle
        .artifacts
        .values()
        .map(|a| (a.name.clone(), a.content.clone(), a.normative))
        .collect();
    let rebuilt = minwit_harness::bundle::build_bundle(inputs).unwrap();
    let err = verify_bundle(&rebuilt).unwrap_err();
    assert!(matches!(err, BundleVerifyError::BindingMismatch { .. }));
}

#[test]
fn missing_witness_artifact_is_reported() {
    let mut bundle = run_minimal_search(&ExactTarget::new(3)).unwrap();
    bundle.artifacts.remove(ARTIFACT_WITNESS);
    let inputs = bundle
        .artifacts
        .values()
        .map(|a| (a.name.clone(), a.content.clone(), a.normative))
        .collect();
    let rebuilt = minwit_harness::bundle::build_bundle(inputs).unwrap();
    let err = verify_bundle(&rebuilt).unwrap_err();
    assert!(matches!(
        err,
        BundleVerifyError::MissingArtifact {
            name: ARTIFACT_WITNESS
        }
    ));
}

#[test]
fn directory_round_trip_preserves_everything() {
    let bundle = run_minimal_search(&ExactTarget::new(12)).unwrap();
    let dir = tempfile::tempdir().unwrap();
    write_bundle_dir(&bundle, dir.path()).unwrap();
    let loaded = read_bundle_dir(dir.path()).unwrap();
    assert_eq!(loaded.digest, bundle.digest);
    assert_eq!(loaded.manifest, bundle.manifest);
    assert_eq!(loaded.artifacts, bundle.artifacts);
    verify_bundle(&loaded).unwrap();
}

#[test]
fn on_disk_edit_fails_the_digest_check() {
    let bundle = run_minimal_search(&ExactTarget::new(12)).unwrap();
    let dir = tempfile::tempdir().unwrap();
    write_bundle_dir(&bundle, dir.path()).unwrap();
    std::fs::write(
        dir.path().join(ARTIFACT_SCAN_TRACE),
        br#"{"found":0,"refuted":[],"start":0}"#,
    )
    .unwrap();
    let err = read_bundle_dir(dir.path()).unwrap_err();
    assert!(matches!(err, BundleDirError::DigestMismatch { .. }));
}
