//! End-to-end run pipeline: world → verified fact → scan → replay → bundle.
//!
//! The runner is deliberately strict: the world's claimed witness is
//! re-verified before any scanning happens, and the extracted witness is
//! replayed against the oracle before artifacts are emitted. A bundle that
//! exists is a run whose evidence checked out.

use minwit_kernel::oracle::Existence;
use minwit_kernel::proof::canon::canonical_json_bytes;
use minwit_search::minimal::minimal_witness;
use minwit_search::trace::TraceDivergence;

use crate::bundle::{
    build_bundle, ArtifactBundleV1, BundleBuildError, ARTIFACT_SCAN_TRACE, ARTIFACT_WITNESS,
};
use crate::contract::WitnessWorldV1;

/// Error from the run pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The world's claimed witness fails its own oracle.
    ExistenceRefuted { world_id: String, index: u64 },
    /// Replay of the extracted witness diverged from the oracle.
    Divergence {
        world_id: String,
        divergence: TraceDivergence,
    },
    /// Canonical JSON serialization of an artifact failed.
    CanonFailed { detail: String },
    /// Bundle assembly failed.
    BundleFailed(BundleBuildError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExistenceRefuted { world_id, index } => {
                write!(f, "world {world_id}: claimed witness {index} fails the oracle")
            }
            Self::Divergence {
                world_id,
                divergence,
            } => write!(f, "world {world_id}: replay diverged: {divergence}"),
            Self::CanonFailed { detail } => write!(f, "artifact canonicalization failed: {detail}"),
            Self::BundleFailed(e) => write!(f, "bundle assembly failed: {e}"),
        }
    }
}

impl std::error::Error for RunError {}

/// Run the minimal-witness pipeline for one world and bundle the evidence.
///
/// Steps:
/// 1. verify the world's existence fact against its own oracle,
/// 2. extract the minimal witness (linear scan from 0),
/// 3. replay the scan trace as an independent check,
/// 4. emit `scan_trace.json` and `witness.json` (both normative) and
///    assemble the digest-bound bundle.
///
/// # Errors
///
/// Returns [`RunError`] if the existence fact is refuted, replay diverges,
/// or artifact serialization fails.
pub fn run_minimal_search(world: &dyn WitnessWorldV1) -> Result<ArtifactBundleV1, RunError> {
    let oracle = world.oracle();

    let fact = Existence::verified(oracle, world.known_witness()).map_err(|_| {
        RunError::ExistenceRefuted {
            world_id: world.world_id().to_string(),
            index: world.known_witness(),
        }
    })?;

    let witness = minimal_witness(oracle, &fact);
    witness.verify(oracle).map_err(|divergence| RunError::Divergence {
        world_id: world.world_id().to_string(),
        divergence,
    })?;

    let trace_bytes = witness
        .trace()
        .to_canonical_json_bytes()
        .map_err(|e| RunError::CanonFailed {
            detail: e.to_string(),
        })?;
    let trace_digest = witness.trace().digest().map_err(|e| RunError::CanonFailed {
        detail: e.to_string(),
    })?;

    let witness_value = serde_json::json!({
        "world_id": world.world_id(),
        "descriptor": world.descriptor(),
        "known_witness": world.known_witness(),
        "minimal_witness": witness.value(),
        "scan_start": witness.trace().start(),
        "scan_trace_digest": trace_digest.as_str(),
    });
    let witness_bytes =
        canonical_json_bytes(&witness_value).map_err(|e| RunError::CanonFailed {
            detail: e.to_string(),
        })?;

    build_bundle(vec![
        (ARTIFACT_SCAN_TRACE.to_string(), trace_bytes, true),
        (ARTIFACT_WITNESS.to_string(), witness_bytes, true),
    ])
    .map_err(RunError::BundleFailed)
}
