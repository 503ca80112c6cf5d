//! In-memory artifact bundle: the output of a harness run.
//!
//! No file I/O in this module. The bundle is a deterministic in-memory
//! representation that can be inspected programmatically.
//!
//! # Normative vs observational artifacts
//!
//! Each artifact is tagged `normative` (participates in the bundle digest)
//! or observational (present in the manifest but excluded from the digest).
//! The bundle digest is computed over the **digest basis**: a canonical
//! JSON projection of normative artifact hashes only.

use std::collections::BTreeMap;

use minwit_kernel::proof::canon::canonical_json_bytes;
use minwit_kernel::proof::hash::{canonical_hash, ContentHash};
use minwit_search::trace::DOMAIN_SCAN_TRACE;

/// Domain prefix for bundle artifact content hashing.
pub const DOMAIN_BUNDLE_ARTIFACT: &[u8] = b"MINWIT::BUNDLE_ARTIFACT::V1\0";

/// Domain prefix for bundle digest computation.
pub const DOMAIN_BUNDLE_DIGEST: &[u8] = b"MINWIT::BUNDLE_DIGEST::V1\0";

/// Logical filename of the canonical scan trace artifact.
pub const ARTIFACT_SCAN_TRACE: &str = "scan_trace.json";

/// Logical filename of the witness summary artifact.
pub const ARTIFACT_WITNESS: &str = "witness.json";

/// A single artifact in the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleArtifact {
    /// Logical filename (e.g., `"scan_trace.json"`).
    pub name: String,
    /// Raw bytes of the artifact.
    pub content: Vec<u8>,
    /// Content hash: `canonical_hash(DOMAIN_BUNDLE_ARTIFACT, content)`.
    pub content_hash: ContentHash,
    /// Whether this artifact participates in the bundle digest.
    pub normative: bool,
}

/// The complete artifact bundle from a harness run.
///
/// All JSON artifacts use the kernel's canonical JSON bytes.
#[derive(Debug, Clone)]
pub struct ArtifactBundleV1 {
    /// Artifacts indexed by logical name, in sorted order (`BTreeMap`).
    pub artifacts: BTreeMap<String, BundleArtifact>,
    /// Full manifest: canonical JSON listing all artifacts with normative flags.
    pub manifest: Vec<u8>,
    /// Digest basis: canonical JSON listing normative artifact hashes only.
    pub digest_basis: Vec<u8>,
    /// Bundle digest: `canonical_hash(DOMAIN_BUNDLE_DIGEST, digest_basis)`.
    pub digest: ContentHash,
}

/// Error building a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleBuildError {
    /// Canonical JSON serialization failed.
    CanonError { detail: String },
}

impl std::fmt::Display for BundleBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CanonError { detail } => write!(f, "bundle canonicalization failed: {detail}"),
        }
    }
}

impl std::error::Error for BundleBuildError {}

/// Build an `ArtifactBundleV1` from `(name, content, normative)` triples.
///
/// Computes content hashes, the sorted manifest, the digest basis, and the
/// bundle digest.
///
/// # Errors
///
/// Returns [`BundleBuildError`] if canonical JSON serialization fails.
pub fn build_bundle(
    artifacts: Vec<(String, Vec<u8>, bool)>,
) -> Result<ArtifactBundleV1, BundleBuildError> {
    let mut artifact_map = BTreeMap::new();
    for (name, content, normative) in artifacts {
        let content_hash = canonical_hash(DOMAIN_BUNDLE_ARTIFACT, &content);
        artifact_map.insert(
            name.clone(),
            BundleArtifact {
                name,
                content,
                content_hash,
                normative,
            },
        );
    }

    let manifest = manifest_bytes(&artifact_map)?;
    let digest_basis = digest_basis_bytes(&artifact_map)?;
    let digest = canonical_hash(DOMAIN_BUNDLE_DIGEST, &digest_basis);

    Ok(ArtifactBundleV1 {
        artifacts: artifact_map,
        manifest,
        digest_basis,
        digest,
    })
}

fn manifest_bytes(
    artifacts: &BTreeMap<String, BundleArtifact>,
) -> Result<Vec<u8>, BundleBuildError> {
    let mut entries = serde_json::Map::new();
    for artifact in artifacts.values() {
        entries.insert(
            artifact.name.clone(),
            serde_json::json!({
                "content_hash": artifact.content_hash.as_str(),
                "normative": artifact.normative,
            }),
        );
    }
    canonical_json_bytes(&serde_json::Value::Object(entries))
        .map_err(|e| BundleBuildError::CanonError {
            detail: e.to_string(),
        })
}

fn digest_basis_bytes(
    artifacts: &BTreeMap<String, BundleArtifact>,
) -> Result<Vec<u8>, BundleBuildError> {
    let mut entries = serde_json::Map::new();
    for artifact in artifacts.values().filter(|a| a.normative) {
        entries.insert(
            artifact.name.clone(),
            serde_json::Value::from(artifact.content_hash.as_str()),
        );
    }
    canonical_json_bytes(&serde_json::Value::Object(entries))
        .map_err(|e| BundleBuildError::CanonError {
            detail: e.to_string(),
        })
}

/// Error verifying a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleVerifyError {
    /// An artifact's recomputed content hash does not match.
    ArtifactHashMismatch { name: String },
    /// The recomputed manifest does not match the stored manifest.
    ManifestMismatch,
    /// The recomputed bundle digest does not match.
    DigestMismatch { expected: String, computed: String },
    /// A required artifact is absent.
    MissingArtifact { name: &'static str },
    /// An artifact failed to parse.
    MalformedArtifact { name: &'static str, detail: String },
    /// The witness artifact disagrees with the scan trace artifact.
    BindingMismatch { detail: String },
}

impl std::fmt::Display for BundleVerifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArtifactHashMismatch { name } => {
                write!(f, "content hash mismatch for artifact {name}")
            }
            Self::ManifestMismatch => write!(f, "manifest does not match artifacts"),
            Self::DigestMismatch { expected, computed } => {
                write!(f, "bundle digest mismatch: expected {expected}, computed {computed}")
            }
            Self::MissingArtifact { name } => write!(f, "missing artifact {name}"),
            Self::MalformedArtifact { name, detail } => {
                write!(f, "malformed artifact {name}: {detail}")
            }
            Self::BindingMismatch { detail } => {
                write!(f, "witness/trace binding mismatch: {detail}")
            }
        }
    }
}

impl std::error::Error for BundleVerifyError {}

/// Verify a bundle's internal consistency.
///
/// Recomputes every artifact hash, the manifest, the digest basis, and
/// the bundle digest, then cross-checks the witness artifact against the
/// scan trace artifact: the recorded trace digest, the witness value
/// (must equal the trace's terminal index), and the gapless refutation
/// chain.
///
/// # Errors
///
/// Returns the first [`BundleVerifyError`] encountered.
pub fn verify_bundle(bundle: &ArtifactBundleV1) -> Result<(), BundleVerifyError> {
    for artifact in bundle.artifacts.values() {
        let recomputed = canonical_hash(DOMAIN_BUNDLE_ARTIFACT, &artifact.content);
        if recomputed != artifact.content_hash {
            return Err(BundleVerifyError::ArtifactHashMismatch {
                name: artifact.name.clone(),
            });
        }
    }

    let manifest = manifest_bytes(&bundle.artifacts)
        .map_err(|_| BundleVerifyError::ManifestMismatch)?;
    if manifest != bundle.manifest {
        return Err(BundleVerifyError::ManifestMismatch);
    }

    let digest_basis = digest_basis_bytes(&bundle.artifacts)
        .map_err(|_| BundleVerifyError::ManifestMismatch)?;
    let digest = canonical_hash(DOMAIN_BUNDLE_DIGEST, &digest_basis);
    if digest != bundle.digest {
        return Err(BundleVerifyError::DigestMismatch {
            expected: bundle.digest.as_str().to_string(),
            computed: digest.as_str().to_string(),
        });
    }

    verify_witness_binding(bundle)
}

fn verify_witness_binding(bundle: &ArtifactBundleV1) -> Result<(), BundleVerifyError> {
    let trace_artifact = bundle
        .artifacts
        .get(ARTIFACT_SCAN_TRACE)
        .ok_or(BundleVerifyError::MissingArtifact {
            name: ARTIFACT_SCAN_TRACE,
        })?;
    let witness_artifact = bundle
        .artifacts
        .get(ARTIFACT_WITNESS)
        .ok_or(BundleVerifyError::MissingArtifact {
            name: ARTIFACT_WITNESS,
        })?;

    let trace: serde_json::Value = serde_json::from_slice(&trace_artifact.content).map_err(
        |e| BundleVerifyError::MalformedArtifact {
            name: ARTIFACT_SCAN_TRACE,
            detail: e.to_string(),
        },
    )?;
    let witness: serde_json::Value = serde_json::from_slice(&witness_artifact.content).map_err(
        |e| BundleVerifyError::MalformedArtifact {
            name: ARTIFACT_WITNESS,
            detail: e.to_string(),
        },
    )?;

    let found = require_u64(&trace, "found", ARTIFACT_SCAN_TRACE)?;
    let start = require_u64(&trace, "start", ARTIFACT_SCAN_TRACE)?;
    let refuted = trace["refuted"]
        .as_array()
        .ok_or(BundleVerifyError::MalformedArtifact {
            name: ARTIFACT_SCAN_TRACE,
            detail: "refuted must be an array".to_string(),
        })?;

    // The chain must be gapless: refuted == [start, found). The artifact
    // bytes are untrusted, so the span arithmetic must not overflow.
    if start.checked_add(refuted.len() as u64) != Some(found) {
        return Err(BundleVerifyError::BindingMismatch {
            detail: format!(
                "trace chain length {} does not span [{start}, {found})",
                refuted.len()
            ),
        });
    }
    // start + i cannot overflow here: start + refuted.len() == found.
    for (i, link) in refuted.iter().enumerate() {
        if link.as_u64() != Some(start + i as u64) {
            return Err(BundleVerifyError::BindingMismatch {
                detail: format!("trace link {i} is not consecutive"),
            });
        }
    }

    let witness_value = require_u64(&witness, "minimal_witness", ARTIFACT_WITNESS)?;
    if witness_value != found {
        return Err(BundleVerifyError::BindingMismatch {
            detail: format!("witness {witness_value} does not match trace terminal {found}"),
        });
    }

    let recorded_digest = witness["scan_trace_digest"].as_str().ok_or(
        BundleVerifyError::MalformedArtifact {
            name: ARTIFACT_WITNESS,
            detail: "scan_trace_digest must be a string".to_string(),
        },
    )?;
    let trace_digest = canonical_hash(DOMAIN_SCAN_TRACE, &trace_artifact.content);
    if recorded_digest != trace_digest.as_str() {
        return Err(BundleVerifyError::BindingMismatch {
            detail: "scan_trace_digest does not match the trace artifact".to_string(),
        });
    }

    Ok(())
}

fn require_u64(
    value: &serde_json::Value,
    field: &str,
    name: &'static str,
) -> Result<u64, BundleVerifyError> {
    value[field]
        .as_u64()
        .ok_or_else(|| BundleVerifyError::MalformedArtifact {
            name,
            detail: format!("{field} must be a u64"),
        })
}
