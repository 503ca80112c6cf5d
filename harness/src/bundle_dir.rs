//! Bundle directory I/O: persist a bundle as plain files and load it back.
//!
//! Layout inside the target directory:
//! - one file per artifact, named by its logical name,
//! - `manifest.json` — the canonical manifest bytes,
//! - `digest.txt` — the bundle digest string, trailing newline.
//!
//! Reading reconstructs the bundle from the artifact files plus the
//! manifest's normative flags, recomputing every hash. The stored digest
//! is checked against the recomputed one, so on-disk tampering surfaces
//! at load time.

use std::fs;
use std::path::Path;

use crate::bundle::{build_bundle, ArtifactBundleV1};

const MANIFEST_FILE: &str = "manifest.json";
const DIGEST_FILE: &str = "digest.txt";

/// Error reading or writing a bundle directory.
#[derive(Debug)]
pub enum BundleDirError {
    /// Filesystem operation failed.
    Io {
        path: String,
        source: std::io::Error,
    },
    /// `manifest.json` is missing a field or not canonical-shaped.
    MalformedManifest { detail: String },
    /// The stored digest does not match the reconstructed bundle.
    DigestMismatch { stored: String, computed: String },
}

impl std::fmt::Display for BundleDirError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path}: {source}"),
            Self::MalformedManifest { detail } => write!(f, "malformed manifest: {detail}"),
            Self::DigestMismatch { stored, computed } => {
                write!(f, "stored digest {stored} does not match computed {computed}")
            }
        }
    }
}

impl std::error::Error for BundleDirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn io_err(path: &Path, source: std::io::Error) -> BundleDirError {
    BundleDirError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Write a bundle into `dir`, creating the directory if needed.
///
/// # Errors
///
/// Returns [`BundleDirError::Io`] on any filesystem failure.
pub fn write_bundle_dir(bundle: &ArtifactBundleV1, dir: &Path) -> Result<(), BundleDirError> {
    fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    for artifact in bundle.artifacts.values() {
        let path = dir.join(&artifact.name);
        fs::write(&path, &artifact.content).map_err(|e| io_err(&path, e))?;
    }
    let manifest_path = dir.join(MANIFEST_FILE);
    fs::write(&manifest_path, &bundle.manifest).map_err(|e| io_err(&manifest_path, e))?;
    let digest_path = dir.join(DIGEST_FILE);
    fs::write(&digest_path, format!("{}\n", bundle.digest.as_str()))
        .map_err(|e| io_err(&digest_path, e))?;
    Ok(())
}

/// Load a bundle from `dir` and check the stored digest.
///
/// # Errors
///
/// Returns [`BundleDirError`] on filesystem failure, a malformed
/// manifest, or a digest mismatch.
pub fn read_bundle_dir(dir: &Path) -> Result<ArtifactBundleV1, BundleDirError> {
    let manifest_path = dir.join(MANIFEST_FILE);
    let manifest_bytes = fs::read(&manifest_path).map_err(|e| io_err(&manifest_path, e))?;
    let manifest: serde_json::Value =
        serde_json::from_slice(&manifest_bytes).map_err(|e| BundleDirError::MalformedManifest {
            detail: e.to_string(),
        })?;
    let entries = manifest
        .as_object()
        .ok_or_else(|| BundleDirError::MalformedManifest {
            detail: "manifest root must be an object".to_string(),
        })?;

    let mut inputs = Vec::with_capacity(entries.len());
    for (name, entry) in entries {
        let normative =
            entry["normative"]
                .as_bool()
                .ok_or_else(|| BundleDirError::MalformedManifest {
                    detail: format!("entry {name} missing normative flag"),
                })?;
        // Manifest names are untrusted; a name with a path component
        // would escape the bundle directory when joined.
        if name.contains(['/', '\\']) || name == ".." {
            return Err(BundleDirError::MalformedManifest {
                detail: format!("artifact name {name} must be a bare filename"),
            });
        }
        let path = dir.join(name);
        let content = fs::read(&path).map_err(|e| io_err(&path, e))?;
        inputs.push((name.clone(), content, normative));
    }

    let bundle = build_bundle(inputs).map_err(|e| BundleDirError::MalformedManifest {
        detail: e.to_string(),
    })?;

    let digest_path = dir.join(DIGEST_FILE);
    let stored = fs::read_to_string(&digest_path).map_err(|e| io_err(&digest_path, e))?;
    let stored = stored.trim_end();
    if stored != bundle.digest.as_str() {
        return Err(BundleDirError::DigestMismatch {
            stored: stored.to_string(),
            computed: bundle.digest.as_str().to_string(),
        });
    }

    Ok(bundle)
}
