//! Canonical hashing and canonical JSON for audit artifacts.
//!
//! Exactly one place defines canonical hashing and exactly one place
//! produces canonical JSON bytes. Every digest in the workspace routes
//! through these two modules.

pub mod canon;
pub mod hash;
