//! Minwit Harness: predicate worlds, the search runner, and artifact
//! bundles.
//!
//! The harness turns a minimal-witness search into a deterministic,
//! digest-bound artifact bundle that can be verified without re-running
//! the search. It uses ONLY kernel and search APIs; it does not implement
//! any proof logic itself.
//!
//! # Pipeline
//!
//! ```text
//! world → verify existence fact → minimal_witness() → replay trace
//!   → canonical scan_trace.json + witness.json → build bundle
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bundle;
pub mod bundle_dir;
pub mod contract;
pub mod runner;
pub mod worlds;
