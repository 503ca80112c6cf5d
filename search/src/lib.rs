//! Minwit Search: certificate-driven linear search with an auditable
//! scan-trace artifact.
//!
//! This crate provides the search layer. It depends only on
//! `minwit_kernel` — it does NOT depend on `minwit_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! minwit_kernel  ←  minwit_search  ←  minwit_harness
//! (evidence,        (engine, trace,    (worlds, runner,
//!  certificates)     minimal, lift)     bundles)
//! ```
//!
//! # Key types
//!
//! - [`engine::ScanOutcome`] — found index plus its relational scan trace
//! - [`trace::ScanTrace`] — the replayable proof object for a completed scan
//! - [`minimal::MinimalWitness`] — smallest satisfying index with evidence
//! - [`lift::Retraction`] — transport to/from an arbitrary countable domain

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod engine;
pub mod lift;
pub mod minimal;
pub mod trace;
