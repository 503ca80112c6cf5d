//! Minwit Kernel: decision evidence and termination certificates for
//! certified linear search.
//!
//! # API Surface
//!
//! The kernel exposes three concerns:
//!
//! - [`oracle`] -- decision oracles, decision evidence, existence facts
//! - [`cert`] -- the two termination-certificate forms (forward / accessibility)
//! - [`proof`] -- canonical hashing and canonical JSON for audit artifacts
//!
//! # Module Dependency Direction
//!
//! `oracle` ← `cert`; `proof` depends on nothing internal.
//!
//! One-way only. No cycles. Certificates are built exclusively from
//! evidence values minted by `oracle::decide`, which is what keeps
//! "evidence and certificate constructed together" a structural property
//! of the crate rather than a runtime check.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cert;
pub mod oracle;
pub mod proof;
