//! Termination certificates for the linear scan.
//!
//! Two independent encodings of "a forward scan from this index will reach
//! a satisfying element":
//!
//! - [`forward`] -- the inductive chain form, consumed one layer per scan step
//! - [`acc`] -- the accessibility form over the scan-continuation relation
//!
//! Either can be derived from an existence fact, and each converts to the
//! other with an equal structural measure. The search engine accepts both;
//! the two pipelines must return the same witness for the same oracle and
//! existence fact.

pub mod acc;
pub mod forward;
