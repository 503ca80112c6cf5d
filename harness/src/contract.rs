//! Witness world contract trait.

use minwit_kernel::oracle::DecisionOracle;

/// Trait for worlds that supply a decidable predicate plus its existence
/// fact.
///
/// # Contract
///
/// - The oracle must be total, pure, and consistent (the
///   [`DecisionOracle`] contract).
/// - `known_witness` must be a satisfying index — it is the world's
///   existence fact, and the runner re-verifies it before scanning.
/// - `descriptor` must be a stable human-readable rendering of the
///   predicate; it is bound into the witness artifact.
pub trait WitnessWorldV1 {
    /// Unique world identifier.
    fn world_id(&self) -> &str;

    /// The decision oracle for the world's predicate.
    fn oracle(&self) -> &dyn DecisionOracle;

    /// A known satisfying index (the existence fact).
    fn known_witness(&self) -> u64;

    /// Stable human-readable predicate description.
    fn descriptor(&self) -> String;
}
