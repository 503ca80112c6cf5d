//! Concrete predicate worlds for acceptance tests and benchmarks.

pub mod exact;
pub mod residue;
pub mod threshold;
