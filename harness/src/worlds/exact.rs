//! Exact-target world: the predicate holds at exactly one index.

use minwit_kernel::oracle::DecisionOracle;

use crate::contract::WitnessWorldV1;

/// `P(n) := n == target`. The minimal witness is the target itself.
#[derive(Debug, Clone, Copy)]
pub struct ExactTarget {
    target: u64,
}

impl ExactTarget {
    /// World with a single satisfying index.
    #[must_use]
    pub fn new(target: u64) -> Self {
        Self { target }
    }
}

impl DecisionOracle for ExactTarget {
    fn holds(&self, n: u64) -> bool {
        n == self.target
    }
}

impl WitnessWorldV1 for ExactTarget {
    fn world_id(&self) -> &str {
        "exact_target"
    }

    fn oracle(&self) -> &dyn DecisionOracle {
        self
    }

    fn known_witness(&self) -> u64 {
        self.target
    }

    fn descriptor(&self) -> String {
        format!("n == {}", self.target)
    }
}
