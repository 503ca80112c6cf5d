//! Threshold world: multiples of a base strictly above a threshold.

use minwit_kernel::oracle::DecisionOracle;

use crate::contract::WitnessWorldV1;

/// `P(n) := n mod multiple == 0 ∧ n > threshold`.
///
/// The minimal witness is the first multiple strictly above the threshold.
/// With `multiple = 3`, `threshold = 10` that is 12: below it, `0, 3, 6, 9`
/// fail the threshold half and `10, 11` fail the divisibility half.
#[derive(Debug, Clone, Copy)]
pub struct MultipleAboveThreshold {
    multiple: u64,
    threshold: u64,
}

impl MultipleAboveThreshold {
    /// World over multiples of `multiple` strictly above `threshold`.
    ///
    /// # Panics
    ///
    /// Panics if `multiple` is 0 (no multiples exist above any threshold).
    #[must_use]
    pub fn new(multiple: u64, threshold: u64) -> Self {
        assert!(multiple > 0, "multiple must be positive");
        Self {
            multiple,
            threshold,
        }
    }
}

impl DecisionOracle for MultipleAboveThreshold {
    fn holds(&self, n: u64) -> bool {
        n % self.multiple == 0 && n > self.threshold
    }
}

impl WitnessWorldV1 for MultipleAboveThreshold {
    fn world_id(&self) -> &str {
        "multiple_above_threshold"
    }

    fn oracle(&self) -> &dyn DecisionOracle {
        self
    }

    fn known_witness(&self) -> u64 {
        (self.threshold / self.multiple + 1) * self.multiple
    }

    fn descriptor(&self) -> String {
        format!(
            "n mod {} == 0 and n > {}",
            self.multiple, self.threshold
        )
    }
}
