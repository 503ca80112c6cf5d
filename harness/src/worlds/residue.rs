//! Residue world: a finite domain reached through a retraction.
//!
//! The domain is `{0, 1, .., modulus-1}` embedded into the naturals by
//! identity, with `from_index(n) = n mod modulus` as the left inverse.
//! Used both as an element-level world for the lifted pipeline and, via
//! [`ResidueWorld`], as the already-transported natural-number world.

use minwit_kernel::oracle::DecisionOracle;
use minwit_search::lift::{ElemOracle, Retraction};

use crate::contract::WitnessWorldV1;

/// Retraction for the residue domain: identity down, `mod modulus` up.
#[derive(Debug, Clone, Copy)]
pub struct ResidueRetraction {
    modulus: u64,
}

impl ResidueRetraction {
    /// Retraction onto residues modulo `modulus`.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is 0.
    #[must_use]
    pub fn new(modulus: u64) -> Self {
        assert!(modulus > 0, "modulus must be positive");
        Self { modulus }
    }
}

impl Retraction for ResidueRetraction {
    type Elem = u64;

    fn to_index(&self, elem: &u64) -> u64 {
        *elem
    }

    fn from_index(&self, index: u64) -> u64 {
        index % self.modulus
    }
}

/// Element-level predicate: the element equals `target`.
#[derive(Debug, Clone, Copy)]
pub struct ResidueTarget {
    target: u64,
}

impl ResidueTarget {
    /// Predicate satisfied by exactly one residue.
    #[must_use]
    pub fn new(target: u64) -> Self {
        Self { target }
    }
}

impl ElemOracle<u64> for ResidueTarget {
    fn holds(&self, elem: &u64) -> bool {
        *elem == self.target
    }
}

/// The transported predicate `P'(n) := (n mod modulus) == target` as a
/// natural-number world, for runs that bypass the lifting layer.
#[derive(Debug, Clone, Copy)]
pub struct ResidueWorld {
    modulus: u64,
    target: u64,
}

impl ResidueWorld {
    /// Transported residue world.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is 0 or `target >= modulus` (no index could
    /// ever satisfy the predicate).
    #[must_use]
    pub fn new(modulus: u64, target: u64) -> Self {
        assert!(modulus > 0, "modulus must be positive");
        assert!(target < modulus, "target must be a residue");
        Self { modulus, target }
    }
}

impl DecisionOracle for ResidueWorld {
    fn holds(&self, n: u64) -> bool {
        n % self.modulus == self.target
    }
}

impl WitnessWorldV1 for ResidueWorld {
    fn world_id(&self) -> &str {
        "residue"
    }

    fn oracle(&self) -> &dyn DecisionOracle {
        self
    }

    fn known_witness(&self) -> u64 {
        self.target
    }

    fn descriptor(&self) -> String {
        format!("n mod {} == {}", self.modulus, self.target)
    }
}
