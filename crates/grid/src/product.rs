//! Product representation and orientation generation.

use cagepack_core::{Error, OrientationMode, Result, Size3D};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-index permutations, in the fixed generation order used for
/// tie-breaking. Generated even when edge values coincide, so the candidate
/// sequence is identical for every product.
const FREE_PERMUTATIONS: [(usize, usize, usize); 6] = [
    (0, 1, 2),
    (0, 2, 1),
    (1, 0, 2),
    (1, 2, 0),
    (2, 0, 1),
    (2, 1, 0),
];

/// The two permutations with edge 2 pinned to the Z axis.
const LOCKED_PERMUTATIONS: [(usize, usize, usize); 2] = [(0, 1, 2), (1, 0, 2)];

/// A rectangular product to be packed.
///
/// Holds three physical edge lengths. Their order is arbitrary but fixed at
/// construction; no axis labels attach until an orientation is chosen.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Product {
    edges: [f64; 3],
}

impl Product {
    /// Creates a new product from its three edge lengths.
    ///
    /// Every edge must be strictly positive and finite.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        for (label, value) in [("a", a), ("b", b), ("c", c)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidProduct(format!(
                    "Edge {label} must be positive and finite, got {value}"
                )));
            }
        }

        Ok(Self { edges: [a, b, c] })
    }

    /// Returns the edge lengths in construction order.
    pub fn edges(&self) -> [f64; 3] {
        self.edges
    }

    /// Returns the product's volume.
    pub fn volume(&self) -> f64 {
        self.edges[0] * self.edges[1] * self.edges[2]
    }

    /// Returns the candidate orientations for the given mode, in a stable,
    /// deterministic order.
    ///
    /// Each orientation assigns the three edges to the container's X, Y, Z
    /// axes. `Free` yields all 6 index permutations; `LockVertical` yields
    /// only the two with the third edge kept vertical.
    pub fn orientations(&self, mode: OrientationMode) -> Vec<Size3D> {
        let permutations: &[(usize, usize, usize)] = match mode {
            OrientationMode::Free => &FREE_PERMUTATIONS,
            OrientationMode::LockVertical => &LOCKED_PERMUTATIONS,
        };

        permutations
            .iter()
            .map(|&(x, y, z)| {
                // Edges are validated positive at construction.
                Size3D::from_validated(self.edges[x], self.edges[y], self.edges[z])
            })
            .collect()
    }
}
