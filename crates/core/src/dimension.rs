//! Immutable 3-axis size representation.

use nalgebra::Vector3;
use std::fmt;

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A size along the three logical axes X, Y, Z.
///
/// Shared by containers and products. Carries no orientation semantics of its
/// own: an orientation is simply a `Size3D` whose components are a permutation
/// of a product's edge lengths, read against the container's axes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size3D {
    dimensions: Vector3<f64>,
}

impl Size3D {
    /// Creates a new size from components along X, Y, Z.
    ///
    /// Rejects negative or non-finite components; negative geometry is
    /// meaningless and would otherwise produce spurious nonzero fits.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        for (axis, value) in [("x", x), ("y", y), ("z", z)] {
            if !value.is_finite() {
                return Err(Error::InvalidDimension(format!(
                    "{axis} must be finite, got {value}"
                )));
            }
            if value < 0.0 {
                return Err(Error::InvalidDimension(format!(
                    "{axis} cannot be negative, got {value}"
                )));
            }
        }

        Ok(Self {
            dimensions: Vector3::new(x, y, z),
        })
    }

    /// Creates a size from components already known to satisfy the
    /// [`new`](Size3D::new) invariants.
    ///
    /// For callers permuting or forwarding components that were validated
    /// once at their own construction, e.g. orientation generation over a
    /// product's edges. The invariants are debug-asserted.
    pub fn from_validated(x: f64, y: f64, z: f64) -> Self {
        debug_assert!(x.is_finite() && x >= 0.0);
        debug_assert!(y.is_finite() && y >= 0.0);
        debug_assert!(z.is_finite() && z >= 0.0);

        Self {
            dimensions: Vector3::new(x, y, z),
        }
    }

    /// Returns the extent along X.
    pub fn x(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the extent along Y.
    pub fn y(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the extent along Z.
    pub fn z(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the components as an ordered `(x, y, z)` tuple.
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.dimensions.x, self.dimensions.y, self.dimensions.z)
    }

    /// Returns the enclosed volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }
}

impl fmt::Display for Size3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.dimensions.x, self.dimensions.y, self.dimensions.z
        )
    }
}
