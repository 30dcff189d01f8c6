//! Container (cargo cage) representation.

use cagepack_core::{Error, Result, Size3D};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular container to be filled with copies of a single product.
///
/// Holds the usable interior dimensions plus a depth tolerance: extra
/// allowance on the Y axis only, modeling overhang permitted beyond the
/// nominal boundary (e.g. a door or gate that can bulge). The tolerance
/// widens the fit test without changing the nominal depth, which is kept for
/// overhang measurement.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    /// Usable interior dimensions.
    dimensions: Size3D,

    /// Extra allowance on the Y axis.
    depth_tolerance: f64,
}

impl Container {
    /// Creates a new container from interior dimensions and a depth
    /// tolerance.
    ///
    /// All three dimensions must be strictly positive: a container with zero
    /// extent along any axis can never hold a product, so it fails fast here
    /// instead of silently yielding zero fits downstream. The tolerance must
    /// be non-negative.
    pub fn new(x: f64, y: f64, z: f64, depth_tolerance: f64) -> Result<Self> {
        let dimensions =
            Size3D::new(x, y, z).map_err(|e| Error::InvalidContainer(e.to_string()))?;

        if x <= 0.0 || y <= 0.0 || z <= 0.0 {
            return Err(Error::InvalidContainer(
                "All dimensions must be positive".into(),
            ));
        }

        if !depth_tolerance.is_finite() || depth_tolerance < 0.0 {
            return Err(Error::InvalidContainer(format!(
                "Depth tolerance must be finite and non-negative, got {depth_tolerance}"
            )));
        }

        Ok(Self {
            dimensions,
            depth_tolerance,
        })
    }

    /// Returns the nominal interior dimensions.
    pub fn dimensions(&self) -> &Size3D {
        &self.dimensions
    }

    /// Returns the depth tolerance.
    pub fn depth_tolerance(&self) -> f64 {
        self.depth_tolerance
    }

    /// Returns the effective depth used for the fit test: nominal Y plus the
    /// tolerance.
    pub fn effective_depth(&self) -> f64 {
        self.dimensions.y() + self.depth_tolerance
    }

    /// Returns the nominal interior volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.volume()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_effective_depth() {
        let container = Container::new(2.2, 1.3, 2.4, 0.13).unwrap();
        assert_relative_eq!(container.effective_depth(), 1.43, epsilon = 1e-12);
        // The nominal depth is unchanged by the tolerance.
        assert_eq!(container.dimensions().y(), 1.3);
    }

    #[test]
    fn test_zero_tolerance() {
        let container = Container::new(1.0, 1.0, 1.0, 0.0).unwrap();
        assert_eq!(container.effective_depth(), 1.0);
    }

    #[test]
    fn test_volume() {
        let container = Container::new(2.0, 3.0, 4.0, 0.5).unwrap();
        // Volume is nominal, ignoring the tolerance.
        assert_relative_eq!(container.volume(), 24.0, epsilon = 1e-12);
    }

    #[test]
    fn test_validation() {
        assert!(Container::new(0.0, 1.0, 1.0, 0.0).is_err());
        assert!(Container::new(1.0, -1.0, 1.0, 0.0).is_err());
        assert!(Container::new(1.0, 1.0, 1.0, -0.1).is_err());
        assert!(Container::new(1.0, 1.0, 1.0, f64::NAN).is_err());
        assert!(Container::new(1.0, 1.0, 1.0, 0.0).is_ok());
    }
}
