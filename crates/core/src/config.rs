//! Optimizer configuration.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orientation generation mode for a product.
///
/// A capability switch on orientation generation, not a type hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OrientationMode {
    /// All 6 axis permutations of the product's edges.
    #[default]
    Free,
    /// Only 2 permutations, with the third edge pinned to the Z axis.
    ///
    /// Models stacking constraints where an item may not be tipped onto its
    /// side.
    LockVertical,
}

/// Common configuration for the packing optimizer.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Orientation generation mode.
    pub mode: OrientationMode,

    /// Linear scale applied to the overhang for display.
    ///
    /// The core is unit-agnostic; the default of 100.0 maps meter-denominated
    /// inputs to a centimeter-denominated overhang readout.
    pub display_scale: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: OrientationMode::default(),
            display_scale: 100.0,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the orientation generation mode.
    pub fn with_mode(mut self, mode: OrientationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the overhang display scale.
    pub fn with_display_scale(mut self, scale: f64) -> Self {
        self.display_scale = scale;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.display_scale.is_finite() || self.display_scale < 0.0 {
            return Err(Error::ConfigError(format!(
                "display_scale must be finite and non-negative, got {}",
                self.display_scale
            )));
        }
        Ok(())
    }
}
