//! Optimization result representation.

use crate::dimension::Size3D;
use std::fmt::Write as _;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whole-unit counts along each container axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisCounts {
    /// Units along X.
    pub x: usize,
    /// Units along Y.
    pub y: usize,
    /// Units along Z.
    pub z: usize,
}

impl AxisCounts {
    /// Creates per-axis counts.
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Total units in the grid arrangement.
    ///
    /// Saturates at `usize::MAX` when extreme container/product ratios push
    /// the product of the per-axis counts past the representable range.
    pub fn total(&self) -> usize {
        self.x
            .checked_mul(self.y)
            .and_then(|v| v.checked_mul(self.z))
            .unwrap_or(usize::MAX)
    }

    /// Returns the counts as an ordered `(x, y, z)` tuple.
    pub fn as_tuple(&self) -> (usize, usize, usize) {
        (self.x, self.y, self.z)
    }
}

/// Fit outcome for a single tested orientation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrientationFit {
    /// The product edges as assigned to the container's X, Y, Z axes.
    pub orientation: Size3D,

    /// Whole units along each axis. All-zero when the orientation is
    /// infeasible.
    pub counts: AxisCounts,

    /// Total units (`counts.total()`).
    pub total: usize,

    /// Overhang beyond the container's nominal depth, display-scaled and
    /// rounded to one decimal place.
    pub overhang: f64,
}

/// Result of one optimization run.
///
/// Recomputed fresh on every `optimize()` call; never merged across runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptimizeResult {
    /// The winning orientation, or `None` when nothing fits.
    pub best_orientation: Option<Size3D>,

    /// Per-axis counts of the winning orientation (all-zero when nothing
    /// fits).
    pub best_counts: AxisCounts,

    /// Total units of the winning orientation.
    pub best_count: usize,

    /// Overhang of the winning orientation beyond the nominal depth,
    /// display-scaled and rounded to one decimal place.
    pub overhang: f64,

    /// Every tested orientation, in generation order.
    pub fits: Vec<OrientationFit>,
}

impl OptimizeResult {
    /// Returns true if at least one unit fits.
    pub fn is_feasible(&self) -> bool {
        self.best_count > 0
    }

    /// Fill efficiency as a percentage, for display layers.
    ///
    /// The caller supplies the volumes; the core only owns the counts.
    pub fn fill_percent(&self, product_volume: f64, container_volume: f64) -> f64 {
        if container_volume <= 0.0 {
            return 0.0;
        }
        self.best_count as f64 * product_volume / container_volume * 100.0
    }

    /// Renders the deterministic orientation trace.
    ///
    /// A derived view over the structured fields: one line per tested
    /// orientation, then the verdict. Calling this twice on the same result
    /// yields identical text.
    pub fn trace_log(&self) -> String {
        let mut log = String::from("Testing orientations:\n");

        for fit in &self.fits {
            let _ = writeln!(
                log,
                "Orientation {}: {:?} units per axis, total = {}",
                fit.orientation,
                fit.counts.as_tuple(),
                fit.total
            );
        }

        match self.best_orientation {
            None => log.push_str("\nNo orientation of the product fits the container."),
            Some(orientation) => {
                log.push_str("\nBest orientation found:\n");
                let _ = writeln!(log, "Product oriented as: {orientation}");
                let _ = writeln!(
                    log,
                    "Units per axis (x, y, z): {:?}",
                    self.best_counts.as_tuple()
                );
                let _ = writeln!(log, "Total units: {}", self.best_count);
                let _ = write!(log, "Overhang beyond nominal depth: {:.1}", self.overhang);
            }
        }

        log
    }
}
