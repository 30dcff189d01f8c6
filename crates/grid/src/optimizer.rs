//! Uniform-grid orientation optimizer.

use crate::container::Container;
use crate::product::Product;
use cagepack_core::{AxisCounts, Config, OptimizeResult, OrientationFit, Result, Size3D};

/// Tolerance applied to fit comparisons and floor divisions.
///
/// Exact-fit arithmetic on f64 is sensitive to representation error: for
/// example `2.4 / 0.2` evaluates to `11.999999999999998`, and a raw floor
/// would lose a unit that fits exactly. The epsilon restores the intended
/// count without admitting edges that genuinely exceed a bound.
pub const FIT_EPS: f64 = 1e-9;

/// Whole units of `edge` that fit within `bound`.
///
/// The `as` cast saturates at `usize::MAX` for ratios beyond the
/// representable range, matching the saturation in
/// [`AxisCounts::total`](cagepack_core::AxisCounts::total).
fn grid_count(bound: f64, edge: f64) -> usize {
    (bound / edge + FIT_EPS).floor() as usize
}

/// Rounds a display value to one decimal place.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Finds the product orientation that maximizes whole-unit count in a
/// container.
///
/// Binds one container, one product, and a configuration at construction;
/// [`optimize`](GridOptimizer::optimize) is a pure function of those inputs
/// and may be called repeatedly, always recomputing from scratch. Concurrent
/// runs over different inputs should each use their own instance.
pub struct GridOptimizer {
    container: Container,
    product: Product,
    config: Config,
}

impl GridOptimizer {
    /// Creates an optimizer over the given container and product.
    ///
    /// The container and product enforce their own invariants at
    /// construction; only the configuration is validated here.
    pub fn new(container: Container, product: Product, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            container,
            product,
            config,
        })
    }

    /// Creates an optimizer with the default configuration.
    pub fn with_defaults(container: Container, product: Product) -> Result<Self> {
        Self::new(container, product, Config::default())
    }

    /// Returns the bound container.
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Returns the bound product.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Per-axis unit counts for one orientation, or all-zero when any edge
    /// exceeds its container bound.
    ///
    /// The X and Z bounds are the nominal dimensions; the Y bound is the
    /// effective depth (nominal plus tolerance). An edge exactly equal to its
    /// bound fits.
    fn fit_counts(&self, orientation: &Size3D) -> AxisCounts {
        let dims = self.container.dimensions();
        let depth = self.container.effective_depth();
        let (ox, oy, oz) = orientation.as_tuple();

        if ox > dims.x() + FIT_EPS || oy > depth + FIT_EPS || oz > dims.z() + FIT_EPS {
            return AxisCounts::default();
        }

        AxisCounts::new(
            grid_count(dims.x(), ox),
            grid_count(depth, oy),
            grid_count(dims.z(), oz),
        )
    }

    /// Overhang of `counts.y` stacked units beyond the nominal depth,
    /// display-scaled and rounded to one decimal place.
    fn display_overhang(&self, orientation: &Size3D, counts: &AxisCounts) -> f64 {
        let raw = (counts.y as f64 * orientation.y() - self.container.dimensions().y()).max(0.0);
        round_one_decimal(raw * self.config.display_scale)
    }

    /// Evaluates every candidate orientation and selects the one with the
    /// highest total unit count.
    ///
    /// Orientations are tested in their generation order; an orientation
    /// replaces the running best only on a strictly greater total, so ties
    /// keep the earliest candidate. When no orientation fits, the result
    /// carries a zero count and no orientation rather than an error.
    pub fn optimize(&self) -> OptimizeResult {
        let orientations = self.product.orientations(self.config.mode);

        let mut fits = Vec::with_capacity(orientations.len());
        let mut best: Option<OrientationFit> = None;

        for orientation in orientations {
            let counts = self.fit_counts(&orientation);
            let total = counts.total();
            let overhang = self.display_overhang(&orientation, &counts);

            log::debug!(
                "orientation {orientation}: {:?} units per axis, total = {total}",
                counts.as_tuple()
            );

            let fit = OrientationFit {
                orientation,
                counts,
                total,
                overhang,
            };

            if total > best.as_ref().map_or(0, |b| b.total) {
                best = Some(fit.clone());
            }

            fits.push(fit);
        }

        let result = match best {
            Some(best) => OptimizeResult {
                best_orientation: Some(best.orientation),
                best_counts: best.counts,
                best_count: best.total,
                overhang: best.overhang,
                fits,
            },
            None => OptimizeResult {
                best_orientation: None,
                best_counts: AxisCounts::default(),
                best_count: 0,
                overhang: 0.0,
                fits,
            },
        };

        match result.best_orientation {
            Some(orientation) => log::debug!(
                "best orientation {orientation}: {} units",
                result.best_count
            ),
            None => log::debug!("no orientation fits"),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cagepack_core::OrientationMode;

    fn optimizer(
        container: (f64, f64, f64, f64),
        product: (f64, f64, f64),
        mode: OrientationMode,
    ) -> GridOptimizer {
        let (cx, cy, cz, tol) = container;
        let (a, b, c) = product;
        GridOptimizer::new(
            Container::new(cx, cy, cz, tol).unwrap(),
            Product::new(a, b, c).unwrap(),
            Config::new().with_mode(mode),
        )
        .unwrap()
    }

    #[test]
    fn test_grid_count_exact_fit() {
        // 2.4 / 0.2 is 11.999999999999998 in f64; the count must still be 12.
        assert_eq!(grid_count(2.4, 0.2), 12);
        assert_eq!(grid_count(1.0, 1.0), 1);
        assert_eq!(grid_count(3.0, 1.0), 3);
        assert_eq!(grid_count(1.0, 1.1), 0);
    }

    #[test]
    fn test_cage_scenario_lock_vertical() {
        let opt = optimizer(
            (2.2, 1.3, 2.4, 0.13),
            (1.38, 1.88, 0.2),
            OrientationMode::LockVertical,
        );
        let result = opt.optimize();

        // First candidate (1.38, 1.88, 0.2) fails on depth: 1.88 > 1.43.
        assert_eq!(result.fits.len(), 2);
        assert_eq!(result.fits[0].total, 0);

        assert_eq!(result.best_count, 12);
        assert_eq!(result.best_counts.as_tuple(), (1, 1, 12));
        assert_eq!(
            result.best_orientation.unwrap().as_tuple(),
            (1.88, 1.38, 0.2)
        );
        // 1 * 1.38 - 1.3 = 0.08, scaled to centimeters.
        assert_relative_eq!(result.overhang, 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_nothing_fits() {
        let opt = optimizer((1.0, 1.0, 1.0, 0.0), (2.0, 2.0, 2.0), OrientationMode::Free);
        let result = opt.optimize();

        assert_eq!(result.best_count, 0);
        assert!(result.best_orientation.is_none());
        assert_eq!(result.best_counts.as_tuple(), (0, 0, 0));
        assert_eq!(result.overhang, 0.0);
        assert!(!result.is_feasible());
        assert!(result.fits.iter().all(|f| f.total == 0));
    }

    #[test]
    fn test_cube_in_cube() {
        let opt = optimizer((3.0, 3.0, 3.0, 0.0), (1.0, 1.0, 1.0), OrientationMode::Free);
        let result = opt.optimize();

        assert_eq!(result.best_count, 27);
        assert_eq!(result.fits.len(), 6);
        assert!(result.fits.iter().all(|f| f.total == 27));
        // Tie-break keeps the first candidate.
        assert_eq!(
            result.best_orientation.unwrap().as_tuple(),
            (1.0, 1.0, 1.0)
        );
    }

    #[test]
    fn test_extreme_ratio_saturates_total() {
        // Per-axis counts of 1e13 would overflow the total's multiplication;
        // it saturates instead of panicking or wrapping.
        let opt = optimizer(
            (1e8, 1e8, 1e8, 0.0),
            (1e-5, 1e-5, 1e-5),
            OrientationMode::Free,
        );
        let result = opt.optimize();

        assert!(result.is_feasible());
        assert_eq!(result.best_count, usize::MAX);
        assert!(result.fits.iter().all(|f| f.total == usize::MAX));
    }

    #[test]
    fn test_exact_boundary_fits() {
        let opt = optimizer((1.0, 1.0, 1.0, 0.0), (1.0, 1.0, 1.0), OrientationMode::Free);
        let result = opt.optimize();
        assert_eq!(result.best_count, 1);
    }

    #[test]
    fn test_tolerance_admits_depth_overhang() {
        // Both horizontal edges exceed the nominal depth of 1.0, so under
        // lock-vertical nothing fits until the tolerance widens the Y bound.
        let locked_without = optimizer(
            (2.0, 1.0, 2.0, 0.0),
            (1.1, 1.2, 1.0),
            OrientationMode::LockVertical,
        );
        let locked_with = optimizer(
            (2.0, 1.0, 2.0, 0.2),
            (1.1, 1.2, 1.0),
            OrientationMode::LockVertical,
        );
        assert_eq!(locked_without.optimize().best_count, 0);

        let fit = locked_with.optimize();
        assert_eq!(fit.best_count, 2);
        // Both candidates total 2; the tie keeps the first, (1.1, 1.2, 1.0).
        assert_eq!(fit.best_orientation.unwrap().as_tuple(), (1.1, 1.2, 1.0));
        // 1 * 1.2 - 1.0 = 0.2 beyond the nominal depth, as centimeters.
        assert_relative_eq!(fit.overhang, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_overhang_zero_when_within_nominal_depth() {
        let opt = optimizer((2.0, 2.0, 2.0, 0.5), (1.0, 1.0, 1.0), OrientationMode::Free);
        let result = opt.optimize();
        // 2 units of depth 1.0 stay inside the nominal 2.0.
        assert_eq!(result.best_counts.y, 2);
        assert_eq!(result.overhang, 0.0);
    }

    #[test]
    fn test_custom_display_scale() {
        let opt = GridOptimizer::new(
            Container::new(2.0, 1.0, 2.0, 0.2).unwrap(),
            Product::new(1.0, 1.2, 1.0).unwrap(),
            Config::new()
                .with_mode(OrientationMode::LockVertical)
                .with_display_scale(1.0),
        )
        .unwrap();

        // Unscaled overhang, rounded to one decimal.
        assert_relative_eq!(opt.optimize().overhang, 0.2, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = GridOptimizer::new(
            Container::new(1.0, 1.0, 1.0, 0.0).unwrap(),
            Product::new(1.0, 1.0, 1.0).unwrap(),
            Config::new().with_display_scale(-1.0),
        );
        assert!(result.is_err());
    }
}
