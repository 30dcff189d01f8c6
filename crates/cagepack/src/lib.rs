//! # Cagepack
//!
//! Single-product uniform-grid packing optimizer.
//!
//! Given one rectangular product and one rectangular container (e.g. a cargo
//! cage), cagepack finds the axis-aligned orientation that fits the most
//! whole copies, honoring an optional extra-depth tolerance and an optional
//! lock-vertical constraint.
//!
//! ## Quick Start
//!
//! ```rust
//! use cagepack::{Config, Container, GridOptimizer, OrientationMode, Product};
//!
//! # fn main() -> cagepack::core::Result<()> {
//! let container = Container::new(2.2, 1.3, 2.4, 0.13)?;
//! let product = Product::new(1.38, 1.88, 0.2)?;
//!
//! let optimizer = GridOptimizer::new(
//!     container,
//!     product,
//!     Config::new().with_mode(OrientationMode::LockVertical),
//! )?;
//!
//! let result = optimizer.optimize();
//! assert_eq!(result.best_count, 12);
//! println!("{}", result.trace_log());
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support for inputs and results.

/// Shared types.
pub use cagepack_core as core;

/// Uniform-grid solver.
pub use cagepack_grid as grid;

// Re-export commonly used types at root level
pub use cagepack_core::{
    AxisCounts, Config, Error, OptimizeResult, OrientationFit, OrientationMode, Result, Size3D,
};
pub use cagepack_grid::{Container, GridOptimizer, Product};
