//! # Cagepack Grid
//!
//! Uniform-grid orientation solver for the cagepack optimizer.
//!
//! This crate provides the container and product models and the optimizer
//! that enumerates axis-permutation orientations and selects the one that
//! fits the most whole units.

pub mod container;
pub mod optimizer;
pub mod product;

// Re-exports
pub use container::Container;
pub use optimizer::{GridOptimizer, FIT_EPS};
pub use product::Product;
pub use cagepack_core::{
    AxisCounts, Config, Error, OptimizeResult, OrientationFit, OrientationMode, Result, Size3D,
};
