//! # Cagepack Core
//!
//! Shared types for the cagepack single-product packing optimizer.
//!
//! This crate provides the foundational types shared between the solver crate
//! and any host application consuming its results.
//!
//! ## Core Components
//!
//! - **Dimension model**: [`Size3D`], the immutable 3-axis size shared by
//!   containers, products, and orientations
//! - **Configuration**: [`Config`] and [`OrientationMode`]
//! - **Results**: [`OptimizeResult`], [`OrientationFit`], [`AxisCounts`]
//! - **Errors**: [`Error`] and the crate-wide [`Result`] alias
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod dimension;
pub mod error;
pub mod result;

// Re-exports
pub use config::{Config, OrientationMode};
pub use dimension::Size3D;
pub use error::{Error, Result};
pub use result::{AxisCounts, OptimizeResult, OrientationFit};
