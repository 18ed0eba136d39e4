//! Geometry for patch placement
//!
//! This module contains:
//! - Quarter-turn affine transforms
//! - The constant patch outline table
//! - Aliased polygon rasterization into coverage masks

/// Patch outlines and patch sets
pub mod patches;
/// Polygon fill and outline rasterization
pub mod raster;
/// Homogeneous 2-D affine transforms
pub mod transform;

pub use transform::{AffineTransform, Point};
