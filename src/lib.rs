//! Deterministic patch-quilt identicons derived from integer codes
//!
//! A code is unpacked into a center patch, a corner patch and a side patch
//! with inversion flags, base rotations and a foreground color. The patches
//! are rotated about their cell centers and quilted onto a 3x3 grid, so equal
//! codes always produce equal images.

#![forbid(unsafe_code)]

/// Quarter-turn transforms, patch outlines and polygon rasterization
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Code decoding, cell layout and compositing
pub mod render;

pub use io::error::{IdenticonError, Result};
pub use render::{DecodedIcon, IdenticonRenderer, PatchSetRenderer, decode, render_identicon};
