//! Identicon rendering pipeline
//!
//! A code flows through the decoder, the fixed cell layout and the
//! compositor to become a raster.

/// Canvas ownership and per-cell painting
pub mod compositor;
/// Bit-field decoding of codes into patch placements and colors
pub mod decoder;
/// The fixed 3x3 cell arrangement and its visitation order
pub mod layout;
/// Renderer capability and the top-level entry point
pub mod renderer;

pub use decoder::{DecodedIcon, PatchSpec};
pub use renderer::{IdenticonRenderer, PatchSetRenderer, decode, render_identicon};
