//! Renderer capability and the top-level render entry point

use image::RgbImage;

use crate::geometry::patches::{PatchSet, REFERENCE_PATCH_SET};
use crate::io::configuration::MAX_CELL_SIZE;
use crate::io::error::{Result, invalid_argument};
use crate::render::compositor::composite;
use crate::render::decoder::{DecodedIcon, decode_with};

/// A way of turning codes into identicons
///
/// Implementors supply a patch set and a decoding; compositing is shared.
pub trait IdenticonRenderer: Send + Sync {
    /// Patch table addressed by decoded patch types
    fn patch_set(&self) -> &PatchSet;

    /// Derive every drawing decision from a code
    fn decode(&self, code: u64) -> DecodedIcon;

    /// Render a code onto a canvas of `3 * cell_size` pixels square
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `cell_size` is rejected by
    /// [`validate_cell_size`]
    fn render(&self, code: u64, cell_size: u32) -> Result<RgbImage> {
        let cell_size = validate_cell_size(cell_size)?;
        Ok(composite(&self.decode(code), self.patch_set(), cell_size))
    }
}

/// Renderer backed by a patch set and the standard bit layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchSetRenderer {
    patch_set: PatchSet,
}

impl PatchSetRenderer {
    /// Renderer over a custom patch set
    pub const fn new(patch_set: PatchSet) -> Self {
        Self { patch_set }
    }
}

impl Default for PatchSetRenderer {
    fn default() -> Self {
        Self::new(REFERENCE_PATCH_SET)
    }
}

impl IdenticonRenderer for PatchSetRenderer {
    fn patch_set(&self) -> &PatchSet {
        &self.patch_set
    }

    fn decode(&self, code: u64) -> DecodedIcon {
        decode_with(code, &self.patch_set)
    }
}

/// Decode a code with the reference patch set
pub fn decode(code: u64) -> DecodedIcon {
    decode_with(code, &REFERENCE_PATCH_SET)
}

/// Check a cell size before any allocation happens
///
/// [`MAX_CELL_SIZE`] bounds the canvas allocation for every renderer.
///
/// # Errors
///
/// Returns `InvalidArgument` when the size is zero or above [`MAX_CELL_SIZE`]
pub fn validate_cell_size(cell_size: u32) -> Result<u32> {
    if cell_size == 0 {
        return Err(invalid_argument(
            "cell_size",
            &cell_size,
            &"must be positive",
        ));
    }
    if cell_size > MAX_CELL_SIZE {
        return Err(invalid_argument(
            "cell_size",
            &cell_size,
            &format!("must not exceed {MAX_CELL_SIZE}"),
        ));
    }
    Ok(cell_size)
}

/// Render an identicon, using the reference renderer when none is given
///
/// # Errors
///
/// Returns `InvalidArgument` when `cell_size` is rejected by
/// [`validate_cell_size`]
pub fn render_identicon(
    code: u64,
    cell_size: u32,
    renderer: Option<&dyn IdenticonRenderer>,
) -> Result<RgbImage> {
    match renderer {
        Some(renderer) => renderer.render(code, cell_size),
        None => PatchSetRenderer::default().render(code, cell_size),
    }
}
