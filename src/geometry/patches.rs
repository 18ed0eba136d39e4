//! Patch outlines drawn inside a single grid cell
//!
//! Outlines are authored on a 4x4 integer grid and normalized to the unit
//! square on demand. The table is a compile-time constant and never mutated.

use crate::geometry::transform::Point;

/// Resolution of the authoring grid for patch outlines
pub const PATCH_GRID: f64 = 4.0;

/// Closed outline of the full unit square
pub const UNIT_SQUARE: [Point; 5] = [
    Point::new(0.0, 0.0),
    Point::new(1.0, 0.0),
    Point::new(1.0, 1.0),
    Point::new(0.0, 1.0),
    Point::new(0.0, 0.0),
];

/// One entry of a patch table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patch {
    /// Polygon vertices on the 4x4 authoring grid, not yet closed
    Polygon(&'static [[u8; 2]]),
    /// No polygon; the cell becomes a solid square with inverted colors
    Empty,
}

impl Patch {
    /// Normalized outline with the first vertex repeated at the end
    ///
    /// Returns `None` for [`Patch::Empty`].
    pub fn closed_outline(&self) -> Option<Vec<Point>> {
        match self {
            Self::Polygon(vertices) => {
                let mut outline: Vec<Point> = vertices
                    .iter()
                    .map(|&[x, y]| Point::new(f64::from(x) / PATCH_GRID, f64::from(y) / PATCH_GRID))
                    .collect();
                if let Some(&first) = outline.first() {
                    outline.push(first);
                }
                Some(outline)
            }
            Self::Empty => None,
        }
    }
}

/// A patch that has been resolved for drawing
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPatch {
    /// Closed outline in unit-square coordinates
    pub outline: Vec<Point>,
    /// Whether foreground and background must be swapped for this cell
    pub invert: bool,
}

/// An immutable catalog of patches and the subset allowed in the center cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchSet {
    /// All patches, addressed by patch type
    pub patches: &'static [Patch],
    /// Patch types eligible for the center cell
    pub center_patches: &'static [usize],
}

impl PatchSet {
    /// Look up a patch by type
    pub fn get(&self, index: usize) -> Option<&Patch> {
        self.patches.get(index)
    }

    /// Number of patches in the set
    pub const fn len(&self) -> usize {
        self.patches.len()
    }

    /// Whether the set holds no patches
    pub const fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Patch type used for a center selector, wrapping around the center subset
    pub fn center_patch(&self, selector: usize) -> usize {
        if self.center_patches.is_empty() {
            return 0;
        }
        self.center_patches
            .get(selector % self.center_patches.len())
            .copied()
            .unwrap_or(0)
    }

    /// Outline and effective inversion for a patch type
    ///
    /// Empty entries (and types outside the table) become the full unit
    /// square with the inversion flag negated.
    pub fn resolve(&self, index: usize, invert: bool) -> ResolvedPatch {
        match self.get(index).and_then(Patch::closed_outline) {
            Some(outline) => ResolvedPatch { outline, invert },
            None => ResolvedPatch {
                outline: UNIT_SQUARE.to_vec(),
                invert: !invert,
            },
        }
    }
}

/// Patch type that renders as an inverted solid square
pub const EMPTY_PATCH: usize = 15;

/// The sixteen reference patches
pub const REFERENCE_PATCHES: [Patch; 16] = [
    Patch::Polygon(&[[0, 0], [4, 0], [4, 4], [0, 4]]),
    Patch::Polygon(&[[0, 0], [4, 0], [0, 4]]),
    Patch::Polygon(&[[2, 0], [4, 4], [0, 4]]),
    Patch::Polygon(&[[0, 0], [2, 0], [2, 4], [0, 4]]),
    Patch::Polygon(&[[2, 0], [4, 2], [2, 4], [0, 2]]),
    Patch::Polygon(&[[0, 0], [4, 2], [4, 4], [2, 4]]),
    Patch::Polygon(&[[2, 0], [4, 4], [2, 4], [3, 2], [1, 2], [2, 4], [0, 4]]),
    Patch::Polygon(&[[0, 0], [4, 2], [2, 4]]),
    Patch::Polygon(&[[1, 1], [3, 1], [3, 3], [1, 3]]),
    Patch::Polygon(&[[2, 0], [4, 0], [0, 4], [0, 2], [2, 2]]),
    Patch::Polygon(&[[0, 0], [2, 0], [2, 2], [0, 2]]),
    Patch::Polygon(&[[0, 2], [4, 2], [2, 4]]),
    Patch::Polygon(&[[2, 2], [4, 4], [0, 4]]),
    Patch::Polygon(&[[2, 0], [2, 2], [0, 2]]),
    Patch::Polygon(&[[0, 0], [2, 0], [0, 2]]),
    Patch::Empty,
];

/// Reference patch types allowed in the center cell
pub const REFERENCE_CENTER_PATCHES: [usize; 4] = [0, 4, 8, EMPTY_PATCH];

/// The reference patch set
pub const REFERENCE_PATCH_SET: PatchSet = PatchSet {
    patches: &REFERENCE_PATCHES,
    center_patches: &REFERENCE_CENTER_PATCHES,
};
