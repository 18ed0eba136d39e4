//! Fixed 3x3 cell arrangement
//!
//! The visitation order matters: a cell's position within its role decides
//! the extra quarter turns it receives.

use crate::render::decoder::{DecodedIcon, PatchSpec};

/// Which decoded family a cell draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    /// The middle cell
    Center,
    /// Top, right, bottom and left edge cells
    Side,
    /// The four corner cells
    Corner,
}

/// A cell position on the 3x3 grid together with its role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Grid column (0..=2)
    pub column: u32,
    /// Grid row (0..=2)
    pub row: u32,
    /// Decoded family for this cell
    pub role: CellRole,
    /// Position of this cell among the cells sharing its role
    pub order: u8,
}

impl GridCell {
    const fn new(column: u32, row: u32, role: CellRole, order: u8) -> Self {
        Self {
            column,
            row,
            role,
            order,
        }
    }

    /// Decoded placement this cell draws with
    pub const fn spec<'a>(&self, icon: &'a DecodedIcon) -> &'a PatchSpec {
        match self.role {
            CellRole::Center => &icon.center,
            CellRole::Side => &icon.side,
            CellRole::Corner => &icon.corner,
        }
    }

    /// Quarter turns applied to this cell's patch
    ///
    /// The center keeps its decoded rotation; sides and corners add one turn
    /// plus their order, so neighbouring cells spin around the grid.
    pub fn turn(&self, spec: &PatchSpec) -> i64 {
        match self.role {
            CellRole::Center => i64::from(spec.rotation),
            CellRole::Side | CellRole::Corner => {
                i64::from(spec.rotation) + 1 + i64::from(self.order)
            }
        }
    }
}

/// Drawing order: center, sides clockwise from the top, corners clockwise
/// from the top-left
pub const CELL_LAYOUT: [GridCell; 9] = [
    GridCell::new(1, 1, CellRole::Center, 0),
    GridCell::new(1, 0, CellRole::Side, 0),
    GridCell::new(2, 1, CellRole::Side, 1),
    GridCell::new(1, 2, CellRole::Side, 2),
    GridCell::new(0, 1, CellRole::Side, 3),
    GridCell::new(0, 0, CellRole::Corner, 0),
    GridCell::new(2, 0, CellRole::Corner, 1),
    GridCell::new(2, 2, CellRole::Corner, 2),
    GridCell::new(0, 2, CellRole::Corner, 3),
];
