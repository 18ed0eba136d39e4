//! Per-cell compositing onto the identicon canvas

use image::{Rgb, RgbImage};

use crate::geometry::patches::PatchSet;
use crate::geometry::raster::CoverageMask;
use crate::geometry::transform::{AffineTransform, Point};
use crate::render::decoder::DecodedIcon;
use crate::render::layout::{CELL_LAYOUT, GridCell};

/// Number of cells along each side of the grid
pub const GRID_CELLS: u32 = 3;

/// Rotation pivot for patches, the middle of the unit square
pub const PATCH_PIVOT: Point = Point::new(0.5, 0.5);

/// Canvas owned by a single render call
///
/// Starts black; every pixel is overwritten once all nine cells are drawn.
pub struct Canvas {
    image: RgbImage,
    cell_size: u32,
}

impl Canvas {
    /// Allocate a black canvas of `GRID_CELLS * cell_size` pixels square
    pub fn new(cell_size: u32) -> Self {
        let side = cell_size.saturating_mul(GRID_CELLS);
        Self {
            image: RgbImage::from_pixel(side, side, Rgb([0, 0, 0])),
            cell_size,
        }
    }

    /// Pixels per cell side
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Paint the whole rectangle of a cell
    pub fn fill_cell(&mut self, cell: &GridCell, color: Rgb<u8>) {
        let (left, top) = self.cell_origin(cell);
        for y in top..top.saturating_add(self.cell_size) {
            for x in left..left.saturating_add(self.cell_size) {
                if x < self.image.width() && y < self.image.height() {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }

    /// Paint the covered pixels of a cell-local mask
    pub fn paint_mask(&mut self, cell: &GridCell, mask: &CoverageMask, color: Rgb<u8>) {
        let (left, top) = self.cell_origin(cell);
        for (x, y) in mask.covered() {
            let (Ok(dx), Ok(dy)) = (u32::try_from(x), u32::try_from(y)) else {
                continue;
            };
            let (px, py) = (left.saturating_add(dx), top.saturating_add(dy));
            if px < self.image.width() && py < self.image.height() {
                self.image.put_pixel(px, py, color);
            }
        }
    }

    /// Hand the finished raster to the caller
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    fn cell_origin(&self, cell: &GridCell) -> (u32, u32) {
        (
            cell.column.saturating_mul(self.cell_size),
            cell.row.saturating_mul(self.cell_size),
        )
    }
}

/// Transform taking unit-square patch coordinates to canvas pixels
///
/// Rotates about [`PATCH_PIVOT`], moves to the cell's grid position, then
/// scales grid units to pixels.
pub fn cell_transform(cell: &GridCell, turn: i64, cell_size: u32) -> AffineTransform {
    let size = f64::from(cell_size);
    AffineTransform::rotate_quadrant(turn, Some(PATCH_PIVOT))
        .then(&AffineTransform::translate(
            f64::from(cell.column),
            f64::from(cell.row),
        ))
        .then(&AffineTransform::scale(size, size))
}

/// Draw one cell: background square first, then the rotated patch
pub fn draw_patch(
    canvas: &mut Canvas,
    patch_set: &PatchSet,
    icon: &DecodedIcon,
    cell: &GridCell,
) {
    let spec = cell.spec(icon);
    let resolved = patch_set.resolve(spec.patch, spec.invert);
    let (foreground, background) = if resolved.invert {
        (icon.background, icon.foreground)
    } else {
        (icon.foreground, icon.background)
    };

    let cell_size = canvas.cell_size();
    let transform = cell_transform(cell, cell.turn(spec), cell_size);
    let origin = Point::new(
        f64::from(cell.column) * f64::from(cell_size),
        f64::from(cell.row) * f64::from(cell_size),
    );
    let local: Vec<Point> = resolved
        .outline
        .iter()
        .map(|&point| {
            let mapped = transform.apply(point);
            Point::new(mapped.x - origin.x, mapped.y - origin.y)
        })
        .collect();

    let extent = usize::try_from(cell_size).unwrap_or(0);
    let mask = CoverageMask::rasterize_polygon(&local, extent, extent);

    canvas.fill_cell(cell, background);
    canvas.paint_mask(cell, &mask, foreground);
}

/// Composite all nine cells of a decoded icon
pub fn composite(icon: &DecodedIcon, patch_set: &PatchSet, cell_size: u32) -> RgbImage {
    let mut canvas = Canvas::new(cell_size);
    for cell in &CELL_LAYOUT {
        draw_patch(&mut canvas, patch_set, icon, cell);
    }
    canvas.into_image()
}
