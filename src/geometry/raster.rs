//! Aliased polygon rasterization into per-cell coverage masks
//!
//! Vertices are snapped to a lattice of [`SUBPIXELS`] steps per pixel and
//! every coverage test after that is exact integer arithmetic. A pixel is
//! covered when its center lies strictly inside the polygon (even-odd), or
//! when an edge passes through the pixel's open interior. Both tests depend
//! only on the shape, so a polygon turned a quarter about the mask center
//! covers the same pixels turned the same way.

use std::cmp::Ordering;

use ndarray::Array2;
use num_traits::ToPrimitive;

use crate::geometry::transform::Point;

/// Lattice steps per pixel that polygon vertices are snapped to
pub const SUBPIXELS: i32 = 4;

const STEP: i64 = SUBPIXELS as i64;
const HALF_STEP: i64 = STEP / 2;

/// Boolean coverage of a square block of pixels, indexed `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageMask {
    cells: Array2<bool>,
}

impl CoverageMask {
    /// Create an empty mask
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), false),
        }
    }

    /// Fill and outline a closed polygon given in mask-local coordinates
    pub fn rasterize_polygon(outline: &[Point], width: usize, height: usize) -> Self {
        let mut mask = Self::new(width, height);
        mask.fill_polygon(outline);
        mask.stroke_outline(outline);
        mask
    }

    /// Mask width in pixels
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Mask height in pixels
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Whether the pixel at `(x, y)` is covered
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.cells.get([y, x]).copied().unwrap_or(false)
    }

    /// Number of covered pixels
    pub fn covered_count(&self) -> usize {
        self.cells.iter().filter(|&&covered| covered).count()
    }

    /// Covered pixel coordinates as `(x, y)` in row-major order
    pub fn covered(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &covered)| covered)
            .map(|((y, x), _)| (x, y))
    }

    /// Cover every pixel whose center lies strictly inside the closed outline
    ///
    /// The outline must repeat its first vertex at the end. Crossings use a
    /// half-open test on y so shared vertices are counted once; centers lying
    /// exactly on an edge are left to [`Self::stroke_outline`].
    pub fn fill_polygon(&mut self, outline: &[Point]) {
        let Some(vertices) = snap_outline(outline) else {
            return;
        };
        let limit = self.width().to_i64().unwrap_or(i64::MAX);
        let mut crossings = Vec::with_capacity(vertices.len());

        for row in 0..self.height() {
            let Some(center) = row.to_i64().map(pixel_center) else {
                break;
            };
            crossings.clear();
            for edge in vertices.windows(2) {
                let [a, b] = edge else { continue };
                if (a.y <= center && center < b.y) || (b.y <= center && center < a.y) {
                    crossings.push(Crossing::new(*a, *b, center));
                }
            }

            crossings.sort_by(Crossing::compare);
            for span in crossings.chunks_exact(2) {
                let [start, end] = span else { continue };
                let first = start.first_center_after().clamp(0, limit);
                let last = end.first_center_from().clamp(first, limit);
                for col in (first..last).filter_map(|col| col.to_usize()) {
                    self.set(col, row);
                }
            }
        }
    }

    /// Cover every pixel whose open interior an outline edge passes through
    ///
    /// Edges running along pixel boundaries, or only touching a pixel corner,
    /// add nothing.
    pub fn stroke_outline(&mut self, outline: &[Point]) {
        let Some(vertices) = snap_outline(outline) else {
            return;
        };
        let (Some(last_col), Some(last_row)) =
            (last_index(self.width()), last_index(self.height()))
        else {
            return;
        };

        for edge in vertices.windows(2) {
            let [a, b] = edge else { continue };
            let column_span =
                pixel_index(a.x.min(b.x)).max(0)..=pixel_index(a.x.max(b.x)).min(last_col);
            let row_span =
                pixel_index(a.y.min(b.y)).max(0)..=pixel_index(a.y.max(b.y)).min(last_row);

            for row in row_span {
                for col in column_span.clone() {
                    if !edge_enters_pixel(*a, *b, col, row) {
                        continue;
                    }
                    if let (Some(x), Some(y)) = (col.to_usize(), row.to_usize()) {
                        self.set(x, y);
                    }
                }
            }
        }
    }

    fn set(&mut self, x: usize, y: usize) {
        if let Some(cell) = self.cells.get_mut([y, x]) {
            *cell = true;
        }
    }
}

/// Vertex on the subpixel lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Vertex {
    x: i64,
    y: i64,
}

/// Where an edge crosses a row of pixel centers, as the fraction `num / den`
#[derive(Debug, Clone, Copy)]
struct Crossing {
    num: i64,
    den: i64,
}

impl Crossing {
    // `den` is kept positive so floors and comparisons need no sign cases
    const fn new(a: Vertex, b: Vertex, y: i64) -> Self {
        let (num, den) = (a.x * (b.y - a.y) + (y - a.y) * (b.x - a.x), b.y - a.y);
        if den < 0 {
            Self {
                num: -num,
                den: -den,
            }
        } else {
            Self { num, den }
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        (self.num * other.den).cmp(&(other.num * self.den))
    }

    // Smallest column whose center lies strictly right of the crossing
    const fn first_center_after(&self) -> i64 {
        (self.num - HALF_STEP * self.den).div_euclid(STEP * self.den) + 1
    }

    // Smallest column whose center lies at or right of the crossing
    const fn first_center_from(&self) -> i64 {
        -(HALF_STEP * self.den - self.num).div_euclid(STEP * self.den)
    }
}

fn snap_outline(outline: &[Point]) -> Option<Vec<Vertex>> {
    outline
        .iter()
        .map(|point| {
            Some(Vertex {
                x: snap(point.x)?,
                y: snap(point.y)?,
            })
        })
        .collect()
}

fn snap(coordinate: f64) -> Option<i64> {
    (coordinate * f64::from(SUBPIXELS)).round().to_i64()
}

const fn pixel_center(index: i64) -> i64 {
    index * STEP + HALF_STEP
}

const fn pixel_index(coordinate: i64) -> i64 {
    coordinate.div_euclid(STEP)
}

fn last_index(length: usize) -> Option<i64> {
    length.checked_sub(1).and_then(|last| last.to_i64())
}

// Separating-axis test of a closed segment against an open pixel square
fn edge_enters_pixel(a: Vertex, b: Vertex, col: i64, row: i64) -> bool {
    let (left, top) = (col * STEP, row * STEP);
    let (right, bottom) = (left + STEP, top + STEP);
    if a.x.max(b.x) <= left
        || a.x.min(b.x) >= right
        || a.y.max(b.y) <= top
        || a.y.min(b.y) >= bottom
    {
        return false;
    }

    let side = |x: i64, y: i64| (b.x - a.x) * (y - a.y) - (b.y - a.y) * (x - a.x);
    let corners = [
        side(left, top),
        side(right, top),
        side(right, bottom),
        side(left, bottom),
    ];
    corners.iter().any(|&value| value < 0) && corners.iter().any(|&value| value > 0)
}
