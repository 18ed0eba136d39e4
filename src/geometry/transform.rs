//! Homogeneous 2-D affine transforms restricted to quarter-turn rotations
//!
//! Matrices are stored row-major and act on column vectors `(x, y, 1)`.
//! Composition reads left to right: `a.then(&b)` applies `a` first.

use std::fmt;

/// Cosine/sine pairs for rotations by 0°, 90°, 180° and 270°
const QUADRANT_COS_SIN: [(f64, f64); 4] = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate (grows to the right)
    pub x: f64,
    /// Vertical coordinate (grows downward in raster space)
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 3x3 affine transform with an explicit homogeneous row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    coefficients: [f64; 9],
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    /// Build a transform from row-major coefficients
    pub const fn from_coefficients(coefficients: [f64; 9]) -> Self {
        Self { coefficients }
    }

    /// The neutral transform
    pub const fn identity() -> Self {
        Self::from_coefficients([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0])
    }

    /// Move points by `(dx, dy)`
    pub const fn translate(dx: f64, dy: f64) -> Self {
        Self::from_coefficients([1.0, 0.0, dx, 0.0, 1.0, dy, 0.0, 0.0, 1.0])
    }

    /// Scale points about the origin
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::from_coefficients([sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0])
    }

    /// Rotate by `quadrant` quarter turns, optionally about `pivot`
    ///
    /// The quadrant is reduced modulo 4 (negative values included), so
    /// `rotate_quadrant(k, p)` and `rotate_quadrant(k + 4, p)` are identical.
    /// Quadrant 1 maps `(x, y)` to `(-y, x)`, which is a clockwise quarter
    /// turn when the y axis points down as it does on a raster.
    pub fn rotate_quadrant(quadrant: i64, pivot: Option<Point>) -> Self {
        let (c, s) = usize::try_from(quadrant.rem_euclid(4))
            .ok()
            .and_then(|index| QUADRANT_COS_SIN.get(index).copied())
            .unwrap_or((1.0, 0.0));

        let rotation = Self::from_coefficients([c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0]);

        match pivot {
            Some(pivot) => Self::translate(-pivot.x, -pivot.y)
                .then(&rotation)
                .then(&Self::translate(pivot.x, pivot.y)),
            None => rotation,
        }
    }

    /// Transform that applies `self` first and `next` afterwards
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        let mut product = [0.0; 9];
        for (index, value) in product.iter_mut().enumerate() {
            let (row, col) = (index / 3, index % 3);
            *value = (0..3)
                .map(|k| next.at(row, k) * self.at(k, col))
                .sum::<f64>();
        }
        Self::from_coefficients(product)
    }

    /// Map a point through the transform
    pub fn apply(&self, point: Point) -> Point {
        Point {
            x: self
                .at(0, 0)
                .mul_add(point.x, self.at(0, 1).mul_add(point.y, self.at(0, 2))),
            y: self
                .at(1, 0)
                .mul_add(point.x, self.at(1, 1).mul_add(point.y, self.at(1, 2))),
        }
    }

    /// All nine coefficients in row-major order
    pub const fn coefficients(&self) -> [f64; 9] {
        self.coefficients
    }

    /// The first two rows `(a, b, c, d, e, f)` mapping `(x, y)` to
    /// `(a*x + b*y + c, d*x + e*y + f)`
    pub const fn affine_coefficients(&self) -> [f64; 6] {
        let [a, b, c, d, e, f, ..] = self.coefficients;
        [a, b, c, d, e, f]
    }

    fn at(&self, row: usize, col: usize) -> f64 {
        self.coefficients.get(row * 3 + col).copied().unwrap_or(0.0)
    }
}

/// Transform that applies `first` and then `second`
pub fn compose(first: &AffineTransform, second: &AffineTransform) -> AffineTransform {
    first.then(second)
}

impl fmt::Display for AffineTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.coefficients.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value:.2}")?;
        }
        write!(f, "]")
    }
}
