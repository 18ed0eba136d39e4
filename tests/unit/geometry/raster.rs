//! Tests for scanline polygon filling and outline tracing

#[cfg(test)]
mod tests {

    use identicon::geometry::patches::UNIT_SQUARE;
    use identicon::geometry::raster::CoverageMask;
    use identicon::geometry::transform::Point;

    fn scaled(outline: &[Point], factor: f64) -> Vec<Point> {
        outline
            .iter()
            .map(|p| Point::new(p.x * factor, p.y * factor))
            .collect()
    }

    // Tests that a full square covers every pixel of the mask
    // Verified by sampling pixel corners instead of centers
    #[test]
    fn test_full_square_covers_mask() {
        let outline = scaled(&UNIT_SQUARE, 5.0);
        let mut mask = CoverageMask::new(5, 5);
        mask.fill_polygon(&outline);

        assert_eq!(mask.covered_count(), 25);
        assert_eq!(mask.width(), 5);
        assert_eq!(mask.height(), 5);
    }

    // Tests fill coverage of a right triangle against pixel-center sampling
    #[test]
    fn test_triangle_fill_counts() {
        let outline = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 4.0),
            Point::new(0.0, 0.0),
        ];
        let mut mask = CoverageMask::new(4, 4);
        mask.fill_polygon(&outline);

        // Row centers at 0.5, 1.5, 2.5, 3.5 cut the hypotenuse at 3.5, 2.5, 1.5, 0.5
        // and a center lying exactly on the edge is outside
        assert_eq!(mask.covered_count(), 3 + 2 + 1);
        assert!(mask.contains(2, 0));
        assert!(mask.contains(0, 2));
        assert!(!mask.contains(3, 0));
        assert!(!mask.contains(0, 3));
    }

    // Tests that outline tracing adds the pixels the hypotenuse cuts through
    // Verified by removing stroke_outline from rasterize_polygon
    #[test]
    fn test_outline_completes_hypotenuse() {
        let outline = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 4.0),
            Point::new(0.0, 0.0),
        ];
        let mask = CoverageMask::rasterize_polygon(&outline, 4, 4);

        // The diagonal runs corner to corner through (3, 0), (2, 1), (1, 2), (0, 3)
        assert_eq!(mask.covered_count(), 10);
        assert!(mask.contains(3, 0));
        assert!(mask.contains(0, 3));
        assert!(mask.contains(2, 1));
        assert!(!mask.contains(3, 1));
        assert!(!mask.contains(3, 3));
    }

    // Tests that edges lying on pixel boundaries add no coverage
    // Verified by treating pixel squares as closed in the edge test
    #[test]
    fn test_boundary_edges_add_nothing() {
        let outline = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 4.0),
            Point::new(0.0, 4.0),
            Point::new(0.0, 0.0),
        ];
        let mut mask = CoverageMask::new(4, 4);
        mask.stroke_outline(&outline);
        assert_eq!(mask.covered_count(), 0);

        let filled = CoverageMask::rasterize_polygon(&outline, 4, 4);
        assert_eq!(filled.covered_count(), 8);
        assert!(filled.contains(1, 3));
        assert!(!filled.contains(2, 0));
    }

    // Tests that edges running outside the mask are cut off rather than wrapped
    #[test]
    fn test_outline_is_clipped_to_mask() {
        let outline = vec![
            Point::new(-3.0, 1.5),
            Point::new(9.0, 1.5),
            Point::new(-3.0, 1.5),
        ];
        let mut mask = CoverageMask::new(3, 3);
        mask.stroke_outline(&outline);

        assert_eq!(mask.covered_count(), 3);
        assert_eq!(
            mask.covered().collect::<Vec<_>>(),
            vec![(0, 1), (1, 1), (2, 1)]
        );
    }

    // Tests that a quarter turn of a polygon about the mask center turns its
    // coverage the same way
    // Verified by sampling the fill with a half-open span test
    #[test]
    fn test_coverage_follows_quarter_turns() {
        let size: u32 = 7;
        let extent = f64::from(size);
        let kite = [
            Point::new(0.0, 0.0),
            Point::new(extent, extent * 0.5),
            Point::new(extent, extent),
            Point::new(extent * 0.5, extent),
            Point::new(0.0, 0.0),
        ];
        let turned: Vec<Point> = kite
            .iter()
            .map(|p| Point::new(extent - p.y, p.x))
            .collect();

        let n = usize::try_from(size).unwrap();
        let original = CoverageMask::rasterize_polygon(&kite, n, n);
        let rotated = CoverageMask::rasterize_polygon(&turned, n, n);

        assert!(original.covered_count() > 0);
        assert_eq!(original.covered_count(), rotated.covered_count());
        for (x, y) in original.covered() {
            assert!(rotated.contains(n - 1 - y, x), "pixel ({x}, {y}) lost its turn");
        }
    }

    // Tests that an empty mask ignores drawing
    #[test]
    fn test_zero_sized_mask() {
        let outline = scaled(&UNIT_SQUARE, 2.0);
        let mask = CoverageMask::rasterize_polygon(&outline, 0, 0);
        assert_eq!(mask.covered_count(), 0);
    }
}
