//! Tests for configuration constants consistency

#[cfg(test)]
mod tests {

    use identicon::io::configuration::{
        DEFAULT_CELL_SIZE, FILE_NAME_HEX_WIDTH, MAX_CELL_SIZE, OUTPUT_EXTENSION,
    };

    // Tests that the default cell size is accepted by the size limit
    #[test]
    fn test_default_cell_size_within_limit() {
        assert!(DEFAULT_CELL_SIZE > 0);
        assert!(DEFAULT_CELL_SIZE <= MAX_CELL_SIZE);
    }

    // Tests that the largest canvas side still fits in u32
    #[test]
    fn test_max_canvas_fits() {
        assert!(MAX_CELL_SIZE.checked_mul(3).is_some());
    }

    // Tests file naming settings
    #[test]
    fn test_output_naming() {
        assert_eq!(OUTPUT_EXTENSION, "png");
        assert_eq!(FILE_NAME_HEX_WIDTH, 8);
    }
}
