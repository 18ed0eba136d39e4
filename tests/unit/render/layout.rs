//! Tests for the fixed cell visitation order and per-cell turns

#[cfg(test)]
mod tests {

    use identicon::render::decoder::PatchSpec;
    use identicon::render::layout::{CELL_LAYOUT, CellRole};

    // Tests the exact visitation order of grid positions
    // Verified by swapping the right and left side entries
    #[test]
    fn test_cell_order() {
        let positions: Vec<(u32, u32, CellRole, u8)> = CELL_LAYOUT
            .iter()
            .map(|cell| (cell.column, cell.row, cell.role, cell.order))
            .collect();

        assert_eq!(
            positions,
            vec![
                (1, 1, CellRole::Center, 0),
                (1, 0, CellRole::Side, 0),
                (2, 1, CellRole::Side, 1),
                (1, 2, CellRole::Side, 2),
                (0, 1, CellRole::Side, 3),
                (0, 0, CellRole::Corner, 0),
                (2, 0, CellRole::Corner, 1),
                (2, 2, CellRole::Corner, 2),
                (0, 2, CellRole::Corner, 3),
            ]
        );
    }

    // Tests that every grid cell is visited exactly once
    #[test]
    fn test_layout_covers_grid() {
        let mut seen = [[false; 3]; 3];
        for cell in &CELL_LAYOUT {
            let slot = seen
                .get_mut(cell.row as usize)
                .and_then(|row| row.get_mut(cell.column as usize))
                .unwrap();
            assert!(!*slot, "cell visited twice");
            *slot = true;
        }
        assert!(seen.iter().flatten().all(|&visited| visited));
    }

    // Tests turn offsets for each role
    // Verified by dropping the extra quarter turn for outer cells
    #[test]
    fn test_turns() {
        let spec = PatchSpec {
            patch: 3,
            invert: false,
            rotation: 2,
        };

        let turns: Vec<i64> = CELL_LAYOUT.iter().map(|cell| cell.turn(&spec)).collect();
        assert_eq!(turns, vec![2, 3, 4, 5, 6, 3, 4, 5, 6]);
    }
}
