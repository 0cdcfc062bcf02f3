//! Gray-code layout of map cells.
//!
//! Minterms are first placed row by row in binary counting order. Two fixed swaps then
//! turn the row and column orders into Gray order (`00, 01, 11, 10`):
//!
//! - with more than 2 variables, columns 2 and 3 are exchanged in every row;
//! - with more than 3 variables, rows 2 and 3 are exchanged.
//!
//! After this, any two cells that touch on the torus hold minterms whose binary labels
//! differ in exactly one bit. The transform is table-driven and only valid up to 4
//! variables.

use crate::error::Result;
use crate::grid::Grid;
use crate::types::{Cell, Shape};

/// Applies the Gray reordering to a grid laid out in binary counting order.
pub fn grayify<T>(grid: &mut Grid<T>, num_vars: usize) {
    if num_vars > 2 {
        grid.swap_cols(2, 3);
    }
    if num_vars > 3 {
        grid.swap_rows(2, 3);
    }
}

/// Cell holding `minterm` after the Gray reordering.
pub fn cell_of(minterm: usize, shape: Shape, num_vars: usize) -> Cell {
    let Cell { mut row, mut col } = shape.cell(minterm);
    if num_vars > 2 {
        col = swap_2_3(col);
    }
    if num_vars > 3 {
        row = swap_2_3(row);
    }
    Cell::new(row, col)
}

fn swap_2_3(i: usize) -> usize {
    match i {
        2 => 3,
        3 => 2,
        _ => i,
    }
}

/// Builds the label grid: each cell holds the `num_vars`-bit binary label of the minterm
/// placed there, in the same layout as the value grid.
pub fn label_grid(shape: Shape, num_vars: usize) -> Result<Grid<u8>> {
    let labels = (0..shape.len()).map(|i| i as u8).collect();
    let mut grid = Grid::from_row_major(labels, shape)?;
    grayify(&mut grid, num_vars);
    Ok(grid)
}

/// Value of the bit at `position` (most significant first) of an `num_vars`-bit label.
pub fn label_bit(label: u8, position: usize, num_vars: usize) -> bool {
    debug_assert!(position < num_vars);
    (label >> (num_vars - 1 - position)) & 1 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn labels(num_vars: usize) -> Grid<u8> {
        let shape = Shape::for_variables(num_vars).unwrap();
        label_grid(shape, num_vars).unwrap()
    }

    #[test]
    fn test_two_variables_unchanged() {
        let grid = labels(2);
        assert_eq!(*grid.get(0, 0), 0);
        assert_eq!(*grid.get(0, 1), 1);
        assert_eq!(*grid.get(1, 0), 2);
        assert_eq!(*grid.get(1, 1), 3);
    }

    #[test]
    fn test_four_variable_layout() {
        let grid = labels(4);
        let rows: Vec<Vec<u8>> = (0..4).map(|r| (0..4).map(|c| *grid.get(r, c)).collect()).collect();
        assert_eq!(
            rows,
            vec![
                vec![0, 1, 3, 2],
                vec![4, 5, 7, 6],
                vec![12, 13, 15, 14],
                vec![8, 9, 11, 10],
            ]
        );
    }

    #[test]
    fn test_neighbors_differ_in_one_bit() {
        for num_vars in 2..=4 {
            let grid = labels(num_vars);
            let shape = grid.shape();
            for cell in shape.cells() {
                let here = *grid.get(cell.row, cell.col);
                let down = *grid.get(cell.row + 1, cell.col);
                let right = *grid.get(cell.row, cell.col + 1);
                assert_eq!((here ^ down).count_ones(), 1, "n={} cell={}", num_vars, cell);
                assert_eq!((here ^ right).count_ones(), 1, "n={} cell={}", num_vars, cell);
            }
        }
    }

    #[test]
    fn test_cell_of_matches_labels() {
        for num_vars in 2..=4 {
            let grid = labels(num_vars);
            let shape = grid.shape();
            for minterm in 0..shape.len() {
                let cell = cell_of(minterm, shape, num_vars);
                assert_eq!(*grid.get(cell.row, cell.col) as usize, minterm);
            }
        }
    }

    #[test]
    fn test_label_bit() {
        // 0b1010 with four variables: A=1, B=0, C=1, D=0.
        assert!(label_bit(0b1010, 0, 4));
        assert!(!label_bit(0b1010, 1, 4));
        assert!(label_bit(0b1010, 2, 4));
        assert!(!label_bit(0b1010, 3, 4));
        // 0b10 with two variables: A=1, B=0.
        assert!(label_bit(0b10, 0, 2));
        assert!(!label_bit(0b10, 1, 2));
    }
}
