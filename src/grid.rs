//! Fixed-size grid with toroidal indexing.

use crate::error::{KMapError, Result};
use crate::region::Region;
use crate::types::Shape;

/// A row-major grid whose coordinates wrap around both extents.
///
/// Out-of-range coordinates are not an error: row `height` is row `0` again, and
/// likewise for columns.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid<T> {
    shape: Shape,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Lays `cells` out row by row.
    ///
    /// Returns [`KMapError::EmptyGrid`] if there are no cells.
    ///
    /// # Panics
    ///
    /// Panics if the number of cells does not match `shape`.
    pub fn from_row_major(cells: Vec<T>, shape: Shape) -> Result<Self> {
        if cells.is_empty() {
            return Err(KMapError::EmptyGrid);
        }
        assert_eq!(cells.len(), shape.len(), "Cell count must match grid shape {}", shape);
        Ok(Grid { shape, cells })
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Returns the value at `(row, col)` after reducing both coordinates.
    pub fn get(&self, row: usize, col: usize) -> &T {
        let cell = self.shape.reduce(row, col);
        &self.cells[self.shape.index(cell)]
    }

    /// Values of the distinct cells covered by `region`, in row-major order.
    pub fn cells(&self, region: &Region) -> impl Iterator<Item = &T> + '_ {
        region.cell_set(self.shape).iter().map(move |i| &self.cells[i])
    }

    pub(crate) fn swap_cols(&mut self, a: usize, b: usize) {
        let width = self.shape.width();
        for row in self.cells.chunks_mut(width) {
            row.swap(a, b);
        }
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        let width = self.shape.width();
        for col in 0..width {
            self.cells.swap(a * width + col, b * width + col);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn numbered(shape: Shape) -> Grid<usize> {
        Grid::from_row_major((0..shape.len()).collect(), shape).unwrap()
    }

    #[test]
    fn test_get_wraps() {
        let grid = numbered(Shape::new(2, 4));
        assert_eq!(*grid.get(0, 0), 0);
        assert_eq!(*grid.get(1, 3), 7);
        assert_eq!(*grid.get(2, 0), 0);
        assert_eq!(*grid.get(3, 5), 5);
        assert_eq!(*grid.get(101, 101), 5);
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::<bool>::from_row_major(Vec::new(), Shape::new(2, 2));
        assert_eq!(grid, Err(KMapError::EmptyGrid));
    }

    #[test]
    #[should_panic(expected = "Cell count must match grid shape")]
    fn test_mismatched_shape_panics() {
        let _ = Grid::from_row_major(vec![1, 2, 3], Shape::new(2, 2));
    }

    #[test]
    fn test_cells_of_region() {
        let grid = numbered(Shape::new(4, 4));
        let values: Vec<_> = grid.cells(&Region::new(3, 3, 4, 4)).copied().collect();
        assert_eq!(values, vec![0, 3, 12, 15]);
    }

    #[test]
    fn test_swaps() {
        let mut grid = numbered(Shape::new(4, 4));
        grid.swap_cols(2, 3);
        assert_eq!(*grid.get(0, 2), 3);
        assert_eq!(*grid.get(1, 3), 6);
        grid.swap_rows(2, 3);
        assert_eq!(*grid.get(2, 0), 12);
        assert_eq!(*grid.get(3, 2), 11);
    }
}
