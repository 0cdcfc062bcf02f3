//! Grid geometry: shapes and cells.
//!
//! A Karnaugh map is a small torus. [`Shape`] fixes its extents and performs the
//! modulo reduction that makes opposite edges adjacent; [`Cell`] is a position that
//! has already been reduced.

use std::fmt;

/// Extents of a map grid.
///
/// The grid has `height` rows of `width` cells each. For `n` variables the shapes are
/// 2×2 (n = 2), 2×4 (n = 3) and 4×4 (n = 4), so `height * width == 2^n` always holds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Shape {
    height: usize,
    width: usize,
}

impl Shape {
    /// Creates a shape with the given extents.
    ///
    /// # Panics
    ///
    /// Panics if either extent is zero.
    pub fn new(height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0, "Shape extents must be positive");
        Shape { height, width }
    }

    /// Returns the map shape for `num_vars` variables, or `None` outside `2..=4`.
    pub fn for_variables(num_vars: usize) -> Option<Self> {
        match num_vars {
            2 => Some(Shape::new(2, 2)),
            3 => Some(Shape::new(2, 4)),
            4 => Some(Shape::new(4, 4)),
            _ => None,
        }
    }

    /// Number of rows.
    pub fn height(self) -> usize {
        self.height
    }

    /// Number of cells in a row.
    pub fn width(self) -> usize {
        self.width
    }

    /// Total number of cells.
    pub fn len(self) -> usize {
        self.height * self.width
    }

    /// Reduces arbitrary coordinates onto the torus.
    pub fn reduce(self, row: usize, col: usize) -> Cell {
        Cell {
            row: row % self.height,
            col: col % self.width,
        }
    }

    /// Row-major position of a reduced cell.
    pub fn index(self, cell: Cell) -> usize {
        cell.row * self.width + cell.col
    }

    /// Inverse of [`Shape::index`].
    pub fn cell(self, index: usize) -> Cell {
        Cell {
            row: index / self.width,
            col: index % self.width,
        }
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.len()).map(move |i| self.cell(i))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// A grid position, always reduced modulo the grid's [`Shape`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
