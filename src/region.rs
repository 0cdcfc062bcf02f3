//! Rectangular regions on the map torus.

use std::cmp::Reverse;
use std::fmt;
use std::ops::Add;

use crate::cellset::CellSet;
use crate::types::{Cell, Shape};

/// An inclusive rectangle `[top_row..=bottom_row] × [top_col..=bottom_col]`.
///
/// Corners may lie beyond the grid: a region that crosses an edge is written with
/// coordinates past the extent and wraps around once reduced against a [`Shape`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Region {
    pub top_row: usize,
    pub top_col: usize,
    pub bottom_row: usize,
    pub bottom_col: usize,
}

impl Region {
    pub const fn new(top_row: usize, top_col: usize, bottom_row: usize, bottom_col: usize) -> Self {
        Region {
            top_row,
            top_col,
            bottom_row,
            bottom_col,
        }
    }

    /// The single-cell region at `cell`, used as an anchor for template offsets.
    pub const fn at(cell: Cell) -> Self {
        Region::new(cell.row, cell.col, cell.row, cell.col)
    }

    /// Number of rows spanned, before wraparound.
    pub fn height(&self) -> usize {
        self.bottom_row + 1 - self.top_row
    }

    /// Number of columns spanned, before wraparound.
    pub fn width(&self) -> usize {
        self.bottom_col + 1 - self.top_col
    }

    /// Raw, unreduced coordinates covered by the region, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let Region {
            top_row,
            top_col,
            bottom_row,
            bottom_col,
        } = *self;
        (top_row..=bottom_row).flat_map(move |row| (top_col..=bottom_col).map(move |col| (row, col)))
    }

    /// Distinct grid cells covered by the region once reduced onto `shape`.
    pub fn cell_set(&self, shape: Shape) -> CellSet {
        self.cells()
            .map(|(row, col)| shape.index(shape.reduce(row, col)))
            .collect()
    }

    /// Canonical form on `shape`: the top-left corner is reduced and each extent is
    /// clamped to the grid, so regions covering the same cells compare equal.
    pub fn canonical(&self, shape: Shape) -> Region {
        let top = shape.reduce(self.top_row, self.top_col);
        let height = self.height().min(shape.height());
        let width = self.width().min(shape.width());
        Region::new(top.row, top.col, top.row + height - 1, top.col + width - 1)
    }

    /// Ordering key: top-left corner first, larger regions before smaller ones.
    pub fn sort_key(&self) -> (usize, usize, Reverse<usize>, Reverse<usize>) {
        (
            self.top_row,
            self.top_col,
            Reverse(self.height()),
            Reverse(self.width()),
        )
    }
}

impl Add for Region {
    type Output = Region;

    fn add(self, rhs: Self) -> Self::Output {
        Region::new(
            self.top_row + rhs.top_row,
            self.top_col + rhs.top_col,
            self.bottom_row + rhs.bottom_row,
            self.bottom_col + rhs.bottom_col,
        )
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{})",
            self.top_row, self.top_col, self.bottom_row, self.bottom_col
        )
    }
}
