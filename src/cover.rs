//! Group search: builds an irredundant cover of the 1-cells.
//!
//! The search is greedy and largest-first. It runs four passes over fixed template
//! tables (8, 4, 2 and 1 cells) and accepts every all-ones region whose cells are not
//! already covered by the regions accepted so far. A final pruning pass drops any
//! region that the rest of the cover makes redundant.
//!
//! Size-8 templates sit at fixed positions on the 4×4 grid. Smaller templates are
//! offsets applied to each 1-valued cell in row-major order.

use log::debug;

use crate::cellset::CellSet;
use crate::grid::Grid;
use crate::region::Region;
use crate::types::{Cell, Shape};

/// Fixed size-8 templates, only meaningful on the 4×4 grid.
const SIZE8: [Region; 4] = [
    Region::new(0, 0, 1, 3),
    Region::new(0, 0, 3, 1),
    Region::new(0, 2, 3, 3),
    Region::new(2, 0, 3, 3),
];

/// Four cells along the anchor's row.
const RUN_ACROSS: Region = Region::new(0, 0, 0, 3);
/// 2×2 block with the anchor at its top-left.
const BLOCK: Region = Region::new(0, 0, 1, 1);
/// Four cells down the anchor's column (4-row grids only).
const RUN_DOWN: Region = Region::new(0, 0, 3, 0);

/// The anchor and the cell below it.
const PAIR_DOWN: Region = Region::new(0, 0, 1, 0);
/// The anchor and the cell to its right.
const PAIR_RIGHT: Region = Region::new(0, 0, 0, 1);

/// An accepted region together with the cells it covers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Group {
    region: Region,
    cells: CellSet,
}

impl Group {
    fn new(region: Region, shape: Shape) -> Self {
        let region = region.canonical(shape);
        Group {
            region,
            cells: region.cell_set(shape),
        }
    }

    /// Canonical region of the group.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Cells covered by the group.
    pub fn cells(&self) -> CellSet {
        self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// An ordered set of groups covering every 1-cell of a map.
///
/// Groups are sorted by [`Region::sort_key`], so iteration order is stable.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Cover {
    shape: Shape,
    groups: Vec<Group>,
}

impl Cover {
    /// Finds a cover of the 1-cells in `values`.
    ///
    /// A grid of all ones is covered by a single whole-grid group, and a grid of all
    /// zeros by no groups; neither case runs the search.
    pub fn find(values: &Grid<bool>) -> Self {
        let shape = values.shape();
        let whole = Region::new(0, 0, shape.height() - 1, shape.width() - 1);

        if values.cells(&whole).all(|&v| v) {
            debug!("find: all {} cells are set", shape.len());
            return Cover {
                shape,
                groups: vec![Group::new(whole, shape)],
            };
        }
        if values.cells(&whole).all(|&v| !v) {
            debug!("find: no cells are set");
            return Cover {
                shape,
                groups: Vec::new(),
            };
        }

        GroupFinder::new(values).run()
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Union of all cells covered by the groups.
    pub fn covered(&self) -> CellSet {
        self.groups.iter().fold(CellSet::empty(), |acc, g| acc.union(g.cells))
    }
}

impl<'a> IntoIterator for &'a Cover {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Accumulator for one search. Groups are kept in acceptance order until the end.
struct GroupFinder<'a> {
    values: &'a Grid<bool>,
    shape: Shape,
    taken: Vec<Group>,
    covered: CellSet,
}

impl<'a> GroupFinder<'a> {
    fn new(values: &'a Grid<bool>) -> Self {
        Self {
            values,
            shape: values.shape(),
            taken: Vec::new(),
            covered: CellSet::empty(),
        }
    }

    fn run(mut self) -> Cover {
        let ones: Vec<Cell> = self
            .shape
            .cells()
            .filter(|c| *self.values.get(c.row, c.col))
            .collect();

        self.find_all8();
        for &cell in &ones {
            self.find_all4(cell);
        }
        for &cell in &ones {
            self.find_all2(cell);
        }
        for &cell in &ones {
            self.find_all1(cell);
        }

        self.prune();

        let mut groups = self.taken;
        groups.sort_by_key(|g| g.region.sort_key());
        Cover {
            shape: self.shape,
            groups,
        }
    }

    fn find_all8(&mut self) {
        if self.shape.height() != 4 {
            return;
        }
        for region in SIZE8 {
            self.try_take(region, "find_all8");
        }
    }

    fn find_all4(&mut self, cell: Cell) {
        let anchor = Region::at(cell);
        self.try_take(anchor + RUN_ACROSS, "find_all4");
        self.try_take(anchor + BLOCK, "find_all4");
        if self.shape.height() == 4 {
            self.try_take(anchor + RUN_DOWN, "find_all4");
        }
    }

    fn find_all2(&mut self, cell: Cell) {
        let anchor = Region::at(cell);
        self.try_take(anchor + PAIR_DOWN, "find_all2");
        self.try_take(anchor + PAIR_RIGHT, "find_all2");
    }

    fn find_all1(&mut self, cell: Cell) {
        self.try_take(Region::at(cell), "find_all1");
    }

    fn are_all1(&self, region: &Region) -> bool {
        self.values.cells(region).all(|&v| v)
    }

    fn is_taken(&self, cells: CellSet) -> bool {
        cells.is_subset(self.covered)
    }

    /// Accepts `region` if all its cells are set and not all of them are covered yet.
    fn try_take(&mut self, region: Region, pass: &str) -> bool {
        if !self.are_all1(&region) {
            return false;
        }
        let group = Group::new(region, self.shape);
        if self.is_taken(group.cells) {
            return false;
        }
        debug!("{}: accepted {} covering {:?}", pass, group.region, group.cells);
        self.covered = self.covered.union(group.cells);
        self.taken.push(group);
        true
    }

    /// Drops groups whose cells are all covered by the remaining ones, latest first.
    fn prune(&mut self) {
        let mut i = self.taken.len();
        while i > 0 {
            i -= 1;
            let others = self
                .taken
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(CellSet::empty(), |acc, (_, g)| acc.union(g.cells));
            if self.taken[i].cells.is_subset(others) {
                debug!("prune: dropped redundant {}", self.taken[i].region);
                self.taken.remove(i);
            }
        }
    }
}
