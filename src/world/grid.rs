use crate::direction::Direction;

/// A grid coordinate, `(0, 0)` is the top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Sum of absolute coordinate differences
    #[inline]
    pub fn manhattan(self, other: Cell) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Fixed grid dimensions with flat row-major indexing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    /// Create grid dimensions; callers validate that both are non-zero
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat index of a cell (`y * width + x`).
    ///
    /// # Panics
    /// If `cell` lies outside the grid.
    #[inline(always)]
    pub fn index(&self, cell: Cell) -> usize {
        assert!(
            self.contains(cell),
            "cell ({}, {}) outside {}x{} grid",
            cell.x,
            cell.y,
            self.width,
            self.height
        );
        cell.y * self.width + cell.x
    }

    /// Cell for a flat index
    #[inline]
    pub fn cell(&self, idx: usize) -> Cell {
        Cell::new(idx % self.width, idx / self.width)
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// The cell one step away in `dir`, if it is inside the grid
    #[inline]
    pub fn step(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        let (dx, dy) = dir.offset();
        let x = cell.x.checked_add_signed(dx)?;
        let y = cell.y.checked_add_signed(dy)?;
        let next = Cell::new(x, y);
        self.contains(next).then_some(next)
    }

    /// In-bounds cardinal neighbours in `Direction::ALL` order.
    /// Returns a fixed buffer and the number of valid entries.
    #[inline]
    pub fn neighbors(&self, cell: Cell) -> ([Cell; 4], usize) {
        let mut opts = [cell; 4];
        let mut k = 0usize;
        for dir in Direction::ALL {
            if let Some(next) = self.step(cell, dir) {
                opts[k] = next;
                k += 1;
            }
        }
        (opts, k)
    }

    /// Distance to the nearest border, 0 for cells on the edge
    #[inline]
    pub fn border_distance(&self, cell: Cell) -> usize {
        cell.x
            .min(self.width - 1 - cell.x)
            .min(cell.y)
            .min(self.height - 1 - cell.y)
    }

    /// Centre cell, integer division
    #[inline]
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }
}
