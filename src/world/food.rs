use crate::world::grid::{Cell, Grid};

/// Number of piles scattered at construction
pub const INITIAL_PILES: usize = 8;
/// Piles keep this many cells away from every border
pub const PILE_MARGIN: usize = 5;
/// Pile amounts are drawn from `PILE_MIN..PILE_MAX`
pub const PILE_MIN: u32 = 20;
pub const PILE_MAX: u32 = 60;

/// A food pile to place on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoodPile {
    pub cell: Cell,
    pub amount: u32,
}

/// Integer food amount per cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoodField {
    grid: Grid,
    amounts: Vec<u32>,
}

impl FoodField {
    /// Empty field
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            amounts: vec![0; grid.len()],
        }
    }

    /// Add a pile; overlapping piles accumulate
    pub fn add_pile(&mut self, pile: FoodPile) {
        let idx = self.grid.index(pile.cell);
        self.amounts[idx] = self.amounts[idx].saturating_add(pile.amount);
    }

    /// Scatter `INITIAL_PILES` random piles inside the interior margin.
    /// On an axis too short for the margin, the whole axis is used.
    pub fn scatter_piles(&mut self, rng: &mut fastrand::Rng) {
        let (x_lo, x_hi) = interior(self.grid.width());
        let (y_lo, y_hi) = interior(self.grid.height());
        for _ in 0..INITIAL_PILES {
            let x = rng.usize(x_lo..x_hi);
            let y = rng.usize(y_lo..y_hi);
            let amount = rng.u32(PILE_MIN..PILE_MAX);
            self.add_pile(FoodPile {
                cell: Cell::new(x, y),
                amount,
            });
        }
    }

    /// Food at a cell
    #[inline]
    pub fn get(&self, cell: Cell) -> u32 {
        self.amounts[self.grid.index(cell)]
    }

    #[inline]
    pub fn has_food(&self, cell: Cell) -> bool {
        self.get(cell) > 0
    }

    /// Remove one unit from the cell. Returns false if it was already empty.
    #[inline]
    pub fn take_one(&mut self, cell: Cell) -> bool {
        let slot = &mut self.amounts[self.grid.index(cell)];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Total food left on the grid
    pub fn total(&self) -> u64 {
        self.amounts.iter().map(|&a| a as u64).sum()
    }

    /// Cells that still hold food, with their amounts
    pub fn piles(&self) -> impl Iterator<Item = FoodPile> + '_ {
        self.amounts
            .iter()
            .enumerate()
            .filter(|(_, a)| **a > 0)
            .map(|(i, &amount)| FoodPile {
                cell: self.grid.cell(i),
                amount,
            })
    }

    /// Raw row-major amounts
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.amounts
    }
}

fn interior(len: usize) -> (usize, usize) {
    if len > 2 * PILE_MARGIN {
        (PILE_MARGIN, len - PILE_MARGIN)
    } else {
        (0, len)
    }
}
