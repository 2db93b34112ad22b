use crate::world::grid::{Cell, Grid};

/// Scalar scent intensity per cell
#[derive(Clone, Debug, PartialEq)]
pub struct PheromoneField {
    grid: Grid,
    data: Vec<f64>,
}

impl PheromoneField {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            data: vec![0.0; grid.len()],
        }
    }

    #[inline]
    pub fn get(&self, cell: Cell) -> f64 {
        self.data[self.grid.index(cell)]
    }

    /// Add `amount` to the cell; no upper cap
    #[inline]
    pub fn deposit(&mut self, cell: Cell, amount: f64) {
        let idx = self.grid.index(cell);
        self.data[idx] += amount;
    }

    /// Multiply every cell by `decay`
    pub fn evaporate(&mut self, decay: f64) {
        for v in &mut self.data {
            *v *= decay;
        }
    }

    /// Blend every cell with the mean of its in-bounds 4-neighbours:
    /// `(1 - rate) * old + rate * mean`. Reads only the pre-diffusion values.
    /// A cell with no neighbours keeps its value.
    pub fn diffuse(&mut self, rate: f64) {
        let w = self.grid.width();
        let h = self.grid.height();
        let old = &self.data;
        let mut next = vec![0.0; old.len()];

        for y in 0..h {
            for x in 0..w {
                let idx = y * w + x;
                let mut n = 0u32;
                let mut sum = 0.0;
                if x + 1 < w {
                    sum += old[idx + 1];
                    n += 1;
                }
                if x > 0 {
                    sum += old[idx - 1];
                    n += 1;
                }
                if y + 1 < h {
                    sum += old[idx + w];
                    n += 1;
                }
                if y > 0 {
                    sum += old[idx - w];
                    n += 1;
                }

                next[idx] = if n == 0 {
                    old[idx]
                } else {
                    (1.0 - rate) * old[idx] + rate * (sum / n as f64)
                };
            }
        }

        self.data = next;
    }

    /// Sum over all cells
    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Raw row-major values
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_deposit_accumulates() {
        let mut field = PheromoneField::new(Grid::new(3, 3));
        let cell = Cell::new(2, 1);
        field.deposit(cell, 3.0);
        field.deposit(cell, 3.0);
        assert_eq!(field.get(cell), 6.0);
    }

    #[test]
    fn test_evaporate_scales_every_cell() {
        let mut field = PheromoneField::new(Grid::new(2, 2));
        field.deposit(Cell::new(0, 0), 10.0);
        field.deposit(Cell::new(1, 1), 2.0);
        field.evaporate(0.5);
        assert_eq!(field.get(Cell::new(0, 0)), 5.0);
        assert_eq!(field.get(Cell::new(1, 1)), 1.0);
        assert_eq!(field.get(Cell::new(1, 0)), 0.0);
    }

    #[test]
    fn test_diffuse_hot_center_on_3x3() {
        let rate = 0.2;
        let mut field = PheromoneField::new(Grid::new(3, 3));
        field.deposit(Cell::new(1, 1), 1.0);
        field.diffuse(rate);

        assert!((field.get(Cell::new(1, 1)) - (1.0 - rate)).abs() < EPS);
        for edge in [
            Cell::new(1, 0),
            Cell::new(0, 1),
            Cell::new(2, 1),
            Cell::new(1, 2),
        ] {
            assert!((field.get(edge) - rate / 3.0).abs() < EPS);
        }
        for corner in [
            Cell::new(0, 0),
            Cell::new(2, 0),
            Cell::new(0, 2),
            Cell::new(2, 2),
        ] {
            assert_eq!(field.get(corner), 0.0);
        }
    }

    #[test]
    fn test_diffuse_conserves_mass_in_interior() {
        // A hot cell far from the border spreads to four full-neighbour cells
        let rate = 0.25;
        let mut field = PheromoneField::new(Grid::new(7, 7));
        field.deposit(Cell::new(3, 3), 8.0);
        field.diffuse(rate);
        assert!((field.total() - 8.0).abs() < EPS);
    }

    #[test]
    fn test_diffuse_single_cell_keeps_value() {
        let mut field = PheromoneField::new(Grid::new(1, 1));
        field.deposit(Cell::new(0, 0), 4.0);
        field.diffuse(0.5);
        assert_eq!(field.get(Cell::new(0, 0)), 4.0);
    }

    #[test]
    fn test_decay_and_diffusion_stay_non_negative() {
        let mut rng = fastrand::Rng::with_seed(3);
        let grid = Grid::new(6, 4);
        let mut field = PheromoneField::new(grid);
        for _ in 0..50 {
            let cell = Cell::new(rng.usize(..6), rng.usize(..4));
            field.deposit(cell, rng.f64() * 5.0);
            field.evaporate(0.9);
            field.diffuse(0.3);
            assert!(field.as_slice().iter().all(|&v| v >= 0.0));
        }
    }
}
