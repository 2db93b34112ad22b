use crate::config::SimParams;
use crate::world::{Cell, FoodField, Grid, PheromoneField};

/// Score the "stay" option starts with; any real candidate beats it
pub const NO_MOVE_SCORE: f64 = -1e9;
/// Pull towards the nest per cell of distance when returning
pub const NEST_PULL: f64 = 0.6;
/// Nest repulsion applies within this many cells of the nest
pub const NEST_REPEL_RADIUS: usize = 4;
pub const NEST_REPEL_WEIGHT: f64 = 1.2;
/// Edge penalty applies within this many cells of a border
pub const EDGE_RADIUS: usize = 2;
pub const EDGE_WEIGHT: f64 = 1.4;
/// Bonus for stepping onto a cell that holds food
pub const FOOD_BONUS: f64 = 2.5;

/// Read-only view of the state a move decision depends on
pub struct Surroundings<'a> {
    pub grid: Grid,
    pub nest: Cell,
    pub food: &'a FoodField,
    pub food_trail: &'a PheromoneField,
    pub home_trail: &'a PheromoneField,
    pub params: &'a SimParams,
}

impl Surroundings<'_> {
    /// Returning ant: follow the home trail and head for the nest
    #[inline]
    pub fn homing_score(&self, cell: Cell, noise: f64) -> f64 {
        self.params.w_home_pher * self.home_trail.get(cell)
            - NEST_PULL * cell.manhattan(self.nest) as f64
            + noise * self.params.w_random
    }

    /// Searching ant: follow the food trail, keep off the nest and the borders
    #[inline]
    pub fn foraging_score(&self, cell: Cell, noise: f64) -> f64 {
        let mut score = self.params.w_food_pher * self.food_trail.get(cell)
            - nest_repulsion(cell, self.nest)
            - edge_penalty(&self.grid, cell)
            + noise * self.params.w_random;
        if self.food.has_food(cell) {
            score += FOOD_BONUS;
        }
        score
    }
}

/// `max(0, 4 - dist) * 1.2`
#[inline]
pub fn nest_repulsion(cell: Cell, nest: Cell) -> f64 {
    NEST_REPEL_RADIUS.saturating_sub(cell.manhattan(nest)) as f64 * NEST_REPEL_WEIGHT
}

/// `max(0, 2 - border_distance) * 1.4`
#[inline]
pub fn edge_penalty(grid: &Grid, cell: Cell) -> f64 {
    EDGE_RADIUS.saturating_sub(grid.border_distance(cell)) as f64 * EDGE_WEIGHT
}

/// Pick the highest-scoring candidate, drawing one noise sample per candidate
/// in order. Only a strictly greater score replaces the current best, so ties
/// go to whichever candidate came first. With no candidates the ant stays.
pub fn pick_best(
    here: Cell,
    candidates: &[Cell],
    rng: &mut fastrand::Rng,
    mut score: impl FnMut(Cell, f64) -> f64,
) -> Cell {
    let mut best = here;
    let mut best_score = NO_MOVE_SCORE;
    for &cell in candidates {
        let s = score(cell, rng.f64());
        if s > best_score {
            best_score = s;
            best = cell;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::FoodPile;

    #[test]
    fn test_nest_repulsion() {
        let nest = Cell::new(10, 10);
        assert!((nest_repulsion(nest, nest) - 4.8).abs() < 1e-12);
        assert!((nest_repulsion(Cell::new(11, 10), nest) - 3.6).abs() < 1e-12);
        assert_eq!(nest_repulsion(Cell::new(12, 12), nest), 0.0);
        assert_eq!(nest_repulsion(Cell::new(20, 10), nest), 0.0);
    }

    #[test]
    fn test_edge_penalty() {
        let grid = Grid::new(10, 10);
        assert!((edge_penalty(&grid, Cell::new(0, 5)) - 2.8).abs() < 1e-12);
        assert!((edge_penalty(&grid, Cell::new(5, 1)) - 1.4).abs() < 1e-12);
        assert_eq!(edge_penalty(&grid, Cell::new(5, 5)), 0.0);
    }

    #[test]
    fn test_pick_best_strict_tie_keeps_first() {
        let mut rng = fastrand::Rng::with_seed(0);
        let candidates = [Cell::new(1, 0), Cell::new(0, 1)];
        let best = pick_best(Cell::new(0, 0), &candidates, &mut rng, |_, _| 1.0);
        assert_eq!(best, Cell::new(1, 0));
    }

    #[test]
    fn test_pick_best_without_candidates_stays() {
        let mut rng = fastrand::Rng::with_seed(0);
        let here = Cell::new(3, 3);
        assert_eq!(pick_best(here, &[], &mut rng, |_, _| 100.0), here);
    }

    #[test]
    fn test_pick_best_prefers_higher_score() {
        let mut rng = fastrand::Rng::with_seed(5);
        let candidates = [Cell::new(1, 0), Cell::new(0, 1), Cell::new(2, 1)];
        let best = pick_best(Cell::new(1, 1), &candidates, &mut rng, |c, _| c.x as f64);
        assert_eq!(best, Cell::new(2, 1));
    }

    #[test]
    fn test_foraging_score_food_bonus() {
        let grid = Grid::new(20, 20);
        let mut food = FoodField::new(grid);
        let trail = PheromoneField::new(grid);
        let params = SimParams {
            w_random: 0.0,
            ..SimParams::default()
        };
        let with_food = Cell::new(5, 5);
        food.add_pile(FoodPile {
            cell: with_food,
            amount: 1,
        });
        let view = Surroundings {
            grid,
            nest: grid.center(),
            food: &food,
            food_trail: &trail,
            home_trail: &trail,
            params: &params,
        };

        let bare = view.foraging_score(Cell::new(5, 6), 0.0);
        let rich = view.foraging_score(with_food, 0.0);
        assert!((rich - bare - FOOD_BONUS).abs() < 1e-12);
    }

    #[test]
    fn test_homing_score_prefers_nest_side() {
        let grid = Grid::new(20, 20);
        let food = FoodField::new(grid);
        let trail = PheromoneField::new(grid);
        let params = SimParams::default();
        let view = Surroundings {
            grid,
            nest: grid.center(),
            food: &food,
            food_trail: &trail,
            home_trail: &trail,
            params: &params,
        };

        // Noise is at most w_random, smaller than one step of nest pull
        let closer = view.homing_score(Cell::new(7, 10), 0.0);
        let farther = view.homing_score(Cell::new(5, 10), 1.0);
        assert!(closer > farther);
    }
}
