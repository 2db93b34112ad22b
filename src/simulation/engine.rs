use crate::ant::Ant;
use crate::config::SimParams;
use crate::error::{Result, SimError};
use crate::simulation::scoring::{pick_best, Surroundings};
use crate::world::{Cell, FoodField, FoodPile, Grid, PheromoneField};

/// Something an ant did during a tick that the caller may want to log
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForageEvent {
    /// Ant took one unit of food from `cell`
    PickedUp { ant: u32, cell: Cell },
    /// Ant brought its food back to the nest
    Delivered { ant: u32, cell: Cell },
}

/// Outcome of one `advance` call
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    /// Events in the order they happened (ant index order)
    pub events: Vec<ForageEvent>,
}

/// Owns the grid, the food, both pheromone fields and all ants.
///
/// Ants are processed one at a time in index order. An ant sees the
/// pickups and trail deposits of every ant processed before it in the same
/// tick; that ordering is part of the behaviour and must be kept.
#[derive(Clone, Debug)]
pub struct SimulationEngine {
    grid: Grid,
    nest: Cell,
    food: FoodField,
    food_trail: PheromoneField,
    home_trail: PheromoneField,
    ants: Vec<Ant>,
    params: SimParams,
    rng: fastrand::Rng,
    tick: u64,
    picked_up: u64,
    delivered: u64,
}

impl SimulationEngine {
    /// Create a simulation with 8 random food piles
    pub fn new(
        width: usize,
        height: usize,
        ant_count: usize,
        seed: u64,
        params: SimParams,
    ) -> Result<Self> {
        let mut engine = Self::empty(width, height, ant_count, seed, params)?;
        engine.food.scatter_piles(&mut engine.rng);
        Ok(engine)
    }

    /// Create a simulation with the given food piles instead of random ones
    pub fn with_piles(
        width: usize,
        height: usize,
        ant_count: usize,
        seed: u64,
        params: SimParams,
        piles: &[FoodPile],
    ) -> Result<Self> {
        let mut engine = Self::empty(width, height, ant_count, seed, params)?;
        for &pile in piles {
            if !engine.grid.contains(pile.cell) {
                return Err(SimError::PileOutOfBounds {
                    x: pile.cell.x,
                    y: pile.cell.y,
                });
            }
            engine.food.add_pile(pile);
        }
        Ok(engine)
    }

    fn empty(
        width: usize,
        height: usize,
        ant_count: usize,
        seed: u64,
        params: SimParams,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SimError::InvalidDimensions { width, height });
        }
        params.validate()?;

        let grid = Grid::new(width, height);
        let nest = grid.center();
        let ant_count = u32::try_from(ant_count).map_err(|_| SimError::TooManyAnts(ant_count))?;
        let ants = (0..ant_count).map(|id| Ant::new(id, nest)).collect();

        Ok(Self {
            grid,
            nest,
            food: FoodField::new(grid),
            food_trail: PheromoneField::new(grid),
            home_trail: PheromoneField::new(grid),
            ants,
            params,
            rng: fastrand::Rng::with_seed(seed),
            tick: 0,
            picked_up: 0,
            delivered: 0,
        })
    }

    /// Advance the simulation by exactly one tick
    pub fn advance(&mut self) -> TickReport {
        self.tick += 1;
        let mut report = TickReport {
            tick: self.tick,
            events: Vec::new(),
        };

        self.home_trail.deposit(self.nest, self.params.home_source);

        for i in 0..self.ants.len() {
            self.step_ant(i, &mut report.events);
        }

        self.food_trail.evaporate(self.params.decay);
        self.home_trail.evaporate(self.params.decay);

        let every = self.params.diffuse_every;
        if every > 0 && self.tick % every == 0 {
            self.food_trail.diffuse(self.params.diffuse_rate);
            self.home_trail.diffuse(self.params.diffuse_rate);
        }

        report
    }

    /// Decide and commit one ant's move
    fn step_ant(&mut self, idx: usize, events: &mut Vec<ForageEvent>) {
        let mut ant = self.ants[idx];
        ant.mark_prev();
        let here = ant.pos();

        if ant.is_carrying() {
            self.food_trail.deposit(here, self.params.deposit_food);
        }

        let (mut opts, k) = self.grid.neighbors(here);
        let candidates = &mut opts[..k];
        self.rng.shuffle(candidates);

        let next = if ant.is_carrying() {
            let view = Surroundings {
                grid: self.grid,
                nest: self.nest,
                food: &self.food,
                food_trail: &self.food_trail,
                home_trail: &self.home_trail,
                params: &self.params,
            };
            pick_best(here, candidates, &mut self.rng, |c, noise| {
                view.homing_score(c, noise)
            })
        } else if self.food.take_one(here) {
            ant.pick_up();
            self.picked_up += 1;
            events.push(ForageEvent::PickedUp {
                ant: ant.id,
                cell: here,
            });
            here
        } else {
            let view = Surroundings {
                grid: self.grid,
                nest: self.nest,
                food: &self.food,
                food_trail: &self.food_trail,
                home_trail: &self.home_trail,
                params: &self.params,
            };
            pick_best(here, candidates, &mut self.rng, |c, noise| {
                view.foraging_score(c, noise)
            })
        };

        ant.move_to(next);

        if ant.is_carrying() && next == self.nest {
            ant.drop_off();
            self.delivered += 1;
            events.push(ForageEvent::Delivered {
                ant: ant.id,
                cell: next,
            });
        }

        self.ants[idx] = ant;
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[inline]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[inline]
    pub fn nest(&self) -> Cell {
        self.nest
    }

    /// Ticks advanced so far
    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[inline]
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    #[inline]
    pub fn food(&self) -> &FoodField {
        &self.food
    }

    /// Food amount at a cell
    #[inline]
    pub fn food_at(&self, cell: Cell) -> u32 {
        self.food.get(cell)
    }

    #[inline]
    pub fn food_trail(&self) -> &PheromoneField {
        &self.food_trail
    }

    #[inline]
    pub fn home_trail(&self) -> &PheromoneField {
        &self.home_trail
    }

    #[inline]
    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Food units picked up since construction
    #[inline]
    pub fn picked_up(&self) -> u64 {
        self.picked_up
    }

    /// Food units brought back to the nest since construction
    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered
    }
}
