pub mod food;
pub mod grid;
pub mod pheromone;

pub use food::{FoodField, FoodPile};
pub use grid::{Cell, Grid};
pub use pheromone::PheromoneField;
