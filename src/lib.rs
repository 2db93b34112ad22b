//! # Ant Farm
//!
//! An ant colony foraging on a grid, coordinating only through two
//! pheromone fields (a food trail and a home trail).
//!
//! The library provides the simulation engine, its configuration and a few
//! helpers for driving it (a fixed-timestep clock and a text renderer).

pub mod ant;
pub mod cli;
pub mod config;
pub mod direction;
pub mod error;
pub mod simulation;
pub mod world;

pub use ant::{Ant, AntState};
pub use cli::Args;
pub use config::{RunConfig, SimParams};
pub use direction::Direction;
pub use error::{Result, SimError};
pub use simulation::{ForageEvent, SimulationEngine, TickReport};
pub use world::{Cell, FoodPile, Grid};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, AntState, Args, Cell, FoodPile, ForageEvent, Result, RunConfig, SimError, SimParams,
        SimulationEngine, TickReport,
    };
}
