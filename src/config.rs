use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable simulation constants, fixed for the lifetime of an engine
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    /// Multiply pheromone by this each tick, in (0, 1)
    pub decay: f64,
    /// Diffuse every N ticks, 0 disables diffusion
    pub diffuse_every: u64,
    /// How strongly a cell blends with its neighbours, in [0, 1]
    pub diffuse_rate: f64,
    /// Food-trail deposit per tick while carrying
    pub deposit_food: f64,
    /// Home-trail added to the nest cell each tick
    pub home_source: f64,
    /// How much searching ants follow the food trail
    pub w_food_pher: f64,
    /// How much returning ants follow the home trail
    pub w_home_pher: f64,
    /// Random noise added to every score
    pub w_random: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            decay: 0.95,
            diffuse_every: 2,
            diffuse_rate: 0.20,
            deposit_food: 3.0,
            home_source: 6.0,
            w_food_pher: 1.8,
            w_home_pher: 2.0,
            w_random: 0.25,
        }
    }
}

impl SimParams {
    /// Reject values that would break the non-negativity of the fields
    pub fn validate(&self) -> Result<()> {
        if !(self.decay > 0.0 && self.decay < 1.0) {
            return Err(invalid("decay", self.decay));
        }
        if !(0.0..=1.0).contains(&self.diffuse_rate) {
            return Err(invalid("diffuse_rate", self.diffuse_rate));
        }
        for (name, value) in [
            ("deposit_food", self.deposit_food),
            ("home_source", self.home_source),
            ("w_food_pher", self.w_food_pher),
            ("w_home_pher", self.w_home_pher),
            ("w_random", self.w_random),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(name, value));
            }
        }
        Ok(())
    }
}

#[inline]
fn invalid(name: &'static str, value: f64) -> SimError {
    SimError::InvalidParameter { name, value }
}

/// Everything needed to start a run, as read from a TOML file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub width: usize,
    pub height: usize,
    pub ants: usize,
    pub seed: u64,
    /// Simulation ticks per second when running in real time
    pub ticks_per_second: u32,
    pub params: SimParams,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 50,
            ants: 20,
            seed: 1,
            ticks_per_second: 12,
            params: SimParams::default(),
        }
    }
}

impl RunConfig {
    /// Load a config file; missing keys fall back to defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply command-line overrides on top of the file values
    pub fn with_overrides(mut self, args: &crate::cli::Args) -> Self {
        if let Some(width) = args.width {
            self.width = width;
        }
        if let Some(height) = args.height {
            self.height = height;
        }
        if let Some(ants) = args.ants {
            self.ants = ants;
        }
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        if let Some(tps) = args.tps {
            self.ticks_per_second = tps;
        }
        self
    }
}
