use std::fmt;

/// Errors raised while building a simulation or loading its configuration
#[derive(Debug)]
pub enum SimError {
    /// Width or height was zero
    InvalidDimensions { width: usize, height: usize },
    /// A tunable parameter is outside its allowed range
    InvalidParameter { name: &'static str, value: f64 },
    /// More ants than fit in a `u32` id
    TooManyAnts(usize),
    /// A food pile was placed outside the grid
    PileOutOfBounds { x: usize, y: usize },
    /// IO operation failed
    IoError(std::io::Error),
    /// Configuration file is not valid TOML for `RunConfig`
    ConfigError(toml::de::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidDimensions { width, height } => {
                write!(f, "Invalid grid dimensions: {}x{}", width, height)
            }
            SimError::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter: {} = {}", name, value)
            }
            SimError::TooManyAnts(n) => write!(f, "Too many ants: {}", n),
            SimError::PileOutOfBounds { x, y } => {
                write!(f, "Food pile outside the grid: ({}, {})", x, y)
            }
            SimError::IoError(err) => write!(f, "IO error: {}", err),
            SimError::ConfigError(err) => write!(f, "Config error: {}", err),
        }
    }
}

impl std::error::Error for SimError {}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::IoError(err)
    }
}

impl From<toml::de::Error> for SimError {
    fn from(err: toml::de::Error) -> Self {
        SimError::ConfigError(err)
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, SimError>;
