pub mod engine;
pub mod render;
pub mod report;
pub mod scoring;
pub mod timestep;

pub use engine::{ForageEvent, SimulationEngine, TickReport};
pub use render::render_text;
pub use timestep::FixedTimestep;
