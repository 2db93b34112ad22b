use clap::Parser;

/// CLI arguments for the ant farm simulation
#[derive(Parser, Debug)]
#[command(name = "antfarm", about = "🐜 Ant colony foraging on a pheromone grid")]
pub struct Args {
    /// Path to a TOML config file
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Grid width (overrides the config file)
    #[arg(short = 'W', long = "width")]
    pub width: Option<usize>,

    /// Grid height (overrides the config file)
    #[arg(short = 'H', long = "height")]
    pub height: Option<usize>,

    /// Number of ants (overrides the config file)
    #[arg(short = 'n', long = "ants")]
    pub ants: Option<usize>,

    /// Random seed (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of ticks to run
    #[arg(short = 't', long, default_value_t = 500)]
    pub ticks: u64,

    /// Print a text frame every N ticks (0 = never)
    #[arg(long, default_value_t = 0)]
    pub render_every: u64,

    /// Pace ticks in wall-clock time instead of running flat out
    #[arg(long, default_value_t = false)]
    pub realtime: bool,

    /// Ticks per second when running in real time (overrides the config file)
    #[arg(long)]
    pub tps: Option<u32>,

    /// Suppress forage event logs (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}
