use crate::cli::Args;
use crate::simulation::{ForageEvent, SimulationEngine, TickReport};
use colored::Colorize;
use std::time::Duration;

/// Print the forage events of one tick
#[inline]
pub fn log_events(args: &Args, report: &TickReport) {
    if args.suppress_events {
        return;
    }
    for event in &report.events {
        match *event {
            ForageEvent::PickedUp { ant, cell } => println!(
                "{} {} {} {}",
                format!("[{:>6}]", report.tick).dimmed(),
                "🍃".green(),
                format!("ant {}", ant).yellow(),
                format!("picked up food at ({}, {})", cell.x, cell.y).green()
            ),
            ForageEvent::Delivered { ant, .. } => println!(
                "{} {} {} {}",
                format!("[{:>6}]", report.tick).dimmed(),
                "🏠".bright_yellow(),
                format!("ant {}", ant).yellow(),
                "delivered food to the nest".bright_yellow()
            ),
        }
    }
}

/// Print a text frame of the grid
pub fn print_frame(engine: &SimulationEngine) {
    println!("{}", format!("--- tick {} ---", engine.tick()).bright_blue());
    print!("{}", crate::simulation::render::render_text(engine));
}

/// Print simulation summary
pub fn print_summary(engine: &SimulationEngine, simulation_time: Duration) {
    println!(
        "\n{}\n{} {:.3} ms {} {} {} {} {} {} {}",
        "===".bright_blue().bold(),
        "⏱️  Simulation Latency:".green().bold(),
        simulation_time.as_secs_f64() * 1000.0,
        format!("({}x{} grid)", engine.width(), engine.height()).dimmed(),
        "|".dimmed(),
        format!("ticks={}", engine.tick()).cyan(),
        format!("ants={}", engine.ants().len()).cyan(),
        format!("picked={}", engine.picked_up()).cyan(),
        format!("delivered={}", engine.delivered()).cyan(),
        format!("food_left={}", engine.food().total()).cyan(),
    );
}
