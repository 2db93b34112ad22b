use antfarm::prelude::*;
use antfarm::simulation::report::{log_events, print_frame, print_summary};
use antfarm::simulation::FixedTimestep;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use std::time::{Duration, Instant};

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> antfarm::Result<()> {
    let config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    }
    .with_overrides(args);

    let mut engine = SimulationEngine::new(
        config.width,
        config.height,
        config.ants,
        config.seed,
        config.params,
    )?;

    let sim_start = Instant::now();
    if args.realtime {
        run_realtime(&mut engine, args, config.ticks_per_second);
    } else {
        while engine.tick() < args.ticks {
            step(&mut engine, args);
        }
    }

    print_summary(&engine, sim_start.elapsed());

    Ok(())
}

fn step(engine: &mut SimulationEngine, args: &Args) {
    let report = engine.advance();
    log_events(args, &report);
    if args.render_every > 0 && report.tick % args.render_every == 0 {
        print_frame(engine);
    }
}

/// Run ticks at a fixed rate against wall-clock time
fn run_realtime(engine: &mut SimulationEngine, args: &Args, ticks_per_second: u32) {
    let mut clock = FixedTimestep::new(ticks_per_second);
    let mut last = Instant::now();

    while engine.tick() < args.ticks {
        std::thread::sleep(clock.until_next().max(Duration::from_millis(1)));
        let now = Instant::now();
        let due = clock.advance(now - last);
        last = now;

        for _ in 0..due {
            if engine.tick() >= args.ticks {
                break;
            }
            step(engine, args);
        }
    }
}
