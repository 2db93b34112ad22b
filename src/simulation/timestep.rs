use std::time::Duration;

/// Fixed-timestep accumulator: decouples the simulation tick rate from
/// however often the caller wakes up (frame rate).
#[derive(Clone, Debug)]
pub struct FixedTimestep {
    step: Duration,
    accumulator: Duration,
}

impl FixedTimestep {
    /// Clock producing `ticks_per_second` ticks; 0 is treated as 1
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            step: Duration::from_secs(1) / ticks_per_second.max(1),
            accumulator: Duration::ZERO,
        }
    }

    /// Duration of one tick
    #[inline]
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Feed elapsed wall time, returns how many ticks are now due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut due = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            due += 1;
        }
        due
    }

    /// Fraction of the way to the next tick, in `[0, 1)`.
    /// A frame renderer passes this to `Ant::lerp` to draw ants between cells;
    /// the headless binary only paces ticks and does not use it.
    pub fn alpha(&self) -> f64 {
        self.accumulator.as_secs_f64() / self.step.as_secs_f64()
    }

    /// Wall time left until the next tick is due
    pub fn until_next(&self) -> Duration {
        self.step.saturating_sub(self.accumulator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_due() {
        let mut clock = FixedTimestep::new(10);
        assert_eq!(clock.step(), Duration::from_millis(100));

        assert_eq!(clock.advance(Duration::from_millis(50)), 0);
        assert!((clock.alpha() - 0.5).abs() < 1e-9);

        assert_eq!(clock.advance(Duration::from_millis(260)), 3);
        assert!((clock.alpha() - 0.1).abs() < 1e-9);
        assert_eq!(clock.until_next(), Duration::from_millis(90));
    }

    #[test]
    fn test_alpha_drives_ant_interpolation() {
        use crate::ant::Ant;
        use crate::world::Cell;

        let mut ant = Ant::new(0, Cell::new(4, 4));
        ant.mark_prev();
        ant.move_to(Cell::new(5, 4));

        let mut clock = FixedTimestep::new(4);
        clock.advance(Duration::from_millis(375));
        let (x, y) = ant.lerp(clock.alpha());
        assert!((x - 4.5).abs() < 1e-9);
        assert_eq!(y, 4.0);
    }

    #[test]
    fn test_zero_rate_does_not_divide_by_zero() {
        let mut clock = FixedTimestep::new(0);
        assert_eq!(clock.step(), Duration::from_secs(1));
        assert_eq!(clock.advance(Duration::from_millis(2500)), 2);
    }
}
