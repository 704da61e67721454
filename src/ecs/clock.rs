use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

/// Simulation clock resource tracking continuous sim time in seconds.
///
/// The host sets the frame's `delta` via [`SimClock::begin_tick`] before
/// running the `SimTick` schedule. The `advance_clock` system moves the clock
/// forward at the end of each tick (in `SimPhase::Last`), so systems see the
/// current time before it advances. `speed` is a global time multiplier
/// applied to every delta.
#[derive(Resource, Debug, Clone)]
pub struct SimClock {
    time: f64,
    pub delta: f64,
    pub speed: f64,
    pub tick_count: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self {
            time: 0.0,
            delta: 0.0,
            speed: 1.0,
            tick_count: 0,
        }
    }

    /// Set the wall-delta for the upcoming tick.
    pub fn begin_tick(&mut self, delta: f64) {
        self.delta = delta;
    }

    /// Current simulation time in seconds.
    pub fn now(&self) -> f64 {
        self.time
    }

    /// This tick's delta with the speed multiplier applied.
    pub fn scaled_delta(&self) -> f64 {
        self.delta * self.speed
    }

    /// Advance the clock by the scaled delta.
    pub fn advance(&mut self) {
        self.time += self.scaled_delta();
        self.tick_count += 1;
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Bevy system that advances the simulation clock.
/// Registered in `SimPhase::Last` so all other systems see the current
/// time before it advances.
pub fn advance_clock(mut clock: ResMut<SimClock>) {
    clock.advance();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clock_starts_at_zero() {
        let clock = SimClock::new();
        assert_eq!(clock.now(), 0.0);
        assert_eq!(clock.tick_count, 0);
        assert_eq!(clock.speed, 1.0);
    }

    #[test]
    fn advance_applies_delta() {
        let mut clock = SimClock::new();
        clock.begin_tick(0.5);
        clock.advance();
        assert_eq!(clock.now(), 0.5);
        assert_eq!(clock.tick_count, 1);
    }

    #[test]
    fn speed_multiplies_delta() {
        let mut clock = SimClock::new();
        clock.speed = 4.0;
        clock.begin_tick(0.25);
        assert_eq!(clock.scaled_delta(), 1.0);
        clock.advance();
        assert_eq!(clock.now(), 1.0);
    }

    #[test]
    fn systems_see_pre_advance_time() {
        // advance() runs in Last, so a tick's delta lands on the clock only
        // after the tick's systems have read `now()`.
        let mut clock = SimClock::new();
        clock.begin_tick(1.0);
        let seen = clock.now();
        clock.advance();
        assert_eq!(seen, 0.0);
        assert_eq!(clock.now(), 1.0);
    }

    #[test]
    fn varying_deltas_accumulate() {
        let mut clock = SimClock::new();
        for delta in [0.1, 0.3, 0.6] {
            clock.begin_tick(delta);
            clock.advance();
        }
        assert!((clock.now() - 1.0).abs() < 1e-9);
        assert_eq!(clock.tick_count, 3);
    }
}
