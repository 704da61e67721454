use bevy_app::App;

use crate::ecs::clock::SimClock;
use crate::ecs::schedule::SimTick;

/// Run `n` ticks with a fixed per-tick delta in seconds.
pub fn run_ticks(app: &mut App, n: u32, delta: f64) {
    for _ in 0..n {
        app.world_mut().resource_mut::<SimClock>().begin_tick(delta);
        app.world_mut().run_schedule(SimTick);
    }
}

/// Current simulation time from the clock resource.
pub fn sim_time(app: &App) -> f64 {
    app.world().resource::<SimClock>().now()
}
