use bevy_app::App;
use bevy_ecs::schedule::ExecutorKind;

use super::clock::SimClock;
use super::resources::{FactionLedger, MarketConfig, RecipeRegistry, ResourceRegistry, SimEntityMap};
use super::schedule::configure_sim_schedule;

/// Build a headless app with the simulation clock, market registries, and
/// the configured `SimTick` schedule. Domain systems are installed
/// separately via [`MarketPlugin`](crate::ecs::plugin::MarketPlugin).
///
/// Manual tick control:
/// ```no_run
/// # use market_sim::ecs::{build_market_app, MarketPlugin, SimClock, SimTick};
/// let mut app = build_market_app();
/// app.add_plugins(MarketPlugin);
/// for _ in 0..600 {
///     app.world_mut().resource_mut::<SimClock>().begin_tick(0.1);
///     app.world_mut().run_schedule(SimTick);
/// }
/// ```
pub fn build_market_app() -> App {
    build_market_app_with(MarketConfig::default())
}

/// Build a headless app with explicit market tunables.
pub fn build_market_app_with(config: MarketConfig) -> App {
    let mut app = App::empty();

    app.insert_resource(SimClock::new());
    app.insert_resource(config);
    app.init_resource::<ResourceRegistry>();
    app.init_resource::<RecipeRegistry>();
    app.init_resource::<FactionLedger>();
    app.insert_resource(SimEntityMap::new());

    // Settlements within a tick must be serialized (the settlement engine is
    // check-then-mutate with no internal locking), so the tick executor is
    // single-threaded.
    app.add_schedule(configure_sim_schedule(ExecutorKind::SingleThreaded));
    app
}
