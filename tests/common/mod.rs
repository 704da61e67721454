#![allow(dead_code)]

use bevy_app::App;
use market_sim::ecs::build_market_app;
use market_sim::{MarketPlugin, ResourceRegistry};

/// A market app with both domain plugins installed.
pub fn market_app() -> App {
    let mut app = build_market_app();
    app.add_plugins(MarketPlugin);
    app
}

/// Register resources with base values and no live market price.
pub fn define_resources(app: &mut App, defs: &[(&str, f64)]) {
    let mut registry = app.world_mut().resource_mut::<ResourceRegistry>();
    for &(id, base_value) in defs {
        registry.define(id, base_value);
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
