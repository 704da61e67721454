use bevy_app::{App, Plugin};

use super::systems::{add_production_systems, add_trade_systems};

/// Aggregate plugin installing both simulation domains: production first,
/// trade second (ordering enforced by `DomainSet`).
pub struct MarketPlugin;

impl Plugin for MarketPlugin {
    fn build(&self, app: &mut App) {
        add_production_systems(app);
        add_trade_systems(app);
    }
}
