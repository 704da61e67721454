//! Trade opportunity evaluator.
//!
//! Each hub accumulates scaled tick time and, once per evaluation interval,
//! scans its stockpile against the resource registry to refresh its offer
//! book:
//! - surplus above the export threshold → post an export offer for half the
//!   overage at the export markup
//! - needed resource below the necessity threshold → post an import request
//!   for twice the threshold at the import markup
//!
//! "Needed" means an input of the entity's assigned recipe, or the configured
//! subsistence resource on settlement entities. Outstanding offers are never
//! replaced; at most one new offer per resource per direction per firing.

use bevy_app::App;
use bevy_ecs::query::Has;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res};

use crate::ecs::clock::SimClock;
use crate::ecs::components::{
    ProductionFacility, Settlement, SimEntity, Stockpile, TradeHub, TradeOffer,
};
use crate::ecs::resources::{MarketConfig, RecipeRegistry, ResourceRegistry};
use crate::ecs::schedule::{DomainSet, SimTick};

pub fn add_trade_systems(app: &mut App) {
    app.add_systems(SimTick, evaluate_trade_offers.in_set(DomainSet::Trade));
}

#[allow(clippy::type_complexity)]
fn evaluate_trade_offers(
    clock: Res<SimClock>,
    config: Res<MarketConfig>,
    resources: Res<ResourceRegistry>,
    recipes: Res<RecipeRegistry>,
    mut hubs: Query<(
        &SimEntity,
        &mut TradeHub,
        Option<&Stockpile>,
        Option<&ProductionFacility>,
        Has<Settlement>,
    )>,
) {
    for (sim, mut hub, stock, facility, is_settlement) in hubs.iter_mut() {
        if !hub.is_active {
            continue;
        }
        let Some(stock) = stock else {
            hub.is_active = false;
            tracing::warn!("trade hub '{}' has no stockpile; deactivating", sim.name);
            continue;
        };

        hub.eval_timer += clock.scaled_delta();
        if hub.eval_timer < config.eval_interval {
            continue;
        }
        // Reset to zero rather than subtracting the interval; overshoot from
        // irregular ticks is dropped.
        hub.eval_timer = 0.0;

        for (resource, def) in resources.iter() {
            let on_hand = stock.quantity(resource);
            let price = def.price();

            if on_hand > config.surplus_threshold && hub.export(resource).is_none() {
                let amount = ((on_hand - config.surplus_threshold) / 2.0).floor();
                if amount > 0.0 && stock.has(resource, amount) {
                    hub.post_offer(TradeOffer {
                        resource: resource.to_string(),
                        amount,
                        price_per_unit: price * config.export_markup,
                        is_export: true,
                    });
                }
            }

            if on_hand < config.necessity_threshold
                && hub.import(resource).is_none()
                && needs_resource(resource, facility, is_settlement, &recipes, &config)
            {
                hub.post_offer(TradeOffer {
                    resource: resource.to_string(),
                    amount: config.necessity_threshold * 2.0,
                    price_per_unit: price * config.import_markup,
                    is_export: false,
                });
            }
        }
    }
}

/// A resource is needed when it feeds the entity's assigned recipe, or when
/// it is the subsistence resource of a settlement.
fn needs_resource(
    resource: &str,
    facility: Option<&ProductionFacility>,
    is_settlement: bool,
    recipes: &RecipeRegistry,
    config: &MarketConfig,
) -> bool {
    if is_settlement && resource == config.subsistence_resource {
        return true;
    }
    facility
        .and_then(|f| f.recipe.as_deref())
        .and_then(|id| recipes.get(id))
        .is_some_and(|recipe| recipe.inputs.contains_key(resource))
}
