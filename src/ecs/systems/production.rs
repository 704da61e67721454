//! Production system: per-facility recipe consumption.
//!
//! Each tick a facility with an assigned recipe either waits for inputs,
//! advances its current cycle, or completes it:
//! - idle + all inputs on hand → consume the full input set, start the cycle
//! - idle + anything missing → wait, progress stays at zero
//! - in cycle → progress by `delta * speed`; at the recipe's duration, credit
//!   the outputs and return to idle
//!
//! A facility whose entity lacks a stockpile, or whose recipe id does not
//! resolve, deactivates itself with a warning instead of crashing.

use bevy_app::App;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res};

use crate::ecs::clock::SimClock;
use crate::ecs::components::{ProductionFacility, SimEntity, Stockpile};
use crate::ecs::resources::RecipeRegistry;
use crate::ecs::schedule::{DomainSet, SimTick};

pub fn add_production_systems(app: &mut App) {
    app.add_systems(SimTick, update_production.in_set(DomainSet::Production));
}

fn update_production(
    clock: Res<SimClock>,
    recipes: Res<RecipeRegistry>,
    mut facilities: Query<(&SimEntity, &mut ProductionFacility, Option<&mut Stockpile>)>,
) {
    for (sim, mut facility, stock) in facilities.iter_mut() {
        if !facility.is_active {
            continue;
        }
        let Some(mut stock) = stock else {
            facility.is_active = false;
            tracing::warn!("facility '{}' has no stockpile; deactivating", sim.name);
            continue;
        };
        let Some(recipe_id) = facility.recipe.clone() else {
            continue;
        };
        let Some(recipe) = recipes.get(&recipe_id) else {
            facility.recipe = None;
            facility.is_active = false;
            tracing::warn!(
                "facility '{}' assigned unknown recipe '{}'; deactivating",
                sim.name,
                recipe_id
            );
            continue;
        };

        if !facility.in_cycle {
            let affordable = recipe.inputs.iter().all(|(res, &qty)| stock.has(res, qty));
            if !affordable {
                continue;
            }
            for (res, &qty) in &recipe.inputs {
                stock.remove(res, qty);
            }
            facility.in_cycle = true;
            facility.progress = 0.0;
        }

        facility.progress += clock.scaled_delta();
        if facility.progress >= recipe.duration {
            for (res, &qty) in &recipe.outputs {
                stock.add(res, qty);
            }
            facility.in_cycle = false;
            facility.progress = 0.0;
        }
    }
}
