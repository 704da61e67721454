mod common;

use market_sim::ecs::spawn::{spawn_settlement, spawn_workshop};
use market_sim::ecs::test_helpers::run_ticks;
use market_sim::{
    ProductionFacility, Recipe, RecipeRegistry, ResourceRegistry, SimClock, SimEntity, Stockpile,
    TradeHub,
};
use std::collections::BTreeMap;

use common::{approx, define_resources, market_app};

fn smelting_recipes() -> RecipeRegistry {
    let mut recipes = RecipeRegistry::new();
    recipes.insert(
        "smelt_iron",
        Recipe {
            inputs: BTreeMap::from([("ore".to_string(), 10.0)]),
            outputs: BTreeMap::from([("iron".to_string(), 4.0)]),
            duration: 30.0,
        },
    );
    recipes
}

#[test]
fn surplus_creates_export_offer_at_marked_up_market_price() {
    let mut app = market_app();
    define_resources(&mut app, &[("iron", 2.0)]);
    app.world_mut()
        .resource_mut::<ResourceRegistry>()
        .set_market_price("iron", 10.0);
    let hub = spawn_settlement(
        app.world_mut(),
        1,
        "Ironvale".to_string(),
        1,
        Stockpile::stocked(&[("iron", 80.0)]),
        TradeHub::new(),
    );

    // One full evaluation interval of 60 sim-seconds.
    run_ticks(&mut app, 60, 1.0);

    let book = app.world().get::<TradeHub>(hub).unwrap();
    let offer = book.export("iron").expect("surplus should be offered");
    // floor((80 - 50) / 2) = 15 units at 10 * 1.10 = 11.
    assert!(approx(offer.amount, 15.0));
    assert!(approx(offer.price_per_unit, 11.0));
    assert!(book.import("iron").is_none());
}

#[test]
fn export_price_falls_back_to_base_value() {
    let mut app = market_app();
    define_resources(&mut app, &[("iron", 10.0)]);
    let hub = spawn_settlement(
        app.world_mut(),
        1,
        "Ironvale".to_string(),
        1,
        Stockpile::stocked(&[("iron", 80.0)]),
        TradeHub::new(),
    );
    run_ticks(&mut app, 60, 1.0);
    let book = app.world().get::<TradeHub>(hub).unwrap();
    assert!(approx(book.export("iron").unwrap().price_per_unit, 11.0));
}

#[test]
fn marginal_surplus_creates_no_zero_amount_offer() {
    let mut app = market_app();
    define_resources(&mut app, &[("iron", 10.0)]);
    // floor((51 - 50) / 2) = 0: no offer may enter the book.
    let hub = spawn_settlement(
        app.world_mut(),
        1,
        "Ironvale".to_string(),
        1,
        Stockpile::stocked(&[("iron", 51.0)]),
        TradeHub::new(),
    );
    run_ticks(&mut app, 60, 1.0);
    assert!(app.world().get::<TradeHub>(hub).unwrap().export("iron").is_none());
}

#[test]
fn evaluator_is_idempotent_within_and_across_intervals() {
    let mut app = market_app();
    define_resources(&mut app, &[("iron", 10.0)]);
    let hub = spawn_settlement(
        app.world_mut(),
        1,
        "Ironvale".to_string(),
        1,
        Stockpile::stocked(&[("iron", 80.0)]),
        TradeHub::new(),
    );

    run_ticks(&mut app, 60, 1.0);
    let amount = app
        .world()
        .get::<TradeHub>(hub)
        .unwrap()
        .export("iron")
        .unwrap()
        .amount;

    // Mid-window: the accumulator has not refilled, nothing may change.
    run_ticks(&mut app, 30, 1.0);
    let book = app.world().get::<TradeHub>(hub).unwrap();
    assert!(approx(book.export("iron").unwrap().amount, amount));
    assert_eq!(book.exports().count(), 1);

    // Next firing: the offer is still outstanding and must not be replaced.
    run_ticks(&mut app, 30, 1.0);
    let book = app.world().get::<TradeHub>(hub).unwrap();
    assert!(approx(book.export("iron").unwrap().amount, amount));
    assert_eq!(book.exports().count(), 1);
}

#[test]
fn settlement_requests_subsistence_import_when_low() {
    let mut app = market_app();
    define_resources(&mut app, &[("food", 1.0), ("wood", 5.0)]);
    let hub = spawn_settlement(
        app.world_mut(),
        1,
        "Briarwick".to_string(),
        1,
        Stockpile::stocked(&[("food", 5.0), ("wood", 3.0)]),
        TradeHub::new(),
    );
    run_ticks(&mut app, 60, 1.0);

    let book = app.world().get::<TradeHub>(hub).unwrap();
    let request = book.import("food").expect("low food should be requested");
    // 2 x necessity threshold at 1.0 * 1.20.
    assert!(approx(request.amount, 20.0));
    assert!(approx(request.price_per_unit, 1.2));
    // Wood is scarce too but nothing here needs it.
    assert!(book.import("wood").is_none());
}

#[test]
fn workshop_requests_recipe_inputs_when_low() {
    let mut app = market_app();
    define_resources(&mut app, &[("ore", 2.0), ("iron", 10.0)]);
    app.insert_resource(smelting_recipes());
    let hub = spawn_workshop(
        app.world_mut(),
        1,
        "Smeltery".to_string(),
        1,
        Stockpile::new(),
        ProductionFacility::with_recipe("smelt_iron"),
        TradeHub::new(),
    );
    run_ticks(&mut app, 60, 1.0);

    let book = app.world().get::<TradeHub>(hub).unwrap();
    let request = book.import("ore").expect("recipe input should be requested");
    assert!(approx(request.amount, 20.0));
    assert!(approx(request.price_per_unit, 2.4));
    // Output resource is low too, but it is not an input.
    assert!(book.import("iron").is_none());
}

#[test]
fn no_evaluation_before_the_interval_elapses() {
    let mut app = market_app();
    define_resources(&mut app, &[("iron", 10.0)]);
    let hub = spawn_settlement(
        app.world_mut(),
        1,
        "Ironvale".to_string(),
        1,
        Stockpile::stocked(&[("iron", 80.0)]),
        TradeHub::new(),
    );
    run_ticks(&mut app, 59, 1.0);
    assert!(app.world().get::<TradeHub>(hub).unwrap().export("iron").is_none());
    run_ticks(&mut app, 1, 1.0);
    assert!(app.world().get::<TradeHub>(hub).unwrap().export("iron").is_some());
}

#[test]
fn speed_multiplier_scales_the_evaluation_cadence() {
    let mut app = market_app();
    define_resources(&mut app, &[("iron", 10.0)]);
    app.world_mut().resource_mut::<SimClock>().speed = 2.0;
    let hub = spawn_settlement(
        app.world_mut(),
        1,
        "Ironvale".to_string(),
        1,
        Stockpile::stocked(&[("iron", 80.0)]),
        TradeHub::new(),
    );
    // 30 ticks of 1.0 at speed 2.0 accumulate the full 60 sim-seconds.
    run_ticks(&mut app, 30, 1.0);
    assert!(app.world().get::<TradeHub>(hub).unwrap().export("iron").is_some());
}

#[test]
fn overshoot_is_dropped_on_firing() {
    let mut app = market_app();
    define_resources(&mut app, &[("iron", 10.0)]);
    let hub = spawn_settlement(
        app.world_mut(),
        1,
        "Ironvale".to_string(),
        1,
        Stockpile::stocked(&[("iron", 80.0)]),
        TradeHub::new(),
    );
    // Two 45-second ticks: fires at 90 accumulated, then resets to zero;
    // the 30-second overshoot is not carried forward.
    run_ticks(&mut app, 2, 45.0);
    let hub_state = app.world().get::<TradeHub>(hub).unwrap();
    assert!(hub_state.export("iron").is_some());
    assert!(approx(hub_state.eval_timer, 0.0));
}

#[test]
fn hub_without_stockpile_deactivates_with_no_offers() {
    let mut app = market_app();
    define_resources(&mut app, &[("iron", 10.0)]);
    let hub = app
        .world_mut()
        .spawn((
            SimEntity {
                id: 1,
                name: "Ghost Market".to_string(),
            },
            TradeHub::new(),
        ))
        .id();
    run_ticks(&mut app, 60, 1.0);
    let hub_state = app.world().get::<TradeHub>(hub).unwrap();
    assert!(!hub_state.is_active);
    assert_eq!(hub_state.exports().count(), 0);
    assert_eq!(hub_state.imports().count(), 0);
}
