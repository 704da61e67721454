use std::collections::BTreeMap;

use bevy_ecs::entity::Entity;
use market_sim::ecs::spawn::{spawn_settlement, spawn_workshop};
use market_sim::ecs::test_helpers::run_ticks;
use market_sim::{
    FactionLedger, MarketPlugin, ProductionFacility, Recipe, RecipeRegistry, ResourceRegistry,
    SimEntity, Stockpile, TradeHub, TradeOffer, build_market_app, settle,
};
use rand::Rng;

fn main() {
    let mut rng = rand::rng();
    let mut app = build_market_app();
    app.add_plugins(MarketPlugin);

    {
        let mut resources = app.world_mut().resource_mut::<ResourceRegistry>();
        resources.define("food", 1.0);
        resources.define("wood", 5.0);
        resources.define("ore", 2.0);
        resources.define("iron", 10.0);
    }
    {
        let mut recipes = app.world_mut().resource_mut::<RecipeRegistry>();
        recipes.insert(
            "smelt_iron",
            Recipe {
                inputs: BTreeMap::from([("ore".to_string(), 10.0)]),
                outputs: BTreeMap::from([("iron".to_string(), 4.0)]),
                duration: 30.0,
            },
        );
    }

    let names = ["Ashford", "Briarwick", "Caldera", "Dunmore"];
    for (i, name) in names.iter().enumerate() {
        let stock = Stockpile::stocked(&[
            ("food", rng.random_range(0.0..120.0)),
            ("wood", rng.random_range(0.0..120.0)),
            ("ore", rng.random_range(0.0..120.0)),
        ]);
        spawn_settlement(
            app.world_mut(),
            i as u64 + 1,
            name.to_string(),
            (i % 2) as u64 + 1,
            stock,
            TradeHub::with_range(250.0),
        );
    }
    spawn_workshop(
        app.world_mut(),
        10,
        "Smeltery".to_string(),
        1,
        Stockpile::stocked(&[("ore", rng.random_range(0.0..40.0))]),
        ProductionFacility::with_recipe("smelt_iron"),
        TradeHub::new(),
    );

    // Ten evaluation rounds: tick one interval, then play matchmaker over
    // the books.
    for round in 0..10 {
        run_ticks(&mut app, 60, 1.0);

        let world = app.world_mut();
        let mut query = world.query::<(Entity, &TradeHub)>();
        let exports: Vec<(Entity, TradeOffer)> = query
            .iter(world)
            .flat_map(|(entity, hub)| hub.exports().cloned().map(move |o| (entity, o)))
            .collect();
        let hubs: Vec<Entity> = query.iter(world).map(|(entity, _)| entity).collect();

        let mut settled = 0;
        for (exporter, offer) in &exports {
            for &importer in &hubs {
                if importer != *exporter && settle(world, importer, *exporter, offer) {
                    settled += 1;
                }
            }
        }
        eprintln!("round {round}: {settled} settlements");
    }

    let world = app.world_mut();
    for (id, balance) in world.resource::<FactionLedger>().iter() {
        eprintln!("faction {id}: balance {balance:.1}");
    }
    let mut query = world.query::<(&SimEntity, &TradeHub, &Stockpile)>();
    for (sim, hub, stock) in query.iter(world) {
        let holdings: Vec<String> = stock
            .iter()
            .map(|(res, qty)| format!("{res}={qty:.0}"))
            .collect();
        eprintln!("{} [{}] ({} log entries):", sim.name, holdings.join(", "), hub.log().len());
        for entry in hub.log().iter().take(5) {
            eprintln!("  [{:>6.0}s] {}", entry.time, entry.message);
        }
    }
}
