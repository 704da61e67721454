//! Trade settlement engine.
//!
//! [`settle`] converts a matched offer pair into the four ledger mutations of
//! one bilateral trade: exporter stockpile debit, importer stockpile credit,
//! importer faction debit, exporter faction credit. Every precondition is
//! validated before the first mutation, and the function holds exclusive
//! world access for its whole body, so a trade either fully applies or leaves
//! all four records untouched.
//!
//! Matching itself is the caller's concern; the engine is handed two hubs
//! and the candidate offer to accept.

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::clock::SimClock;
use crate::ecs::components::{Allegiance, SimEntity, Stockpile, TradeHub, TradeOffer};
use crate::ecs::resources::{FactionLedger, MarketConfig};

/// Settle a trade between `hub_a` (the accepting side) and `hub_b` (the side
/// whose posted `offer` is being accepted).
///
/// With `offer.is_export` true, `hub_a` imports against `hub_b`'s export
/// offer; otherwise `hub_a` exports against `hub_b`'s import request. The
/// traded quantity is the smaller of the two posted amounts and the price is
/// the originator's posted price; the accepting side's own price only gates
/// eligibility (an importer never pays above its stated ceiling, an exporter
/// never sells below its ask).
///
/// Returns false, with no mutation anywhere, when any precondition fails:
/// either book entry is gone, the prices are incompatible, the exporter
/// cannot cover the quantity, the importer's faction cannot cover the cost,
/// or either entity lacks a required capability.
pub fn settle(world: &mut World, hub_a: Entity, hub_b: Entity, offer: &TradeOffer) -> bool {
    let now = world.resource::<SimClock>().now();
    let (starting_balance, log_capacity) = {
        let config = world.resource::<MarketConfig>();
        (config.starting_balance, config.log_capacity)
    };
    let resource = offer.resource.as_str();

    let (importer, exporter) = if offer.is_export {
        (hub_a, hub_b)
    } else {
        (hub_b, hub_a)
    };

    // Capability checks: both sides need a hub, a stockpile, and a faction.
    let Some(importer_faction) = faction_of(world, importer) else {
        return false;
    };
    let Some(exporter_faction) = faction_of(world, exporter) else {
        return false;
    };
    if world.get::<Stockpile>(importer).is_none() || world.get::<Stockpile>(exporter).is_none() {
        warn_missing(world, importer, exporter, "stockpile");
        return false;
    }

    // Both book entries must still be live: the originator's posted offer on
    // hub_b and the accepting side's counter-offer on hub_a.
    let Some((posted_amount, posted_price)) =
        book_entry(world, hub_b, resource, offer.is_export)
    else {
        return false;
    };
    let Some((counter_amount, counter_price)) =
        book_entry(world, hub_a, resource, !offer.is_export)
    else {
        return false;
    };

    // The importer's ceiling must cover the exporter's ask.
    let (ask, ceiling) = if offer.is_export {
        (posted_price, counter_price)
    } else {
        (counter_price, posted_price)
    };
    if ceiling < ask {
        return false;
    }

    let quantity = posted_amount.min(counter_amount);
    let total = quantity * posted_price;

    let Some(exporter_stock) = world.get::<Stockpile>(exporter) else {
        return false;
    };
    if !exporter_stock.has(resource, quantity) {
        return false;
    }

    // Funds check before any inventory mutation; both factions are lazily
    // initialized here on first touch.
    {
        let mut ledger = world.resource_mut::<FactionLedger>();
        ledger.ensure(exporter_faction, starting_balance);
        if ledger.ensure(importer_faction, starting_balance) < total {
            return false;
        }
    }

    // -- Mutation phase. Inventory debit first: if stock vanished between
    // check and debit nothing else has been touched yet.
    {
        let Some(mut stock) = world.get_mut::<Stockpile>(exporter) else {
            return false;
        };
        if !stock.remove(resource, quantity) {
            return false;
        }
    }
    if let Some(mut stock) = world.get_mut::<Stockpile>(importer) {
        stock.add(resource, quantity);
    }
    {
        let mut ledger = world.resource_mut::<FactionLedger>();
        ledger.debit(importer_faction, total);
        ledger.credit(exporter_faction, total);
    }

    // Both books shrink by the settled quantity; drained entries disappear.
    // Each hub records the trade from its own perspective.
    if let Some(mut hub) = world.get_mut::<TradeHub>(importer) {
        hub.fill(resource, false, quantity);
        hub.record(
            now,
            format!("Imported {quantity} {resource} for {total}"),
            log_capacity,
        );
    }
    if let Some(mut hub) = world.get_mut::<TradeHub>(exporter) {
        hub.fill(resource, true, quantity);
        hub.record(
            now,
            format!("Exported {quantity} {resource} for {total}"),
            log_capacity,
        );
    }

    true
}

fn faction_of(world: &World, entity: Entity) -> Option<u64> {
    match world.get::<Allegiance>(entity) {
        Some(allegiance) => Some(allegiance.faction),
        None => {
            let name = world
                .get::<SimEntity>(entity)
                .map(|sim| sim.name.clone())
                .unwrap_or_else(|| format!("{entity:?}"));
            tracing::warn!("trade party '{name}' has no faction; settlement refused");
            None
        }
    }
}

fn book_entry(
    world: &World,
    hub: Entity,
    resource: &str,
    is_export: bool,
) -> Option<(f64, f64)> {
    world
        .get::<TradeHub>(hub)?
        .entry(resource, is_export)
        .map(|offer| (offer.amount, offer.price_per_unit))
}

fn warn_missing(world: &World, importer: Entity, exporter: Entity, what: &str) {
    for entity in [importer, exporter] {
        if world.get::<Stockpile>(entity).is_none() {
            let name = world
                .get::<SimEntity>(entity)
                .map(|sim| sim.name.clone())
                .unwrap_or_else(|| format!("{entity:?}"));
            tracing::warn!("trade party '{name}' has no {what}; settlement refused");
        }
    }
}
