use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::{
    Allegiance, ProductionFacility, Settlement, SimEntity, Stockpile, TradeHub,
};
use crate::ecs::resources::SimEntityMap;

fn register(world: &mut World, id: u64, entity: Entity) {
    if let Some(mut map) = world.get_resource_mut::<SimEntityMap>() {
        map.insert(id, entity);
    }
}

/// Spawn a settlement: a trading entity whose population consumes the
/// subsistence resource.
pub fn spawn_settlement(
    world: &mut World,
    id: u64,
    name: String,
    faction: u64,
    stock: Stockpile,
    hub: TradeHub,
) -> Entity {
    let entity = world
        .spawn((
            SimEntity { id, name },
            Settlement,
            Allegiance { faction },
            stock,
            hub,
        ))
        .id();
    register(world, id, entity);
    entity
}

/// Spawn a workshop: a producing, trading entity with an assigned recipe.
pub fn spawn_workshop(
    world: &mut World,
    id: u64,
    name: String,
    faction: u64,
    stock: Stockpile,
    facility: ProductionFacility,
    hub: TradeHub,
) -> Entity {
    let entity = world
        .spawn((
            SimEntity { id, name },
            Allegiance { faction },
            stock,
            facility,
            hub,
        ))
        .id();
    register(world, id, entity);
    entity
}
