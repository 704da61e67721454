use bevy_ecs::component::Component;

/// Core identity component present on every simulated entity.
#[derive(Component, Debug, Clone)]
pub struct SimEntity {
    pub id: u64,
    pub name: String,
}

/// Faction membership. The faction's balance lives in the
/// [`FactionLedger`](crate::ecs::resources::FactionLedger) resource, keyed by
/// this id; a faction is shared by every entity carrying the same id.
#[derive(Component, Debug, Clone, Copy)]
pub struct Allegiance {
    pub faction: u64,
}

/// Marks a settlement-type entity: its population consumes the configured
/// subsistence resource, which makes that resource eligible for import
/// requests when stocks run low.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Settlement;
