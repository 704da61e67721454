pub mod app;
pub mod clock;
pub mod components;
pub mod plugin;
pub mod resources;
pub mod schedule;
pub mod settlement;
pub mod spawn;
pub mod systems;
pub mod test_helpers;

pub use app::build_market_app;
pub use clock::SimClock;
pub use components::{
    Allegiance, ProductionFacility, Settlement, SimEntity, Stockpile, TradeHub, TradeLogEntry,
    TradeOffer,
};
pub use plugin::MarketPlugin;
pub use resources::{
    FactionLedger, MarketConfig, Recipe, RecipeRegistry, ResourceDef, ResourceRegistry,
    SimEntityMap,
};
pub use schedule::{DomainSet, SimPhase, SimTick, configure_sim_schedule};
pub use settlement::settle;
