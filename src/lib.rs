pub mod ecs;

pub use ecs::{
    Allegiance, FactionLedger, MarketConfig, MarketPlugin, ProductionFacility, Recipe,
    RecipeRegistry, ResourceDef, ResourceRegistry, Settlement, SimClock, SimEntity, Stockpile,
    TradeHub, TradeLogEntry, TradeOffer, build_market_app, settle,
};
