pub mod config;
pub mod entity_map;
pub mod factions;
pub mod registry;

pub use config::MarketConfig;
pub use entity_map::SimEntityMap;
pub use factions::FactionLedger;
pub use registry::{Recipe, RecipeRegistry, ResourceDef, ResourceRegistry};
