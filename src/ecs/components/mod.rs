pub mod common;
pub mod production;
pub mod stockpile;
pub mod trade;

pub use common::{Allegiance, Settlement, SimEntity};
pub use production::ProductionFacility;
pub use stockpile::Stockpile;
pub use trade::{TradeHub, TradeLogEntry, TradeOffer};
