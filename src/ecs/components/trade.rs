use std::collections::{BTreeMap, VecDeque};

use bevy_ecs::component::Component;

/// A standing willingness to sell (`is_export`) or buy a quantity of one
/// resource at a per-unit price.
///
/// For an export offer the hub sells `amount` at `price_per_unit`; for an
/// import request it buys up to `amount` at up to `price_per_unit`.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeOffer {
    pub resource: String,
    pub amount: f64,
    pub price_per_unit: f64,
    pub is_export: bool,
}

/// One line of a hub's transaction history, stamped with sim time.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeLogEntry {
    pub time: f64,
    pub message: String,
}

/// Trade capability: the offer book, the evaluation timer, and a bounded
/// transaction history.
///
/// The book holds at most one export offer and one import request per
/// resource, and a present offer always has `amount > 0`: fills that drain
/// an offer remove it. An active offer never changes price or direction; it
/// has to be drained or removed and reposted.
#[derive(Component, Debug, Clone)]
pub struct TradeHub {
    pub is_active: bool,
    /// Declared trade reach. Matching does not consult it.
    pub trade_range: f64,
    /// Accumulated scaled seconds since the last offer evaluation.
    pub eval_timer: f64,
    exports: BTreeMap<String, TradeOffer>,
    imports: BTreeMap<String, TradeOffer>,
    log: VecDeque<TradeLogEntry>,
}

impl TradeHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(trade_range: f64) -> Self {
        Self {
            trade_range,
            ..Self::default()
        }
    }

    /// The live export offer for `resource`, if any.
    pub fn export(&self, resource: &str) -> Option<&TradeOffer> {
        self.exports.get(resource)
    }

    /// The live import request for `resource`, if any.
    pub fn import(&self, resource: &str) -> Option<&TradeOffer> {
        self.imports.get(resource)
    }

    /// Book entry for one resource/direction.
    pub fn entry(&self, resource: &str, is_export: bool) -> Option<&TradeOffer> {
        if is_export {
            self.export(resource)
        } else {
            self.import(resource)
        }
    }

    pub fn exports(&self) -> impl Iterator<Item = &TradeOffer> {
        self.exports.values()
    }

    pub fn imports(&self) -> impl Iterator<Item = &TradeOffer> {
        self.imports.values()
    }

    /// Post an offer into the book. Rejected (returns false, book untouched)
    /// when the amount is non-positive or an offer for that resource and
    /// direction is already outstanding.
    pub fn post_offer(&mut self, offer: TradeOffer) -> bool {
        if offer.amount <= 0.0 {
            return false;
        }
        let book = if offer.is_export {
            &mut self.exports
        } else {
            &mut self.imports
        };
        if book.contains_key(&offer.resource) {
            return false;
        }
        book.insert(offer.resource.clone(), offer);
        true
    }

    /// Withdraw an offer regardless of remaining amount.
    pub fn retract_offer(&mut self, resource: &str, is_export: bool) -> Option<TradeOffer> {
        if is_export {
            self.exports.remove(resource)
        } else {
            self.imports.remove(resource)
        }
    }

    /// Reduce a book entry by a settled quantity, removing it once drained.
    pub fn fill(&mut self, resource: &str, is_export: bool, quantity: f64) {
        let book = if is_export {
            &mut self.exports
        } else {
            &mut self.imports
        };
        if let Some(offer) = book.get_mut(resource) {
            offer.amount -= quantity;
            if offer.amount <= 0.0 {
                book.remove(resource);
            }
        }
    }

    /// Append a transaction record, evicting the oldest past `capacity`.
    pub fn record(&mut self, time: f64, message: String, capacity: usize) {
        self.log.push_front(TradeLogEntry { time, message });
        while self.log.len() > capacity {
            self.log.pop_back();
        }
    }

    /// Transaction history, most recent first.
    pub fn log(&self) -> &VecDeque<TradeLogEntry> {
        &self.log
    }
}

impl Default for TradeHub {
    fn default() -> Self {
        Self {
            is_active: true,
            trade_range: 0.0,
            eval_timer: 0.0,
            exports: BTreeMap::new(),
            imports: BTreeMap::new(),
            log: VecDeque::new(),
        }
    }
}
