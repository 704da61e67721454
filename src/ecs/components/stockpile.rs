use std::collections::BTreeMap;

use bevy_ecs::component::Component;

/// Per-entity resource ledger: resource id to on-hand quantity.
///
/// Quantities are fractional and never negative; an absent key reads as zero.
/// All mutation goes through [`add`](Stockpile::add) and
/// [`remove`](Stockpile::remove), which reject non-positive amounts and
/// refuse to overdraw, so the map can never hold a negative entry.
#[derive(Component, Debug, Clone, Default)]
pub struct Stockpile {
    contents: BTreeMap<String, f64>,
}

impl Stockpile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stockpile pre-seeded with the given quantities.
    /// Non-positive seed quantities are ignored.
    pub fn stocked(items: &[(&str, f64)]) -> Self {
        let mut stock = Self::new();
        for &(resource, quantity) in items {
            stock.add(resource, quantity);
        }
        stock
    }

    /// On-hand quantity, zero for unknown resources.
    pub fn quantity(&self, resource: &str) -> f64 {
        self.contents.get(resource).copied().unwrap_or(0.0)
    }

    /// Whether at least `amount` is on hand. A non-positive request is
    /// always satisfiable.
    pub fn has(&self, resource: &str, amount: f64) -> bool {
        if amount <= 0.0 {
            return true;
        }
        self.quantity(resource) >= amount
    }

    /// Credit `amount` of `resource`. Returns false (no mutation) for
    /// non-positive amounts. No capacity ceiling is enforced.
    pub fn add(&mut self, resource: &str, amount: f64) -> bool {
        if amount <= 0.0 {
            return false;
        }
        *self.contents.entry(resource.to_string()).or_insert(0.0) += amount;
        true
    }

    /// Debit `amount` of `resource`. Returns false (no mutation) for
    /// non-positive amounts or insufficient stock.
    pub fn remove(&mut self, resource: &str, amount: f64) -> bool {
        if amount <= 0.0 || !self.has(resource, amount) {
            return false;
        }
        if let Some(quantity) = self.contents.get_mut(resource) {
            *quantity -= amount;
        }
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.contents.iter().map(|(id, &qty)| (id.as_str(), qty))
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}
