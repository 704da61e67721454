use std::collections::BTreeMap;

use bevy_ecs::resource::Resource;
use serde::Deserialize;

/// A tradeable resource definition: a base value and an optional live market
/// price. Pricing falls back to the base value until a market price is set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceDef {
    pub base_value: f64,
    #[serde(default)]
    pub market_price: Option<f64>,
}

impl ResourceDef {
    /// Current price: the live market price, or the base value fallback.
    pub fn price(&self) -> f64 {
        self.market_price.unwrap_or(self.base_value)
    }
}

/// Registry of every resource the simulation knows about, keyed by id.
#[derive(Resource, Debug, Clone, Default)]
pub struct ResourceRegistry {
    defs: BTreeMap<String, ResourceDef>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load definitions from a JSON object of `{ id: { base_value, market_price? } }`.
    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        let defs = serde_json::from_str(data)?;
        Ok(Self { defs })
    }

    /// Register a resource with a base value and no live market price.
    pub fn define(&mut self, id: impl Into<String>, base_value: f64) {
        self.defs.insert(
            id.into(),
            ResourceDef {
                base_value,
                market_price: None,
            },
        );
    }

    /// Set the live market price for a known resource. No-op for unknown ids.
    pub fn set_market_price(&mut self, id: &str, price: f64) {
        if let Some(def) = self.defs.get_mut(id) {
            def.market_price = Some(price);
        }
    }

    pub fn get(&self, id: &str) -> Option<&ResourceDef> {
        self.defs.get(id)
    }

    /// Current price for a resource, if it is known.
    pub fn price(&self, id: &str) -> Option<f64> {
        self.defs.get(id).map(ResourceDef::price)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResourceDef)> {
        self.defs.iter().map(|(id, def)| (id.as_str(), def))
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

/// A production transformation: consume `inputs`, wait `duration` sim-seconds,
/// credit `outputs`. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recipe {
    pub inputs: BTreeMap<String, f64>,
    pub outputs: BTreeMap<String, f64>,
    pub duration: f64,
}

/// Read-only registry of production recipes, keyed by id.
#[derive(Resource, Debug, Clone, Default)]
pub struct RecipeRegistry {
    recipes: BTreeMap<String, Recipe>,
}

impl RecipeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load recipes from a JSON object of `{ id: { inputs, outputs, duration } }`.
    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        let recipes = serde_json::from_str(data)?;
        Ok(Self { recipes })
    }

    pub fn insert(&mut self, id: impl Into<String>, recipe: Recipe) {
        self.recipes.insert(id.into(), recipe);
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Recipe)> {
        self.recipes.iter().map(|(id, recipe)| (id.as_str(), recipe))
    }
}
