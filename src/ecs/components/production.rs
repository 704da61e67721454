use bevy_ecs::component::Component;

/// A production facility transforming input resources into outputs via an
/// assigned recipe.
///
/// A cycle begins only once every input is on hand; the full input set is
/// consumed up front, `progress` then accumulates scaled tick time until it
/// reaches the recipe's duration, and the outputs are credited. A facility
/// that cannot afford its inputs waits with `progress` at zero.
#[derive(Component, Debug, Clone)]
pub struct ProductionFacility {
    pub recipe: Option<String>,
    pub progress: f64,
    pub in_cycle: bool,
    pub is_active: bool,
}

impl ProductionFacility {
    pub fn with_recipe(recipe: impl Into<String>) -> Self {
        Self {
            recipe: Some(recipe.into()),
            ..Self::default()
        }
    }
}

impl Default for ProductionFacility {
    fn default() -> Self {
        Self {
            recipe: None,
            progress: 0.0,
            in_cycle: false,
            is_active: true,
        }
    }
}
