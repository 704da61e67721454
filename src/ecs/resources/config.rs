use bevy_ecs::resource::Resource;
use serde::Deserialize;

/// Market tunables. Defaults match the shipped balance numbers; scenario data
/// can override any subset via serde.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// On-hand quantity above which a hub offers its surplus for export.
    pub surplus_threshold: f64,
    /// On-hand quantity below which a needed resource triggers an import
    /// request.
    pub necessity_threshold: f64,
    /// Sim-seconds between offer evaluations per hub.
    pub eval_interval: f64,
    /// Export offers are priced at market price times this markup.
    pub export_markup: f64,
    /// Import requests accept up to market price times this markup.
    pub import_markup: f64,
    /// Balance a faction starts with on first ledger access.
    pub starting_balance: f64,
    /// Transaction log entries kept per hub.
    pub log_capacity: usize,
    /// Resource every settlement population consumes.
    pub subsistence_resource: String,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            surplus_threshold: 50.0,
            necessity_threshold: 10.0,
            eval_interval: 60.0,
            export_markup: 1.10,
            import_markup: 1.20,
            starting_balance: 10_000.0,
            log_capacity: 20,
            subsistence_resource: "food".to_string(),
        }
    }
}
