use serde::{Deserialize, Serialize};

fn default_max_yield_ratio() -> f64 {
    1.0
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonSimulation {
    pub target_yield: f64,           // [kg]
    pub toluene_increment: f64,      // [kg/h]
    pub temperature: f64,            // [°C]
    pub pressure: f64,               // [barg]
    pub selectivity: f64,            // [-]
    pub conversion_rate: f64,        // [-]
    pub recycling_enabled: bool,
    pub recycling_rate: Option<f64>, // [-] - required when recycling is enabled
    pub hydrogen_toluene_ratio: f64, // [mol H2/mol toluene]
    #[serde(default = "default_max_yield_ratio")]
    pub max_yield_ratio: f64, // [-]
}
