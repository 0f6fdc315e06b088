use crate::process::json_reader::JsonSimulation;
use crate::SimulationError;

/// Immutable process parameter set of a simulation run. Parameters are
/// captured once at construction and validated against the documented bounds;
/// a run never starts with an out-of-bounds value.
///
/// The hydrogen-to-toluene ratio is the exception: values outside the 3:1 to
/// 5:1 operating window are accepted and penalized by the yield model instead
/// of being rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    target_yield: f64,           // [kg]
    toluene_increment: f64,      // [kg/h]
    temperature: f64,            // [°C]
    pressure: f64,               // [barg]
    selectivity: f64,            // [-]
    conversion_rate: f64,        // [-]
    recycling_enabled: bool,
    recycling_rate: f64,         // [-] - meaningful only when recycling is enabled
    hydrogen_toluene_ratio: f64, // [mol H2/mol toluene]
    max_yield_ratio: f64,        // [-]
}

impl SimulationParameters {
    pub fn new(
        target_yield: f64,
        toluene_increment: f64,
        temperature: f64,
        pressure: f64,
        selectivity: f64,
        conversion_rate: f64,
        recycling_enabled: bool,
        recycling_rate: f64,
        hydrogen_toluene_ratio: f64,
        max_yield_ratio: f64,
    ) -> Result<SimulationParameters, SimulationError> {
        if !(target_yield > 0.0) {
            return Err(SimulationError::InvalidParameter(format!(
                "target_yield must be positive, got {}",
                target_yield
            )));
        }
        if !(toluene_increment > 0.0) {
            return Err(SimulationError::InvalidParameter(format!(
                "toluene_increment must be positive, got {}",
                toluene_increment
            )));
        }
        if !(10.0..=900.0).contains(&temperature) {
            return Err(SimulationError::InvalidParameter(format!(
                "temperature must be within [10, 900] °C, got {}",
                temperature
            )));
        }
        if !(pressure > 0.0) {
            return Err(SimulationError::InvalidParameter(format!(
                "pressure must be positive, got {}",
                pressure
            )));
        }
        if !(0.0..=1.0).contains(&selectivity) {
            return Err(SimulationError::InvalidParameter(format!(
                "selectivity must be within [0, 1], got {}",
                selectivity
            )));
        }
        if !(0.0..=1.0).contains(&conversion_rate) {
            return Err(SimulationError::InvalidParameter(format!(
                "conversion_rate must be within [0, 1], got {}",
                conversion_rate
            )));
        }
        if recycling_enabled && !(0.0..=1.0).contains(&recycling_rate) {
            return Err(SimulationError::InvalidParameter(format!(
                "recycling_rate must be within [0, 1], got {}",
                recycling_rate
            )));
        }
        if !hydrogen_toluene_ratio.is_finite() {
            return Err(SimulationError::InvalidParameter(format!(
                "hydrogen_toluene_ratio must be finite, got {}",
                hydrogen_toluene_ratio
            )));
        }
        if !(max_yield_ratio > 0.0) {
            return Err(SimulationError::InvalidParameter(format!(
                "max_yield_ratio must be positive, got {}",
                max_yield_ratio
            )));
        }

        Ok(SimulationParameters {
            target_yield,
            toluene_increment,
            temperature,
            pressure,
            selectivity,
            conversion_rate,
            recycling_enabled,
            recycling_rate,
            hydrogen_toluene_ratio,
            max_yield_ratio,
        })
    }

    /// Creates a parameter set from a `.json` file.
    /// # Examples
    /// ```no_run
    /// use mch_yield_simulator::SimulationParameters;
    /// let params = SimulationParameters::from_file("simulation.json").unwrap();
    /// ```
    pub fn from_file(file_name: &str) -> Result<SimulationParameters, SimulationError> {
        let json_simulation = SimulationParameters::reading_json(file_name)?;
        SimulationParameters::from_json(json_simulation)
    }

    pub fn from_json(json: JsonSimulation) -> Result<SimulationParameters, SimulationError> {
        let recycling_rate = match (json.recycling_enabled, json.recycling_rate) {
            (true, Some(rate)) => rate,
            (true, None) => {
                return Err(SimulationError::InvalidParameter(
                    "recycling_rate must be provided when recycling is enabled".to_string(),
                ));
            }
            (false, _) => 0.0,
        };
        SimulationParameters::new(
            json.target_yield,
            json.toluene_increment,
            json.temperature,
            json.pressure,
            json.selectivity,
            json.conversion_rate,
            json.recycling_enabled,
            recycling_rate,
            json.hydrogen_toluene_ratio,
            json.max_yield_ratio,
        )
    }

    fn reading_json(file_name: &str) -> Result<JsonSimulation, SimulationError> {
        let json_file = std::fs::read_to_string(file_name).map_err(SimulationError::Io)?;
        serde_json::from_str(&json_file).map_err(SimulationError::Parse)
    }

    pub fn target_yield(&self) -> f64 {
        self.target_yield
    }
    pub fn toluene_increment(&self) -> f64 {
        self.toluene_increment
    }
    pub fn temperature(&self) -> f64 {
        self.temperature
    }
    pub fn pressure(&self) -> f64 {
        self.pressure
    }
    pub fn selectivity(&self) -> f64 {
        self.selectivity
    }
    pub fn conversion_rate(&self) -> f64 {
        self.conversion_rate
    }
    pub fn recycling_enabled(&self) -> bool {
        self.recycling_enabled
    }
    pub fn recycling_rate(&self) -> f64 {
        self.recycling_rate
    }
    pub fn hydrogen_toluene_ratio(&self) -> f64 {
        self.hydrogen_toluene_ratio
    }
    pub fn max_yield_ratio(&self) -> f64 {
        self.max_yield_ratio
    }

    /// Fraction of the raw yield that survives selectivity and conversion.
    pub fn effective_rate(&self) -> f64 {
        self.selectivity * self.conversion_rate
    }
}

impl Default for SimulationParameters {
    fn default() -> SimulationParameters {
        SimulationParameters {
            target_yield: 95000.0,
            toluene_increment: 60000.0,
            temperature: 200.0,
            pressure: 10.0,
            selectivity: 0.95,
            conversion_rate: 0.9,
            recycling_enabled: true,
            recycling_rate: 0.85,
            hydrogen_toluene_ratio: 4.0,
            max_yield_ratio: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Result<SimulationParameters, SimulationError> {
        SimulationParameters::new(95000.0, 60000.0, 200.0, 10.0, 0.95, 0.9, true, 0.85, 4.0, 1.0)
    }

    #[test]
    fn accepts_the_documented_defaults() {
        let params = valid().unwrap();
        assert_eq!(params, SimulationParameters::default());
        assert!((params.effective_rate() - 0.855).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_positive_target_yield() {
        let result = SimulationParameters::new(0.0, 60000.0, 200.0, 10.0, 0.95, 0.9, true, 0.85, 4.0, 1.0);
        assert!(matches!(result, Err(SimulationError::InvalidParameter(_))));
    }

    #[test]
    fn rejects_non_positive_toluene_increment() {
        let result = SimulationParameters::new(95000.0, 0.0, 200.0, 10.0, 0.95, 0.9, true, 0.85, 4.0, 1.0);
        assert!(matches!(result, Err(SimulationError::InvalidParameter(_))));
    }

    #[test]
    fn rejects_temperature_outside_catalyst_range() {
        let low = SimulationParameters::new(95000.0, 60000.0, 9.9, 10.0, 0.95, 0.9, true, 0.85, 4.0, 1.0);
        let high = SimulationParameters::new(95000.0, 60000.0, 900.1, 10.0, 0.95, 0.9, true, 0.85, 4.0, 1.0);
        assert!(low.is_err());
        assert!(high.is_err());
    }

    #[test]
    fn rejects_non_positive_pressure() {
        let result = SimulationParameters::new(95000.0, 60000.0, 200.0, -1.0, 0.95, 0.9, true, 0.85, 4.0, 1.0);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_fractions_outside_unit_interval() {
        let selectivity = SimulationParameters::new(95000.0, 60000.0, 200.0, 10.0, 1.5, 0.9, true, 0.85, 4.0, 1.0);
        let conversion = SimulationParameters::new(95000.0, 60000.0, 200.0, 10.0, 0.95, -0.1, true, 0.85, 4.0, 1.0);
        let recycling = SimulationParameters::new(95000.0, 60000.0, 200.0, 10.0, 0.95, 0.9, true, 1.1, 4.0, 1.0);
        assert!(selectivity.is_err());
        assert!(conversion.is_err());
        assert!(recycling.is_err());
    }

    #[test]
    fn rejects_nan_fractions() {
        let result = SimulationParameters::new(
            95000.0, 60000.0, 200.0, 10.0, f64::NAN, 0.9, true, 0.85, 4.0, 1.0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn ignores_recycling_rate_when_recycling_is_disabled() {
        let result = SimulationParameters::new(95000.0, 60000.0, 200.0, 10.0, 0.95, 0.9, false, 7.0, 4.0, 1.0);
        assert!(result.is_ok());
    }

    #[test]
    fn accepts_hydrogen_ratio_outside_operating_window() {
        // penalized by the yield model, never rejected
        let result = SimulationParameters::new(95000.0, 60000.0, 200.0, 10.0, 0.95, 0.9, true, 0.85, 10.0, 1.0);
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_non_positive_max_yield_ratio() {
        let result = SimulationParameters::new(95000.0, 60000.0, 200.0, 10.0, 0.95, 0.9, true, 0.85, 4.0, 0.0);
        assert!(result.is_err());
    }

    #[test]
    fn json_defaults_max_yield_ratio_to_one() {
        let json: crate::JsonSimulation = serde_json::from_str(
            r#"{
                "target_yield": 1000.0,
                "toluene_increment": 60000.0,
                "temperature": 200.0,
                "pressure": 10.0,
                "selectivity": 0.95,
                "conversion_rate": 0.9,
                "recycling_enabled": false,
                "hydrogen_toluene_ratio": 4.0
            }"#,
        )
        .unwrap();
        let params = SimulationParameters::from_json(json).unwrap();
        assert_eq!(params.max_yield_ratio(), 1.0);
        assert!(!params.recycling_enabled());
    }

    #[test]
    fn json_requires_recycling_rate_when_enabled() {
        let json: crate::JsonSimulation = serde_json::from_str(
            r#"{
                "target_yield": 1000.0,
                "toluene_increment": 60000.0,
                "temperature": 200.0,
                "pressure": 10.0,
                "selectivity": 0.95,
                "conversion_rate": 0.9,
                "recycling_enabled": true,
                "hydrogen_toluene_ratio": 4.0
            }"#,
        )
        .unwrap();
        assert!(SimulationParameters::from_json(json).is_err());
    }

    #[test]
    fn reads_parameters_from_file() {
        let path = std::env::temp_dir().join("mch_simulation_params_test.json");
        std::fs::write(
            &path,
            r#"{
                "target_yield": 1000.0,
                "toluene_increment": 60000.0,
                "temperature": 200.0,
                "pressure": 10.0,
                "selectivity": 0.95,
                "conversion_rate": 0.9,
                "recycling_enabled": true,
                "recycling_rate": 0.85,
                "hydrogen_toluene_ratio": 4.0,
                "max_yield_ratio": 1.0
            }"#,
        )
        .unwrap();
        let params = SimulationParameters::from_file(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(params.target_yield(), 1000.0);
        assert_eq!(params.recycling_rate(), 0.85);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = SimulationParameters::from_file("no_such_simulation.json");
        assert!(matches!(result, Err(SimulationError::Io(_))));
    }
}
