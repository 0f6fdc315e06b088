use crate::core::simulator::{YieldSimulator, DEFAULT_MAX_ITERATIONS};
use crate::process::parameters::SimulationParameters;
use crate::SimulationError;
use std::time::Duration;

/// Collects the process parameters of a simulation run. The construction is
/// made by the object methods exclusively; every field starts at the
/// documented process default. Once the building is finished, the simulator
/// can be built using the `build_simulator()` method.
///
/// # Examples
/// ```
/// use mch_yield_simulator::SimulationBuilder;
///
/// let mut builder = SimulationBuilder::new();
/// builder
///     .target_yield(1000.0)
///     .temperature(250.0)
///     .disable_recycling();
/// let result = builder.build_simulator().unwrap().run().unwrap();
/// assert!(result.final_yield() >= 1000.0);
/// ```
pub struct SimulationBuilder {
    target_yield: f64,           // [kg]
    toluene_increment: f64,      // [kg/h]
    temperature: f64,            // [°C]
    pressure: f64,               // [barg]
    selectivity: f64,            // [-]
    conversion_rate: f64,        // [-]
    recycling_enabled: bool,
    recycling_rate: f64,         // [-]
    hydrogen_toluene_ratio: f64, // [mol H2/mol toluene]
    max_yield_ratio: f64,        // [-]
    max_iterations: usize,
    deadline: Option<Duration>,
}

impl SimulationBuilder {
    pub fn new() -> SimulationBuilder {
        let defaults = SimulationParameters::default();
        SimulationBuilder {
            target_yield: defaults.target_yield(),
            toluene_increment: defaults.toluene_increment(),
            temperature: defaults.temperature(),
            pressure: defaults.pressure(),
            selectivity: defaults.selectivity(),
            conversion_rate: defaults.conversion_rate(),
            recycling_enabled: defaults.recycling_enabled(),
            recycling_rate: defaults.recycling_rate(),
            hydrogen_toluene_ratio: defaults.hydrogen_toluene_ratio(),
            max_yield_ratio: defaults.max_yield_ratio(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            deadline: None,
        }
    }

    /// Takes every process field from a `.json` file. Safety bounds
    /// (iteration cap, deadline) are not part of the file and keep their
    /// current values.
    pub fn load_process<'a>(&'a mut self, file_name: &str) -> Result<&'a mut Self, SimulationError> {
        let params = SimulationParameters::from_file(file_name)?;
        self.target_yield = params.target_yield();
        self.toluene_increment = params.toluene_increment();
        self.temperature = params.temperature();
        self.pressure = params.pressure();
        self.selectivity = params.selectivity();
        self.conversion_rate = params.conversion_rate();
        self.recycling_enabled = params.recycling_enabled();
        self.recycling_rate = params.recycling_rate();
        self.hydrogen_toluene_ratio = params.hydrogen_toluene_ratio();
        self.max_yield_ratio = params.max_yield_ratio();
        Ok(self)
    }

    pub fn target_yield<'a>(&'a mut self, value: f64) -> &'a mut Self {
        self.target_yield = value;
        self
    }
    pub fn toluene_increment<'a>(&'a mut self, value: f64) -> &'a mut Self {
        self.toluene_increment = value;
        self
    }
    pub fn temperature<'a>(&'a mut self, value: f64) -> &'a mut Self {
        self.temperature = value;
        self
    }
    pub fn pressure<'a>(&'a mut self, value: f64) -> &'a mut Self {
        self.pressure = value;
        self
    }
    pub fn selectivity<'a>(&'a mut self, value: f64) -> &'a mut Self {
        self.selectivity = value;
        self
    }
    pub fn conversion_rate<'a>(&'a mut self, value: f64) -> &'a mut Self {
        self.conversion_rate = value;
        self
    }
    pub fn hydrogen_toluene_ratio<'a>(&'a mut self, value: f64) -> &'a mut Self {
        self.hydrogen_toluene_ratio = value;
        self
    }
    pub fn max_yield_ratio<'a>(&'a mut self, value: f64) -> &'a mut Self {
        self.max_yield_ratio = value;
        self
    }

    /// Enables recycling accounting with the given recovery rate.
    pub fn enable_recycling<'a>(&'a mut self, recycling_rate: f64) -> &'a mut Self {
        self.recycling_enabled = true;
        self.recycling_rate = recycling_rate;
        self
    }

    pub fn disable_recycling<'a>(&'a mut self) -> &'a mut Self {
        self.recycling_enabled = false;
        self.recycling_rate = 0.0;
        self
    }

    pub fn max_iterations<'a>(&'a mut self, value: usize) -> &'a mut Self {
        self.max_iterations = value;
        self
    }

    pub fn deadline<'a>(&'a mut self, value: Duration) -> &'a mut Self {
        self.deadline = Some(value);
        self
    }

    /// Validates the collected parameters and builds a `YieldSimulator`.
    /// Any out-of-bounds field is reported before a single iteration runs.
    pub fn build_simulator(&self) -> Result<YieldSimulator, SimulationError> {
        let params = SimulationParameters::new(
            self.target_yield,
            self.toluene_increment,
            self.temperature,
            self.pressure,
            self.selectivity,
            self.conversion_rate,
            self.recycling_enabled,
            self.recycling_rate,
            self.hydrogen_toluene_ratio,
            self.max_yield_ratio,
        )?;
        let mut simulator = YieldSimulator::new(params);
        simulator.set_max_iterations(self.max_iterations);
        if let Some(deadline) = self.deadline {
            simulator.set_deadline(deadline);
        }
        Ok(simulator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_starts_from_the_process_defaults() {
        let simulator = SimulationBuilder::new().build_simulator().unwrap();
        assert_eq!(*simulator.params(), SimulationParameters::default());
    }

    #[test]
    fn builder_overrides_individual_fields() {
        let mut builder = SimulationBuilder::new();
        builder
            .target_yield(1000.0)
            .temperature(300.0)
            .enable_recycling(0.5);
        let simulator = builder.build_simulator().unwrap();
        assert_eq!(simulator.params().target_yield(), 1000.0);
        assert_eq!(simulator.params().temperature(), 300.0);
        assert!(simulator.params().recycling_enabled());
        assert_eq!(simulator.params().recycling_rate(), 0.5);
    }

    #[test]
    fn build_reports_out_of_bounds_fields() {
        let mut builder = SimulationBuilder::new();
        builder.selectivity(1.5);
        assert!(matches!(
            builder.build_simulator(),
            Err(SimulationError::InvalidParameter(_))
        ));
    }

    #[test]
    fn disable_recycling_clears_the_rate() {
        let mut builder = SimulationBuilder::new();
        builder.enable_recycling(0.85).disable_recycling();
        let simulator = builder.build_simulator().unwrap();
        assert!(!simulator.params().recycling_enabled());
    }
}
